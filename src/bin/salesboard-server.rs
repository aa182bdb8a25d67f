/// Salesboard Dashboard Server
///
/// Standalone server that loads the sales CSV once at startup and serves
/// the period list and the four dashboard charts over HTTP and WebSocket.

use salesboard::server::run_server;
use salesboard::websocket::AppState;
use salesboard::SalesStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // --debug raises the default log filter, the only supported flag
    let debug = std::env::args().any(|arg| arg == "--debug");
    let default_filter = if debug { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    // Get host, port and data file from environment or use defaults
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .expect("PORT must be a number");
    let data_path =
        std::env::var("SALES_DATA").unwrap_or_else(|_| "fake_sales_data.csv".to_string());

    // A bad data file is fatal: the server never starts without its table
    let store = match SalesStore::load_csv(&data_path) {
        Ok(store) => store,
        Err(e) => {
            log::error!("failed to load {}: {}", data_path, e);
            std::process::exit(1);
        }
    };

    run_server(&host, port, AppState::new(store)).await
}
