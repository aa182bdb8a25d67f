/// HTTP server exposing the dashboard data API and WebSocket channel
use actix_web::{middleware, web, App, Error, HttpRequest, HttpResponse, HttpServer};
use actix_web_actors::ws;
use serde::Deserialize;

use crate::charts::DashboardFrame;
use crate::pipeline::Selection;
use crate::websocket::{AppState, DashboardWebSocket};

/// WebSocket endpoint handler
async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let resp = ws::start(DashboardWebSocket::new(state), &req, stream)?;
    Ok(resp)
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "message": "Salesboard dashboard server is running"
    }))
}

/// Selectable periods, chronologically
async fn list_periods(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "periods": state.period_labels()
    }))
}

/// Request body for `/dashboard`: the selected period labels
#[derive(Debug, Deserialize)]
struct DashboardRequest {
    periods: Vec<String>,
}

/// Recompute the four charts for a selection
async fn dashboard(state: web::Data<AppState>, body: web::Json<DashboardRequest>) -> HttpResponse {
    let selection = Selection::from_labels(&body.periods);
    let frame = DashboardFrame::compute(&state.store, &selection);
    HttpResponse::Ok().json(frame)
}

/// Start the HTTP server with WebSocket support
pub async fn run_server(host: &str, port: u16, state: AppState) -> std::io::Result<()> {
    let state = web::Data::new(state);

    println!("🚀 Salesboard Dashboard Server");
    println!("====================================");
    println!("📡 WebSocket: ws://{}:{}/ws", host, port);
    println!("📊 Dashboard: http://{}:{}/dashboard", host, port);
    println!("🏥 Health check: http://{}:{}/health", host, port);
    println!("====================================");
    println!();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // Enable logger
            .wrap(middleware::Logger::default())
            // CORS for development
            .wrap(
                actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            // WebSocket endpoint
            .route("/ws", web::get().to(ws_index))
            // Health check
            .route("/health", web::get().to(health_check))
            // Dashboard data API
            .route("/periods", web::get().to(list_periods))
            .route("/dashboard", web::post().to(dashboard))
    })
    .bind((host, port))?
    .run()
    .await
}
