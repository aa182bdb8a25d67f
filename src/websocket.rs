/// WebSocket channel for reactive dashboard updates
use actix::prelude::*;
use actix_web_actors::ws;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::charts::DashboardFrame;
use crate::messages::{ClientMessage, ServerMessage};
use crate::pipeline::Selection;
use crate::store::SalesStore;

/// How often heartbeat pings are sent
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
/// How long before lack of client response causes a timeout
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// Shared state for all connections: the base table, loaded once at
/// startup and read-only for the rest of the process. Connections share
/// it without locking; each selection change just recomputes from it.
pub struct AppState {
    pub store: Arc<SalesStore>,
}

impl AppState {
    pub fn new(store: SalesStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Period labels for the selection control, chronologically.
    pub fn period_labels(&self) -> Vec<String> {
        self.store
            .distinct_periods()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }
}

/// WebSocket connection actor
pub struct DashboardWebSocket {
    hb: Instant,
    state: actix_web::web::Data<AppState>,
}

impl DashboardWebSocket {
    pub fn new(state: actix_web::web::Data<AppState>) -> Self {
        Self {
            hb: Instant::now(),
            state,
        }
    }

    fn hb(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
                log::info!("WebSocket client heartbeat failed, disconnecting");
                ctx.stop();
                return;
            }
            ctx.ping(b"");
        });
    }

    fn send(&self, msg: &ServerMessage, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.text(serde_json::to_string(msg).unwrap());
    }

    fn handle_client_message(&mut self, msg: ClientMessage, ctx: &mut ws::WebsocketContext<Self>) {
        match msg {
            ClientMessage::ListPeriods => {
                let response = ServerMessage::Periods {
                    periods: self.state.period_labels(),
                };
                self.send(&response, ctx);
            }

            ClientMessage::SetSelection { periods } => {
                // Unknown or malformed labels drop out here; they are not
                // errors, they just select nothing.
                let selection = Selection::from_labels(&periods);
                let frame = DashboardFrame::compute(&self.state.store, &selection);
                self.send(&ServerMessage::Dashboard { frame }, ctx);
            }
        }
    }
}

impl Actor for DashboardWebSocket {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        self.hb(ctx);

        // New clients start with every period selected, matching the
        // selection control's startup default.
        self.send(
            &ServerMessage::Periods {
                periods: self.state.period_labels(),
            },
            ctx,
        );

        let selection = Selection::all(&self.state.store);
        let frame = DashboardFrame::compute(&self.state.store, &selection);
        self.send(&ServerMessage::Dashboard { frame }, ctx);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for DashboardWebSocket {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.hb = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.hb = Instant::now();
            }
            Ok(ws::Message::Text(text)) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(client_msg) => {
                    self.handle_client_message(client_msg, ctx);
                }
                Err(e) => {
                    self.send(
                        &ServerMessage::Error {
                            message: format!("Invalid message format: {}", e),
                        },
                        ctx,
                    );
                }
            },
            Ok(ws::Message::Binary(_)) => {
                log::warn!("unexpected binary message");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => ctx.stop(),
        }
    }
}
