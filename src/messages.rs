/// Wire message types for dashboard client-server communication
use serde::{Deserialize, Serialize};

use crate::charts::DashboardFrame;

/// Messages sent from client to server
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum ClientMessage {
    /// Request the list of selectable periods
    ListPeriods,

    /// Replace the period selection; the server answers with a fresh
    /// dashboard frame
    SetSelection { periods: Vec<String> },
}

/// Messages sent from server to client
#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// All periods present in the base table, chronologically
    Periods { periods: Vec<String> },

    /// The four recomputed charts for the requested selection
    Dashboard { frame: DashboardFrame },

    /// Error occurred
    Error { message: String },
}
