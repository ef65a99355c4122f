//! Liveness and store health handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

/// Tables reported by the health check
const MAX_REPORTED_TABLES: usize = 10;

/// GET / - Liveness message
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Spend Tracker API is running"
    }))
}

/// Store health report
#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub backend: &'static str,
    pub database: String,
    pub connection_status: &'static str,
    /// Whether a database location is set
    pub database_configured: bool,
    pub encrypted: bool,
    pub tables: Vec<String>,
}

/// GET /test - Check that the store is reachable and list its tables
///
/// Always answers 200; failures are reported in the body.
pub async fn store_health(State(state): State<Arc<AppState>>) -> Json<StoreHealth> {
    let mut health = StoreHealth {
        backend: "running",
        database: "not available".to_string(),
        connection_status: "Not Connected",
        database_configured: !state.db.path().is_empty(),
        encrypted: false,
        tables: vec![],
    };

    match state.db.list_tables() {
        Ok(mut tables) => {
            tables.truncate(MAX_REPORTED_TABLES);
            health.tables = tables;
            health.database = "connected".to_string();
            health.connection_status = "Connected";
            health.encrypted = state.db.is_encrypted();
        }
        Err(e) => {
            warn!(error = %e, "Store health check failed");
            let detail: String = e.to_string().chars().take(50).collect();
            health.database = format!("error: {}", detail);
        }
    }

    Json(health)
}
