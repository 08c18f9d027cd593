use std::time::Duration;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Upper bound on the store round-trip so a dead database cannot stall probes.
const PING_TIMEOUT: Duration = Duration::from_secs(2);

/// GET /health
/// Reports service version and whether the prompt store answers.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let database = match tokio::time::timeout(PING_TIMEOUT, state.store.ping()).await {
        Ok(Ok(())) => "ok",
        Ok(Err(e)) => {
            tracing::warn!("Health check could not reach the store: {e}");
            "unreachable"
        }
        Err(_) => {
            tracing::warn!("Health check timed out after {PING_TIMEOUT:?}");
            "unreachable"
        }
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "database": database
    }))
}
