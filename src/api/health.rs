use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use super::routes::AppState;

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let generation = if state.feedback_service.has_credential() {
        "live"
    } else {
        "fallback"
    };

    Ok(Json(json!({
        "status": "healthy",
        "service": "bonafit-coach",
        "version": env!("CARGO_PKG_VERSION"),
        "generation": generation,
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
