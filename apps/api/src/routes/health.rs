use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Welcome message confirming the API is up.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Welcome to the AI Video Producer API!"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "video-producer-api"
    }))
}
