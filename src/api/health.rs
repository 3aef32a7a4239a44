use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for the local callback server.
pub async fn health() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "status": "listening",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
