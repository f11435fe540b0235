use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Welcome banner; doubles as a liveness probe for deploy tooling.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "message": "Welcome to the Item API",
    }))
}
