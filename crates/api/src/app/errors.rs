use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shelf_core::{RegistryError, ValidationError};

pub fn registry_error_to_response(err: RegistryError) -> axum::response::Response {
    match err {
        RegistryError::AlreadyExists => detail_error(StatusCode::BAD_REQUEST, err.to_string()),
        RegistryError::NotFound => detail_error(StatusCode::NOT_FOUND, err.to_string()),
    }
}

/// 422 with one `{field, message}` object per violated rule.
pub fn validation_error_to_response(err: ValidationError) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        axum::Json(json!({ "detail": err.violations() })),
    )
        .into_response()
}

pub fn detail_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({ "detail": message.into() })),
    )
        .into_response()
}
