use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use shelf_core::{ItemId, ValidationError};
use shelf_registry::ItemRegistry;

use crate::app::{dto, errors};

/// Item CRUD routes.
///
/// The collection path carries a trailing slash; paths are matched exactly,
/// no slash-redirect magic.
pub fn router() -> Router {
    Router::new()
        .route("/items/", post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

pub async fn create_item(
    Extension(registry): Extension<Arc<ItemRegistry>>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    let item = match dto::item_from_payload(body) {
        Ok(item) => item,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match registry.create(item) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::registry_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(registry): Extension<Arc<ItemRegistry>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match registry.get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::registry_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(registry): Extension<Arc<ItemRegistry>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ItemPayload>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::validation_error_to_response(e),
    };

    // Full replace: the body must agree with the path about which item it is.
    if body.id != id.as_i64() {
        return errors::validation_error_to_response(ValidationError::single(
            "id",
            "must match the id in the request path",
        ));
    }

    let item = match dto::item_from_payload(body) {
        Ok(item) => item,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match registry.update(id, item) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::registry_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(registry): Extension<Arc<ItemRegistry>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::validation_error_to_response(e),
    };

    match registry.delete(id) {
        Ok(item) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "detail": format!("Item {} deleted successfully", item.id()),
            })),
        )
            .into_response(),
        Err(e) => errors::registry_error_to_response(e),
    }
}
