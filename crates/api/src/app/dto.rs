use serde::Deserialize;

use shelf_core::{Item, ItemId, ValidationError};

// -------------------------
// Request DTOs
// -------------------------

/// Inbound item payload, as the wire sees it: not yet validated.
///
/// A missing `description` key and an explicit `null` both map to `None`.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// -------------------------
// Payload → domain mapping
// -------------------------

pub fn item_from_payload(payload: ItemPayload) -> Result<Item, ValidationError> {
    Item::new(ItemId::new(payload.id), payload.name, payload.description)
}
