//! `shelf-core` — the Item domain.
//!
//! This crate contains **pure domain** types (no HTTP or storage concerns):
//! the validated [`Item`] record, its identifier, and the two error kinds
//! every operation can surface.

pub mod error;
pub mod item;

pub use error::{FieldViolation, RegistryError, ValidationError};
pub use item::{DESCRIPTION_MAX_CHARS, Item, ItemId, NAME_MAX_CHARS, NAME_MIN_CHARS};
