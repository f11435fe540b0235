//! `shelf-registry` — the in-memory item store.
//!
//! One concern: mapping [`shelf_core::ItemId`] to validated
//! [`shelf_core::Item`] records, atomically per operation.

pub mod store;

pub use store::ItemRegistry;
