//! Domain error model.
//!
//! Exactly two kinds of failure exist: malformed input ([`ValidationError`])
//! and registry-state conflicts ([`RegistryError`]). Keep it that way — every
//! fallible operation in the system maps onto one of the two.

use serde::Serialize;
use thiserror::Error;

/// Registry-state conflict.
///
/// The `Display` messages are part of the HTTP contract; clients match on
/// them, so they must stay stable.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Create targeted an identifier that is already a key.
    #[error("Item already exists with this ID")]
    AlreadyExists,

    /// Get/Update/Delete targeted an identifier with no entry.
    #[error("Item not found")]
    NotFound,
}

/// A single violated field rule, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A value failed validation.
///
/// Carries every violation found, not just the first, so callers can report
/// them all in one response. Never produced alongside a state change.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("validation failed: {}", summarize(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Shorthand for a single-field failure.
    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        Self::new(vec![FieldViolation::new(field, message)])
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}
