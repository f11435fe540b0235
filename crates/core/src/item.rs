//! The Item record: a validated triple of identifier, name, and optional
//! description.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FieldViolation, ValidationError};

/// Minimum item name length, counted on the trimmed form.
pub const NAME_MIN_CHARS: usize = 3;
/// Maximum item name length, counted on the trimmed form.
pub const NAME_MAX_CHARS: usize = 50;
/// Maximum item description length.
pub const DESCRIPTION_MAX_CHARS: usize = 200;

/// Identifier of an item. Caller-supplied; doubles as the registry key.
///
/// Positivity is enforced by [`Item::new`], not here, so lookups for
/// arbitrary integers stay expressible.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .parse::<i64>()
            .map_err(|_| ValidationError::single("id", "must be an integer"))?;
        Ok(Self(value))
    }
}

/// A validated item record.
///
/// Fields are private and the only constructor is [`Item::new`], which runs
/// every field rule, so a value of this type is valid by construction.
/// Serialization is one-way (responses only); inbound payloads deserialize
/// into a raw shape elsewhere and convert through the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: Option<String>,
}

impl Item {
    /// Validate the fields and construct the record.
    ///
    /// Reports every violated field at once, one violation per field. The
    /// name is checked against its trimmed form but stored verbatim; lengths
    /// are Unicode scalar counts, not bytes.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let mut violations = Vec::new();

        if id.as_i64() <= 0 {
            violations.push(FieldViolation::new("id", "must be greater than 0"));
        }

        let trimmed = name.trim();
        if trimmed.is_empty() {
            violations.push(FieldViolation::new(
                "name",
                "cannot be blank or whitespace-only",
            ));
        } else {
            let count = trimmed.chars().count();
            if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&count) {
                violations.push(FieldViolation::new(
                    "name",
                    format!(
                        "must be between {} and {} characters after trimming",
                        NAME_MIN_CHARS, NAME_MAX_CHARS
                    ),
                ));
            }
        }

        if let Some(description) = &description {
            if description.chars().count() > DESCRIPTION_MAX_CHARS {
                violations.push(FieldViolation::new(
                    "description",
                    format!("must be at most {} characters", DESCRIPTION_MAX_CHARS),
                ));
            }
        }

        if !violations.is_empty() {
            return Err(ValidationError::new(violations));
        }

        Ok(Self {
            id,
            name,
            description,
        })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
