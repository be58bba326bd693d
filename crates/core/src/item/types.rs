use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// The record persisted per accepted request.
///
/// `timestamp` is set by the server when the record is built and is never
/// caller-supplied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: String,
    pub data: String,
    pub timestamp: String,
}

/// Request payload for submitting an item.
///
/// Both fields are optional at the serde level so a missing field reaches
/// validation and produces the documented error instead of a deserialization
/// failure.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub data: Option<String>,
}

impl ItemRecord {
    /// Creates a record stamped with the current instant.
    ///
    /// The timestamp is RFC 3339 with millisecond precision and a trailing
    /// `Z`, matching the format already present in the table.
    pub fn new(id: String, data: String) -> Self {
        Self {
            id,
            data,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl SubmitItem {
    /// Validates that both required fields are present and non-empty,
    /// producing a timestamped record.
    pub fn validate(self) -> Result<ItemRecord, ValidationError> {
        match (self.id, self.data) {
            (Some(id), Some(data)) if !id.is_empty() && !data.is_empty() => {
                Ok(ItemRecord::new(id, data))
            }
            _ => Err(ValidationError::MissingFields),
        }
    }
}
