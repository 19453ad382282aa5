//! Message record entity.

use super::RecordId;
use serde::{Deserialize, Deserializer, Serialize};

/// A message payload stored as one row of the `rmqDemo` table.
///
/// The identifier is `None` until a repository persists the record and
/// assigns one. Equality compares both fields, so an unsaved record never
/// equals its persisted counterpart.
///
/// Deserialisation accepts what the table accepts: a missing or `null`
/// message becomes the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default)]
    id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl MessageRecord {
    /// Creates an empty, unsaved record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unsaved record carrying `message`.
    #[must_use]
    pub fn unsaved(message: impl Into<String>) -> Self {
        Self {
            id: None,
            message: message.into(),
        }
    }

    /// Creates a record with both fields populated.
    ///
    /// Repositories use this to reconstruct persisted rows.
    #[must_use]
    pub fn with_id(id: RecordId, message: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            message: message.into(),
        }
    }

    /// Returns the storage-assigned identifier, if any.
    #[must_use]
    pub const fn id(&self) -> Option<RecordId> {
        self.id
    }

    /// Returns the message payload.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` once a repository has assigned an identifier.
    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Replaces the identifier.
    pub const fn set_id(&mut self, id: Option<RecordId>) {
        self.id = id;
    }

    /// Replaces the message payload.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Consumes the record, returning the message payload.
    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}
