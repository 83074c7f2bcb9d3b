//! Clip record entity

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a clip, unique for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipId(String);

impl ClipId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClipId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ClipId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ClipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single captured unit of clipboard text.
///
/// Records are only ever built by [`super::HistoryStore`], which guarantees
/// the text is not blank and the id has never been handed out before.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClipRecord {
    id: ClipId,
    text: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

impl ClipRecord {
    pub(super) fn new(text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ClipId::generate(),
            text,
            created_at,
        }
    }

    pub fn id(&self) -> &ClipId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = ClipId::generate();
        let b = ClipId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn record_serializes_with_epoch_millis() {
        let created = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        let record = ClipRecord::new("hello".to_string(), created);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["text"], "hello");
        assert_eq!(json["createdAt"], 1_700_000_000_123i64);
        assert_eq!(json["id"], record.id().as_str());
    }

    #[test]
    fn clip_id_display_matches_str() {
        let id = ClipId::from("abc-123");
        assert_eq!(id.to_string(), "abc-123");
        assert_eq!(id.as_str(), "abc-123");
    }
}
