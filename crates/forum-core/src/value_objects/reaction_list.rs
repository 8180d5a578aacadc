//! Reaction list - per-user like/dislike entries on a post or comment
//!
//! The whole list is persisted as a single JSON text column shaped as
//! `[{"userId": "...", "isLike": true, "userName": "..."}]`. Decoding is
//! lenient: anything that is not an array degrades to an empty list, and
//! malformed elements inside an array are skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A single user's reaction, with a snapshot of their display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionEntry {
    pub user_id: String,
    pub is_like: bool,
    #[serde(default)]
    pub user_name: String,
}

impl ReactionEntry {
    /// Create a new reaction entry
    pub fn new(user_id: impl Into<String>, is_like: bool, user_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            is_like,
            user_name: user_name.into(),
        }
    }

    /// Polarity of this entry
    #[inline]
    pub fn status(&self) -> ReactionStatus {
        ReactionStatus::from_is_like(self.is_like)
    }
}

/// Current reaction state of one user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReactionStatus {
    Up,
    Down,
}

impl ReactionStatus {
    #[inline]
    pub fn from_is_like(is_like: bool) -> Self {
        if is_like {
            Self::Up
        } else {
            Self::Down
        }
    }

    #[inline]
    pub fn is_like(self) -> bool {
        matches!(self, Self::Up)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Aggregated counts plus the viewer's own state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactionSummary {
    pub likes: usize,
    pub dislikes: usize,
    pub me: Option<ReactionStatus>,
}

/// Ordered reaction entries with at most one entry per user id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReactionList(Vec<ReactionEntry>);

impl ReactionList {
    /// Create an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from entries, keeping the first entry for each user id
    pub fn from_entries(entries: Vec<ReactionEntry>) -> Self {
        let mut normalized: Vec<ReactionEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if normalized.iter().any(|e| e.user_id == entry.user_id) {
                warn!(user_id = %entry.user_id, "Dropping duplicate reaction entry");
                continue;
            }
            normalized.push(entry);
        }
        Self(normalized)
    }

    /// Decode a stored value.
    ///
    /// Accepts a JSON-encoded string, a native array, or null. Never fails:
    /// malformed input is logged and yields an empty list, and malformed
    /// elements of an otherwise valid array are dropped individually.
    pub fn decode(raw: &Value) -> Self {
        match raw {
            Value::Null => Self::new(),
            Value::String(text) => Self::decode_text(text),
            Value::Array(items) => Self::decode_array(items),
            other => {
                warn!(kind = %value_kind(other), "Unexpected reaction value, treating as empty");
                Self::new()
            }
        }
    }

    /// Decode the text column as read from the store
    pub fn decode_column(raw: Option<&str>) -> Self {
        raw.map_or_else(Self::new, Self::decode_text)
    }

    fn decode_text(text: &str) -> Self {
        if text.trim().is_empty() {
            return Self::new();
        }

        match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(items)) => Self::decode_array(&items),
            Ok(Value::Null) => Self::new(),
            Ok(other) => {
                warn!(kind = %value_kind(&other), "Reaction column is not an array, treating as empty");
                Self::new()
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse reaction column, treating as empty");
                Self::new()
            }
        }
    }

    /// Bad elements are skipped one by one so the rest of the list survives
    /// the next write
    fn decode_array(items: &[Value]) -> Self {
        let entries = items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| {
                ReactionEntry::deserialize(item)
                    .map_err(|e| warn!(index, error = %e, "Skipping malformed reaction entry"))
                    .ok()
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Serialize to the storage representation (JSON array text)
    pub fn encode(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|e| {
            warn!(error = %e, "Failed to encode reactions");
            String::from("[]")
        })
    }

    /// Toggle a user's reaction and return the resulting list.
    ///
    /// No entry: append. Same polarity: remove. Opposite polarity: replace in place.
    #[must_use]
    pub fn toggle(&self, user_id: &str, is_like: bool, display_name: &str) -> Self {
        let mut entries = self.0.clone();

        match entries.iter().position(|e| e.user_id == user_id) {
            None => entries.push(ReactionEntry::new(user_id, is_like, display_name)),
            Some(idx) if entries[idx].is_like == is_like => {
                entries.remove(idx);
            }
            Some(idx) => entries[idx] = ReactionEntry::new(user_id, is_like, display_name),
        }

        Self(entries)
    }

    /// Number of entries with the given polarity
    pub fn count_by(&self, is_like: bool) -> usize {
        self.0.iter().filter(|e| e.is_like == is_like).count()
    }

    /// Current reaction state for one user
    pub fn status_for(&self, user_id: &str) -> Option<ReactionStatus> {
        self.0
            .iter()
            .find(|e| e.user_id == user_id)
            .map(ReactionEntry::status)
    }

    /// Display names of users with the given polarity, in list order
    pub fn names_by(&self, is_like: bool) -> Vec<&str> {
        self.0
            .iter()
            .filter(|e| e.is_like == is_like)
            .map(|e| e.user_name.as_str())
            .collect()
    }

    /// Counts and, when a viewer is given, the viewer's state
    pub fn summary_for(&self, viewer_id: Option<&str>) -> ReactionSummary {
        ReactionSummary {
            likes: self.count_by(true),
            dislikes: self.count_by(false),
            me: viewer_id.and_then(|id| self.status_for(id)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[ReactionEntry] {
        &self.0
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
