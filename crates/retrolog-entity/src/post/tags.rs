//! Tag lists and their persisted form.
//!
//! Tags are exchanged as an ordered list of strings and stored in a single
//! TEXT column as a JSON array. JSON escaping keeps commas, quotes and
//! whitespace inside a tag intact, and an empty list is stored as `[]`.

use serde::{Deserialize, Serialize};

/// An ordered list of short tag strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagList(Vec<String>);

impl TagList {
    /// Wrap tags exactly as given.
    pub fn new(tags: Vec<String>) -> Self {
        Self(tags)
    }

    /// Parse form-style input such as `"retro, html,,web"`.
    ///
    /// Pieces are trimmed and empty pieces are dropped.
    pub fn from_comma_separated(input: &str) -> Self {
        Self(
            input
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        )
    }

    /// Encode for the `tags` column.
    pub fn to_storage(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }

    /// Decode the `tags` column. A blank column reads as no tags.
    pub fn from_storage(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map(Self)
    }

    /// Borrow the tags.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for TagList {
    fn from(tags: Vec<String>) -> Self {
        Self(tags)
    }
}

impl TryFrom<String> for TagList {
    type Error = serde_json::Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::from_storage(&raw)
    }
}
