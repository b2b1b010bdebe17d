//! Document domain model.
//!
//! # Responsibility
//! - Define the stored record shape shared by store, filter and service code.
//! - Provide draft construction for documents that have no identity yet.
//!
//! # Invariants
//! - An empty-string `id` is equivalent to no `id` at all (`key()` is the
//!   single place encoding that rule).
//! - `created` is Unix epoch milliseconds when present.

use serde::{Deserialize, Serialize};

/// Unix epoch milliseconds.
///
/// Kept as a type alias to make timestamp intent explicit in signatures.
pub type EpochMillis = i64;

/// Document author reference.
///
/// Identity is carried by `id`; filtering compares authors by `id` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Stable author identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Canonical stored record.
///
/// Every field is optional on input; the store normalizes `id` and `created`
/// during save. Callers read back the normalized value from the save result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Storage key. Absent or empty means "not yet saved".
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
    /// Creation time in epoch milliseconds. Assigned on first save when the
    /// store generates the identity; otherwise left as the caller provided.
    pub created: Option<EpochMillis>,
}

impl Document {
    /// Creates an empty, unsaved document.
    pub fn draft() -> Self {
        Self::default()
    }

    /// Sets the storage key. An empty string still counts as "no key".
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_created(mut self, created: EpochMillis) -> Self {
        self.created = Some(created);
        self
    }

    /// Returns the non-empty identifier used as the storage key, if any.
    pub fn key(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
