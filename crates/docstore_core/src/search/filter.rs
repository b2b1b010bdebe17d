//! Multi-criteria document filtering.
//!
//! # Responsibility
//! - Define [`SearchRequest`] and evaluate it against single documents.
//! - Keep per-dimension match rules independent and auditable.
//!
//! # Invariants
//! - A request dimension that is `None` or an empty list always matches and
//!   never resets the verdict of another dimension.
//! - Date bounds are inclusive; documents without a creation time pass both
//!   date dimensions.

use crate::model::document::{Document, EpochMillis};

/// Filter specification for [`search`](crate::DocumentRepository::search).
///
/// Each field is optional; the overall match is the conjunction of all
/// provided dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Title must start with at least one of these prefixes (case-sensitive).
    pub title_prefixes: Option<Vec<String>>,
    /// Content must contain at least one of these substrings.
    pub contains_contents: Option<Vec<String>>,
    /// Author id must be a member of this set.
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on `created`, epoch milliseconds.
    pub created_from: Option<EpochMillis>,
    /// Inclusive upper bound on `created`, epoch milliseconds.
    pub created_to: Option<EpochMillis>,
}

/// Returns whether `document` satisfies every provided dimension of `request`.
pub fn matches_request(document: &Document, request: &SearchRequest) -> bool {
    matches_title(document, request.title_prefixes.as_deref())
        && matches_content(document, request.contains_contents.as_deref())
        && matches_author(document, request.author_ids.as_deref())
        && matches_created_from(document, request.created_from)
        && matches_created_to(document, request.created_to)
}

fn matches_title(document: &Document, prefixes: Option<&[String]>) -> bool {
    let Some(prefixes) = prefixes.filter(|values| !values.is_empty()) else {
        return true;
    };
    match document.title.as_deref() {
        Some(title) => prefixes.iter().any(|prefix| title.starts_with(prefix.as_str())),
        None => false,
    }
}

fn matches_content(document: &Document, fragments: Option<&[String]>) -> bool {
    let Some(fragments) = fragments.filter(|values| !values.is_empty()) else {
        return true;
    };
    match document.content.as_deref() {
        Some(content) => fragments
            .iter()
            .any(|fragment| content.contains(fragment.as_str())),
        None => false,
    }
}

fn matches_author(document: &Document, author_ids: Option<&[String]>) -> bool {
    let Some(author_ids) = author_ids.filter(|values| !values.is_empty()) else {
        return true;
    };
    match document.author.as_ref() {
        Some(author) => author_ids.iter().any(|id| *id == author.id),
        None => false,
    }
}

fn matches_created_from(document: &Document, bound: Option<EpochMillis>) -> bool {
    match (document.created, bound) {
        (Some(created), Some(from)) => created >= from,
        _ => true,
    }
}

fn matches_created_to(document: &Document, bound: Option<EpochMillis>) -> bool {
    match (document.created, bound) {
        (Some(created), Some(to)) => created <= to,
        _ => true,
    }
}
