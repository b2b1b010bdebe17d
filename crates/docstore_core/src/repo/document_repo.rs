//! Document repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide upsert, point lookup and filtered scan over stored documents.
//! - Own identifier and creation-timestamp normalization on the write path.
//!
//! # Invariants
//! - One stored value per key; a save under an existing key replaces it.
//! - An update without an explicit `created` inherits the stored one; an
//!   explicit `created` always wins, including on updates.
//! - Iteration order of scan results is unordered and must not be relied on.

use crate::model::document::{Document, EpochMillis};
use crate::search::filter::{matches_request, SearchRequest};
use log::debug;
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Storage contract for document upsert, lookup and filtered scans.
pub trait DocumentRepository {
    /// Upserts `document`, normalizing `id` and `created`, and returns the
    /// value as stored.
    fn save(&mut self, document: Document) -> Document;
    /// Gets one document by storage key.
    fn find_by_id(&self, id: &str) -> Option<Document>;
    /// Returns all documents matching `request`, or every document when the
    /// request is `None`. Result order is unordered.
    fn search(&self, request: Option<&SearchRequest>) -> Vec<Document>;
}

/// Map-backed document repository holding the sole authoritative copies.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    documents: HashMap<String, Document>,
}

impl InMemoryDocumentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentRepository for InMemoryDocumentRepository {
    fn save(&mut self, mut document: Document) -> Document {
        match document.key().map(str::to_owned) {
            Some(id) => {
                if document.created.is_none() {
                    document.created = self
                        .documents
                        .get(&id)
                        .and_then(|existing| existing.created);
                }
                debug!("event=document_saved module=repo id={id} fresh=false");
                self.documents.insert(id, document.clone());
            }
            None => {
                let id = Uuid::new_v4().to_string();
                document.id = Some(id.clone());
                if document.created.is_none() {
                    document.created = Some(now_epoch_ms());
                }
                debug!("event=document_saved module=repo id={id} fresh=true");
                self.documents.insert(id, document.clone());
            }
        }
        document
    }

    fn find_by_id(&self, id: &str) -> Option<Document> {
        self.documents.get(id).cloned()
    }

    fn search(&self, request: Option<&SearchRequest>) -> Vec<Document> {
        let matched: Vec<Document> = match request {
            None => self.documents.values().cloned().collect(),
            Some(request) => self
                .documents
                .values()
                .filter(|document| matches_request(document, request))
                .cloned()
                .collect(),
        };
        debug!(
            "event=document_search module=repo stored={} matched={}",
            self.documents.len(),
            matched.len()
        );
        matched
    }
}

fn now_epoch_ms() -> EpochMillis {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as EpochMillis)
        .unwrap_or(0)
}
