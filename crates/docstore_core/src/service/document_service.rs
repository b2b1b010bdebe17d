//! Document use-case service.
//!
//! # Responsibility
//! - Provide stable save/lookup/search entry points for core callers.
//! - Delegate storage semantics to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository normalization on the write path.
//! - Service layer remains storage-agnostic.

use crate::model::document::{Author, Document};
use crate::repo::document_repo::DocumentRepository;
use crate::search::filter::SearchRequest;

/// Use-case facade over a document repository implementation.
pub struct DocumentService<R: DocumentRepository> {
    repo: R,
}

impl<R: DocumentRepository> DocumentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Upserts a document through repository normalization.
    pub fn save(&mut self, document: Document) -> Document {
        self.repo.save(document)
    }

    /// Creates and stores a document from title/content/author input.
    ///
    /// # Contract
    /// - The store assigns `id` and `created`.
    /// - Returns the document as stored.
    pub fn create_document(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
    ) -> Document {
        let draft = Document::draft()
            .with_title(title)
            .with_content(content)
            .with_author(author);
        self.repo.save(draft)
    }

    /// Gets one document by storage key.
    pub fn find_by_id(&self, id: &str) -> Option<Document> {
        self.repo.find_by_id(id)
    }

    /// Returns documents matching `request`, or all documents for `None`.
    pub fn search(&self, request: Option<&SearchRequest>) -> Vec<Document> {
        self.repo.search(request)
    }

    /// Returns all documents attributed to the given author id.
    pub fn author_documents(&self, author_id: impl Into<String>) -> Vec<Document> {
        let request = SearchRequest {
            author_ids: Some(vec![author_id.into()]),
            ..SearchRequest::default()
        };
        self.repo.search(Some(&request))
    }
}
