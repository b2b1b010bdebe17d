//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the document storage contract used by services and callers.
//! - Keep map/iteration details inside the storage boundary.
//!
//! # Invariants
//! - Save normalizes `id` and `created` before a document enters storage.
//! - Lookups report absence through `Option`, never through errors.

pub mod document_repo;
