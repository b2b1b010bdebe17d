//! Domain model for stored documents.
//!
//! # Responsibility
//! - Define the canonical document and author records used by core logic.
//! - Keep field optionality explicit so filter/upsert branches type-check.
//!
//! # Invariants
//! - A document participates in storage only through a non-empty `id`.
//! - Timestamps are Unix epoch milliseconds throughout.

pub mod document;
