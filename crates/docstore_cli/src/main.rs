//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `docstore_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use docstore_core::{Author, Document, DocumentRepository, InMemoryDocumentRepository};

fn main() {
    println!("docstore_core ping={}", docstore_core::ping());
    println!("docstore_core version={}", docstore_core::core_version());

    let mut store = InMemoryDocumentRepository::new();
    let saved = store.save(
        Document::draft()
            .with_title("smoke")
            .with_content("store wiring probe")
            .with_author(Author::new("smoke-author", "Smoke")),
    );
    let found = saved
        .key()
        .and_then(|id| store.find_by_id(id))
        .map(|document| document == saved)
        .unwrap_or(false);
    println!("docstore_core roundtrip={found} stored={}", store.len());
}
