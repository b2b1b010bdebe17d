use docstore_core::{Author, Document};

#[test]
fn draft_has_no_fields_set() {
    let document = Document::draft();

    assert_eq!(document.id, None);
    assert_eq!(document.title, None);
    assert_eq!(document.content, None);
    assert_eq!(document.author, None);
    assert_eq!(document.created, None);
    assert_eq!(document.key(), None);
}

#[test]
fn fluent_setters_populate_fields() {
    let document = Document::draft()
        .with_id("doc-1")
        .with_title("Java Programming")
        .with_content("Java basics")
        .with_author(Author::new("author1", "JD"))
        .with_created(1_700_000_000_000);

    assert_eq!(document.key(), Some("doc-1"));
    assert_eq!(document.title.as_deref(), Some("Java Programming"));
    assert_eq!(document.content.as_deref(), Some("Java basics"));
    assert_eq!(
        document.author,
        Some(Author::new("author1", "JD"))
    );
    assert_eq!(document.created, Some(1_700_000_000_000));
}

#[test]
fn key_treats_empty_id_as_absent() {
    assert_eq!(Document::draft().with_id("").key(), None);
    assert_eq!(Document::draft().with_id("doc-2").key(), Some("doc-2"));
}

#[test]
fn document_serialization_uses_expected_wire_fields() {
    let document = Document::draft()
        .with_id("doc-1")
        .with_title("Java Programming")
        .with_content("Java basics")
        .with_author(Author::new("author1", "JD"))
        .with_created(1_700_000_000_000);

    let json = serde_json::to_value(&document).unwrap();
    assert_eq!(json["id"], "doc-1");
    assert_eq!(json["title"], "Java Programming");
    assert_eq!(json["content"], "Java basics");
    assert_eq!(json["author"]["id"], "author1");
    assert_eq!(json["author"]["name"], "JD");
    assert_eq!(json["created"], 1_700_000_000_000_i64);

    let decoded: Document = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, document);
}

#[test]
fn absent_fields_serialize_as_null() {
    let json = serde_json::to_value(Document::draft().with_title("Python")).unwrap();

    assert_eq!(json["title"], "Python");
    assert!(json["id"].is_null());
    assert!(json["content"].is_null());
    assert!(json["author"].is_null());
    assert!(json["created"].is_null());
}
