/*!
 * Tests for the document model and content assignment helpers
 */

use multilang::document::{set_for_class_elements, set_for_first_class_element, set_for_id, set_page_title};
use multilang::{Document, LocalizationError, Node, NotFoundKind};

use crate::common;

/// Documents round-trip through their JSON form
#[test]
fn test_document_json_shouldRoundTrip() {
    let doc = common::sample_page();

    let json = doc.to_json_pretty().unwrap();
    let parsed = Document::from_json(&json).unwrap();

    assert_eq!(parsed, doc);
    assert!(json.contains("\"type\": \"element\""));
}

/// Unknown node types are rejected at parse time
#[test]
fn test_document_fromJson_withUnknownType_shouldFail() {
    let result = Document::from_json(r#"{"type":"comment","value":"x"}"#);

    assert!(result.is_err());
}

/// The body is the default traversal root
#[test]
fn test_document_body_shouldSkipHead() {
    let mut doc = common::sample_page();

    let body = doc.body();

    assert!(!body.text_content().contains("Welcome"));
    assert!(body.text_content().contains("Hello"));
}

/// Content assignment by id, class and title
#[test]
fn test_assign_helpers_shouldWriteActiveLanguageWords() {
    let store = common::french_store();
    let mut doc = common::sample_page();

    set_for_id(&store, &mut doc, "heading", "pages", "home").unwrap();
    set_for_first_class_element(&store, &mut doc, "greeting", "pages", "title").unwrap();
    assert!(set_page_title(&store, &mut doc, "pages", "title").unwrap());

    let text = doc.root.text_content();
    assert!(text.starts_with("BienvenueAccueilBienvenue"), "unexpected text: {}", text);
}

/// Class assignment counts elements and reports missing classes
#[test]
fn test_assign_classHelpers_shouldCountAndReportMissing() {
    let store = common::french_store();
    let mut doc = common::sample_page();

    assert_eq!(set_for_class_elements(&store, &mut doc, "greeting", "pages", "home"), Ok(1));
    assert_eq!(
        set_for_first_class_element(&store, &mut doc, "absent", "pages", "home"),
        Err(LocalizationError::NotFound(NotFoundKind::Element(".absent".to_string())))
    );
}

/// Content assignment replaces existing children with one text node
#[test]
fn test_assign_setForId_shouldReplaceNestedChildren() {
    let store = common::french_store();
    let mut doc = Document::from_json(
        r#"{"type":"element","tag":"div","id":"box","children":[
            {"type":"text","value":"a"},
            {"type":"element","tag":"b","children":[{"type":"text","value":"b"}]}
        ]}"#,
    )
    .unwrap();

    set_for_id(&store, &mut doc, "box", "pages", "home").unwrap();

    let root = doc.root.as_element().unwrap();
    assert_eq!(root.children, vec![Node::text("Accueil")]);
}
