/*!
 * Tests for error types and conversions
 */

use multilang::errors::{LocalizationError, NotFoundKind};

#[test]
fn test_localizationError_notFound_shouldDescribeWhatIsMissing() {
    let error = LocalizationError::NotFound(NotFoundKind::Word {
        language: "rus".to_string(),
        set: "locations".to_string(),
        id: "denver".to_string(),
    });
    let display = format!("{}", error);
    assert!(display.contains("Not found"));
    assert!(display.contains("denver"));
    assert!(display.contains("locations"));
    assert!(display.contains("rus"));
    assert!(error.is_not_found());
}

#[test]
fn test_localizationError_invalidState_shouldDisplayCorrectly() {
    let error = LocalizationError::InvalidState("no active language has been selected".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Invalid state"));
    assert!(!error.is_not_found());
}

#[test]
fn test_localizationError_typeMismatch_shouldDisplayCorrectly() {
    let error = LocalizationError::TypeMismatch("expected an array".to_string());
    assert!(format!("{}", error).contains("Type mismatch: expected an array"));
}

#[test]
fn test_notFoundKind_display_shouldNameEachMissingThing() {
    assert_eq!(
        NotFoundKind::Language("fr".to_string()).to_string(),
        "language 'fr' is not registered"
    );
    assert_eq!(
        NotFoundKind::WordSet {
            language: "rus".to_string(),
            set: "menu".to_string(),
        }
        .to_string(),
        "word set 'menu' does not exist for language 'rus'"
    );
    assert_eq!(NotFoundKind::Element("#title".to_string()).to_string(), "no element matches #title");
    assert_eq!(
        NotFoundKind::Translator("menu".to_string()).to_string(),
        "translator 'menu' is not registered"
    );
}

#[test]
fn test_notFoundKind_shouldBeAStdError() {
    let kind: Box<dyn std::error::Error> = Box::new(NotFoundKind::Language("fr".to_string()));
    let error = LocalizationError::NotFound(NotFoundKind::Language("fr".to_string()));

    assert_eq!(kind.to_string(), "language 'fr' is not registered");
    assert_eq!(error.to_string(), "Not found: language 'fr' is not registered");
}
