/*!
 * Tests for the language store
 */

use std::collections::BTreeMap;

use multilang::{LanguageStore, LocalizationError, NotFoundKind, WordTable};

/// addWord then getWord returns exactly the stored word for every language
#[test]
fn test_store_addWordThenGetWord_forEachLanguage_shouldRoundTrip() {
    let mut store = LanguageStore::new();
    let words = [("eng", "Denver"), ("rus", "Денвер"), ("fr", ""), ("de", "  Denver ")];
    for (language, _) in &words {
        store.register_language(language, None);
    }
    for (language, word) in &words {
        store.add_word(language, "locations", "denver", *word).unwrap();
    }

    for (language, word) in &words {
        store.set_active_language(language);
        assert_eq!(store.get_word("locations", "denver").unwrap(), *word);
    }
}

/// Bulk insert is observable per language regardless of application order
#[test]
fn test_store_addWordsBulk_shouldBeObservablePerLanguage() {
    let mut store = LanguageStore::new();
    store.register_language("L1", None);
    store.register_language("L2", None);

    let words = BTreeMap::from([("L2".to_string(), "w2".to_string()), ("L1".to_string(), "w1".to_string())]);
    store.add_words_bulk("set", 0usize, words).unwrap();

    store.set_active_language("L1");
    assert_eq!(store.get_word("set", 0usize).unwrap(), "w1");
    store.set_active_language("L2");
    assert_eq!(store.get_word("set", "0").unwrap(), "w2");
}

/// A failing bulk entry surfaces NotFound; successful entries remain
#[test]
fn test_store_addWordsBulk_withUnregisteredLanguage_shouldFailAfterEarlierInserts() {
    let mut store = LanguageStore::new();
    store.register_language("a", None);

    let result = store.add_words_bulk("set", "x", vec![("a", "ok"), ("b", "missing")]);

    assert_eq!(
        result,
        Err(LocalizationError::NotFound(NotFoundKind::Language("b".to_string())))
    );
    store.set_active_language("a");
    assert_eq!(store.get_word("set", "x").unwrap(), "ok");
}

/// Shape (b) is exposed as two parallel sequences
#[test]
fn test_store_setDictionaryFromPairs_shouldExposeSiteContentsAndTranslates() {
    let mut store = LanguageStore::new();
    store.register_language("fr", None);

    store
        .set_dictionary_from_pairs([["Hello", "Bonjour"], ["Bye", "Au revoir"]].map(|[a, b]| (a, b)), Some("fr"))
        .unwrap();

    let dictionary = store.dictionary("fr").unwrap();
    assert_eq!(dictionary.site_contents(), vec!["Hello", "Bye"]);
    assert_eq!(dictionary.translates(), vec!["Bonjour", "Au revoir"]);
}

/// Both shapes normalize to the same dictionary
#[test]
fn test_store_setDictionary_bothShapes_shouldBeEquivalent() {
    let mut store = LanguageStore::new();
    store.register_language("a", None);
    store.register_language("b", None);

    store
        .set_dictionary_from_parallel_lists(vec!["Hello", "Bye"], vec!["Hola", "Adiós"], Some("a"))
        .unwrap();
    store
        .set_dictionary_from_pairs(vec![("Hello", "Hola"), ("Bye", "Adiós")], Some("b"))
        .unwrap();

    assert_eq!(store.dictionary("a").unwrap(), store.dictionary("b").unwrap());
}

/// Lookup and state errors
#[test]
fn test_store_errors_shouldMatchFailureKinds() {
    let mut store = LanguageStore::new();

    store.set_active_language("nowhere");
    assert!(store.get_word("set", "id").unwrap_err().is_not_found());

    let mut fresh = LanguageStore::new();
    fresh.register_language("fr", None);
    assert!(matches!(
        fresh.set_dictionary_from_pairs([("a", "b")], None),
        Err(LocalizationError::InvalidState(_))
    ));
    assert!(matches!(
        fresh.set_dictionary_from_value(&serde_json::json!({"pairs": []}), Some("fr")),
        Err(LocalizationError::TypeMismatch(_))
    ));
}

/// Registration lists languages and seeds the word table
#[test]
fn test_store_registerLanguage_shouldListAndSeed() {
    let mut store = LanguageStore::new();
    store.register_language("rus", Some(WordTable::new().with_word("menu", 1usize, "Главная")));
    store.register_language("eng", None);

    assert_eq!(store.languages().collect::<Vec<_>>(), vec!["eng", "rus"]);
    assert!(store.is_registered("rus"));
    assert!(!store.is_registered("fr"));

    store.set_active_language("rus");
    assert_eq!(store.active_language(), Some("rus"));
    assert_eq!(store.get_word("menu", 1usize).unwrap(), "Главная");
}
