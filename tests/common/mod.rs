/*!
 * Common test utilities for the multilang test suite
 */

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use multilang::{Document, Element, LanguageStore};

/// Route library log output through the test harness
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Store with "eng" and "fr" registered, French active, and a small dictionary
pub fn french_store() -> LanguageStore {
    let mut store = LanguageStore::new();
    store.register_language("eng", None);
    store.register_language("fr", None);

    store.add_word("eng", "pages", "home", "Home").unwrap();
    store.add_word("fr", "pages", "home", "Accueil").unwrap();
    store.add_word("eng", "pages", "title", "Welcome").unwrap();
    store.add_word("fr", "pages", "title", "Bienvenue").unwrap();

    store
        .set_dictionary_from_pairs(
            [("Hello", "Bonjour"), ("Bye", "Au revoir"), ("Read more", "Lire la suite")],
            Some("fr"),
        )
        .unwrap();

    store.set_active_language("fr");
    store
}

/// A small page with a head, a title and a body
pub fn sample_page() -> Document {
    Document::new(
        Element::new("html")
            .with_child(
                Element::new("head")
                    .with_child(Element::new("title").with_text("Welcome").into())
                    .into(),
            )
            .with_child(
                Element::new("body")
                    .with_child(Element::new("h1").with_id("heading").with_text("Home").into())
                    .with_child(Element::new("p").with_class("greeting").with_text("  Hello  ").into())
                    .with_child(
                        Element::new("div")
                            .with_child(Element::new("a").with_attribute("href", "/more").with_text("Read more").into())
                            .with_child(Element::new("span").with_text("Bye").into())
                            .with_text("Not in the dictionary")
                            .into(),
                    )
                    .into(),
            ),
    )
}
