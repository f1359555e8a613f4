/*!
 * Named translator callbacks.
 *
 * A translator is a user routine that localizes part of a document, usually
 * by combining content assignment and substitution passes. Callbacks are
 * registered as one set and invoked by name.
 */

use std::collections::HashMap;

use log::debug;

use crate::document::Document;
use crate::errors::{LocalizationError, NotFoundKind, Result};
use crate::store::LanguageStore;

/// Signature of a translator callback.
pub type TranslatorFn = Box<dyn Fn(&LanguageStore, &mut Document) -> Result<()>>;

/// Registry of translator callbacks keyed by name.
#[derive(Default)]
pub struct Translators {
    callbacks: HashMap<String, TranslatorFn>,
}

impl Translators {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set of callbacks.
    pub fn add_translators<I, S>(&mut self, translators: I)
    where
        I: IntoIterator<Item = (S, TranslatorFn)>,
        S: Into<String>,
    {
        self.callbacks = translators
            .into_iter()
            .map(|(name, callback)| (name.into(), callback))
            .collect();
        debug!("Registered {} translator(s)", self.callbacks.len());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    /// Run the translator registered under `name`.
    pub fn translate(&self, name: &str, store: &LanguageStore, doc: &mut Document) -> Result<()> {
        let callback = self
            .callbacks
            .get(name)
            .ok_or_else(|| LocalizationError::NotFound(NotFoundKind::Translator(name.to_string())))?;

        debug!("Running translator '{}'", name);
        callback(store, doc)
    }
}

impl std::fmt::Debug for Translators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.callbacks.keys().collect();
        names.sort();
        f.debug_struct("Translators").field("names", &names).finish()
    }
}
