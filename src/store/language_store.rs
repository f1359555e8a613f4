/*!
 * Registry of configured languages and the active-language selector.
 */

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::{LocalizationError, NotFoundKind, Result};
use crate::language_utils::language_codes_match;
use crate::store::dictionary::Dictionary;
use crate::store::word_table::{WordId, WordTable};

/// Words and dictionary of one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub words: WordTable,
    pub dictionary: Dictionary,
}

impl LanguageEntry {
    pub fn new(words: Option<WordTable>) -> Self {
        Self {
            words: words.unwrap_or_default(),
            dictionary: Dictionary::new(),
        }
    }
}

/// Compact JSON of the words and the dictionary.
impl fmt::Display for LanguageEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Holds every registered language and which one is active.
///
/// Entries are only ever replaced, never removed.
#[derive(Debug, Clone, Default)]
pub struct LanguageStore {
    active: Option<String>,
    languages: BTreeMap<String, LanguageEntry>,
}

impl LanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the active language. The id is not checked here.
    pub fn set_active_language(&mut self, id: &str) {
        debug!("Active language set to '{}'", id);
        self.active = Some(id.to_string());
    }

    pub fn active_language(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Create a fresh entry for `id`, replacing any existing one.
    pub fn register_language(&mut self, id: &str, initial_words: Option<WordTable>) {
        let previous = self
            .languages
            .insert(id.to_string(), LanguageEntry::new(initial_words));

        if previous.is_some() {
            debug!("Language '{}' re-registered, previous words and dictionary discarded", id);
        } else {
            debug!("Registered language '{}'", id);
        }
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.languages.contains_key(id)
    }

    /// Registered id for `requested`: the id itself when registered, otherwise
    /// the first id naming the same ISO language (`en` finds `eng`).
    pub fn resolve_language(&self, requested: &str) -> Option<&str> {
        if let Some((id, _)) = self.languages.get_key_value(requested) {
            return Some(id);
        }

        self.languages
            .keys()
            .map(String::as_str)
            .find(|id| language_codes_match(id, requested))
    }

    /// Registered language ids, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn entry(&self, id: &str) -> Result<&LanguageEntry> {
        self.languages
            .get(id)
            .ok_or_else(|| LocalizationError::language_not_found(id))
    }

    fn entry_mut(&mut self, id: &str) -> Result<&mut LanguageEntry> {
        self.languages
            .get_mut(id)
            .ok_or_else(|| LocalizationError::language_not_found(id))
    }

    fn active_id(&self) -> Result<&str> {
        self.active
            .as_deref()
            .ok_or_else(LocalizationError::no_active_language)
    }

    /// Entry of the active language.
    pub fn active_entry(&self) -> Result<&LanguageEntry> {
        self.entry(self.active_id()?)
    }

    /// Read one word from the active language.
    pub fn get_word(&self, set_name: &str, word_id: impl Into<WordId>) -> Result<&str> {
        let language = self.active_id()?;
        let entry = self.entry(language)?;
        let word_id = word_id.into();

        let set = entry.words.set(set_name).ok_or_else(|| {
            LocalizationError::NotFound(NotFoundKind::WordSet {
                language: language.to_string(),
                set: set_name.to_string(),
            })
        })?;

        set.get(&word_id).map(String::as_str).ok_or_else(|| {
            LocalizationError::NotFound(NotFoundKind::Word {
                language: language.to_string(),
                set: set_name.to_string(),
                id: word_id.to_string(),
            })
        })
    }

    /// Insert or overwrite one word of any registered language.
    pub fn add_word(
        &mut self,
        language: &str,
        set_name: &str,
        word_id: impl Into<WordId>,
        word: impl Into<String>,
    ) -> Result<()> {
        let entry = self.entry_mut(language)?;
        entry.words.insert(set_name, word_id.into(), word.into());
        Ok(())
    }

    /// Add the same slot for several languages at once.
    ///
    /// Stops at the first unregistered language. Words already added stay.
    pub fn add_words_bulk<I, L, W>(
        &mut self,
        set_name: &str,
        word_id: impl Into<WordId>,
        per_language: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = (L, W)>,
        L: AsRef<str>,
        W: Into<String>,
    {
        let word_id = word_id.into();
        for (language, word) in per_language {
            self.add_word(language.as_ref(), set_name, word_id.clone(), word)?;
        }
        Ok(())
    }

    /// Language to write a dictionary into: the explicit one or the active one.
    fn dictionary_target(&self, language: Option<&str>) -> Result<String> {
        match language {
            Some(id) => Ok(id.to_string()),
            None => self.active_id().map(str::to_string),
        }
    }

    fn replace_dictionary(&mut self, language: &str, dictionary: Dictionary) -> Result<()> {
        let entry = self.entry_mut(language)?;
        debug!(
            "Dictionary for '{}' replaced ({} -> {} entries)",
            language,
            entry.dictionary.len(),
            dictionary.len()
        );
        entry.dictionary = dictionary;
        Ok(())
    }

    /// Replace a dictionary from two parallel lists.
    pub fn set_dictionary_from_parallel_lists<O, T>(
        &mut self,
        site_contents: Vec<O>,
        translates: Vec<T>,
        language: Option<&str>,
    ) -> Result<()>
    where
        O: Into<String>,
        T: Into<String>,
    {
        let target = self.dictionary_target(language)?;
        let dictionary = Dictionary::from_parallel_lists(site_contents, translates)?;
        self.replace_dictionary(&target, dictionary)
    }

    /// Replace a dictionary from (original, translated) pairs.
    pub fn set_dictionary_from_pairs<I, O, T>(&mut self, pairs: I, language: Option<&str>) -> Result<()>
    where
        I: IntoIterator<Item = (O, T)>,
        O: Into<String>,
        T: Into<String>,
    {
        let target = self.dictionary_target(language)?;
        self.replace_dictionary(&target, Dictionary::from_pairs(pairs))
    }

    /// Replace a dictionary from JSON in either accepted shape.
    pub fn set_dictionary_from_value(&mut self, value: &Value, language: Option<&str>) -> Result<()> {
        let target = self.dictionary_target(language)?;
        let dictionary = Dictionary::from_value(value)?;
        self.replace_dictionary(&target, dictionary)
    }

    pub fn dictionary(&self, language: &str) -> Result<&Dictionary> {
        self.entry(language).map(|entry| &entry.dictionary)
    }

    /// JSON rendering of the active language entry.
    pub fn describe_active(&self) -> Result<String> {
        self.active_entry().map(LanguageEntry::to_string)
    }
}
