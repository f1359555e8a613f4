/*!
 * Word tables: named sets of words addressed by word id.
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of a slot inside a word set.
///
/// Integer and string ids address the same slot when their text is equal,
/// so `WordId::from(3)` and `WordId::from("3")` are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(String);

impl WordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for WordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for WordId {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

impl From<usize> for WordId {
    fn from(index: usize) -> Self {
        Self(index.to_string())
    }
}

impl From<u32> for WordId {
    fn from(index: u32) -> Self {
        Self(index.to_string())
    }
}

impl From<i32> for WordId {
    fn from(index: i32) -> Self {
        Self(index.to_string())
    }
}

/// One named list of words. A present key is a defined slot.
pub type WordSet = BTreeMap<WordId, String>;

/// All word sets of one language, keyed by set name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordTable {
    sets: BTreeMap<String, WordSet>,
}

impl WordTable {
    /// Create an empty word table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a whole set.
    pub fn set(&self, set_name: &str) -> Option<&WordSet> {
        self.sets.get(set_name)
    }

    /// Look up one word.
    pub fn word(&self, set_name: &str, word_id: &WordId) -> Option<&str> {
        self.sets
            .get(set_name)
            .and_then(|set| set.get(word_id))
            .map(String::as_str)
    }

    /// Insert or overwrite a slot, creating the set when it is absent.
    ///
    /// Returns the previous word of that slot, if any.
    pub fn insert(&mut self, set_name: &str, word_id: WordId, word: String) -> Option<String> {
        self.sets
            .entry(set_name.to_string())
            .or_default()
            .insert(word_id, word)
    }

    /// Builder-style insert, handy for seeding a table before registration.
    pub fn with_word(mut self, set_name: &str, word_id: impl Into<WordId>, word: &str) -> Self {
        self.insert(set_name, word_id.into(), word.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Total number of defined slots across every set.
    pub fn word_count(&self) -> usize {
        self.sets.values().map(BTreeMap::len).sum()
    }
}
