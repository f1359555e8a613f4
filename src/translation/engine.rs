/*!
 * Dictionary-driven tree substitution.
 *
 * The engine walks a node subtree depth-first in pre-order and rewrites
 * every text leaf whose trimmed value equals a dictionary original.
 * Matching is exact and case-sensitive; only surrounding whitespace is
 * ignored. The first matching dictionary entry in stored order wins.
 *
 * A pass is not idempotent: if a translation equals another entry's
 * original, running again substitutes again.
 */

use log::{debug, trace};

use crate::document::{Document, Node};
use crate::errors::Result;
use crate::store::{Dictionary, LanguageStore};

/// Applies one language's dictionary to node trees.
///
/// The dictionary is resolved when the engine is built, so every pass made
/// with the same engine uses the same language.
pub struct TreeSubstitutionEngine<'a> {
    language: &'a str,
    dictionary: &'a Dictionary,
}

impl<'a> TreeSubstitutionEngine<'a> {
    /// Engine for the store's active language.
    pub fn new(store: &'a LanguageStore) -> Result<Self> {
        let language = store
            .active_language()
            .ok_or_else(crate::errors::LocalizationError::no_active_language)?;
        Self::for_language(store, language)
    }

    /// Engine for an explicit language.
    pub fn for_language(store: &'a LanguageStore, language: &'a str) -> Result<Self> {
        let dictionary = store.dictionary(language)?;
        Ok(Self { language, dictionary })
    }

    pub fn language(&self) -> &str {
        self.language
    }

    /// Substitute within the subtree rooted at `root`.
    ///
    /// Returns how many text leaves were rewritten.
    pub fn run(&self, root: &mut Node) -> usize {
        let mut replaced = 0;
        let mut stack: Vec<&mut Node> = vec![root];

        while let Some(node) = stack.pop() {
            match node {
                Node::Text(text) => {
                    if self.substitute(&mut text.value) {
                        replaced += 1;
                    }
                }
                Node::Element(element) => {
                    // Reversed so children pop in document order
                    stack.extend(element.children.iter_mut().rev());
                }
            }
        }

        debug!(
            "Substitution pass for '{}' rewrote {} text node(s)",
            self.language, replaced
        );
        replaced
    }

    /// Substitute from the document body, or the root when there is none.
    pub fn run_document(&self, doc: &mut Document) -> usize {
        self.run(doc.body())
    }

    fn substitute(&self, value: &mut String) -> bool {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return false;
        }

        match self.dictionary.lookup(trimmed) {
            Some(pair) => {
                trace!("'{}' -> '{}'", pair.original, pair.translated);
                *value = pair.translated.clone();
                true
            }
            None => false,
        }
    }
}
