/*!
 * Language storage.
 *
 * - `word_table`: named word sets per language
 * - `dictionary`: ordered find/replace pairs used by tree substitution
 * - `language_store`: the registry of languages and the active selector
 */

pub mod dictionary;
pub mod language_store;
pub mod word_table;

pub use dictionary::{Dictionary, DictionaryPair};
pub use language_store::{LanguageEntry, LanguageStore};
pub use word_table::{WordId, WordSet, WordTable};
