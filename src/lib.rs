/*!
 * # multilang - per-language word tables and dictionary-driven document translation
 *
 * A Rust library for swapping the text of a document tree between languages
 * using literal string tables.
 *
 * ## Features
 *
 * - Register languages, each with named word sets and a find/replace dictionary
 * - Look up words from the active language
 * - Translate a whole node tree in place: every text leaf whose trimmed value
 *   exactly matches a dictionary original is replaced by its translation
 * - Assign words as element content by id, class or page title
 * - Run named translator callbacks
 * - Load languages from a JSON configuration file
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `store`: Language registry, word tables and dictionaries
 * - `document`: Owned document tree and content assignment
 * - `translation`: Substitution engine and translator callbacks:
 *   - `translation::engine`: Depth-first dictionary substitution
 *   - `translation::translators`: Named callback registry
 * - `app_config`: Configuration management
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the library
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod document;
pub mod errors;
pub mod language_utils;
pub mod store;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use document::{Document, Element, Node};
pub use errors::{LocalizationError, NotFoundKind};
pub use store::{Dictionary, LanguageStore, WordId, WordTable};
pub use translation::{TreeSubstitutionEngine, Translators};
