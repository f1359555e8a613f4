/*!
 * Document translation.
 *
 * - `engine`: dictionary-driven substitution over a node tree
 * - `translators`: named user callbacks run on demand
 */

// Re-export main types for easier usage
pub use self::engine::TreeSubstitutionEngine;
pub use self::translators::{TranslatorFn, Translators};

// Submodules
pub mod engine;
pub mod translators;
