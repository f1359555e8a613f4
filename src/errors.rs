/*!
 * Error types for the multilang library.
 *
 * This module contains custom error types for the language store and the
 * substitution engine, using the thiserror crate for ergonomic error
 * definitions. The binary and the configuration layer report through anyhow.
 */

use thiserror::Error;

/// What a failed lookup was looking for
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundKind {
    /// No entry registered under this language id
    #[error("language '{0}' is not registered")]
    Language(String),

    /// The language has no word set with this name
    #[error("word set '{set}' does not exist for language '{language}'")]
    WordSet {
        language: String,
        set: String,
    },

    /// The word set has no slot with this id
    #[error("word '{id}' is not set in '{set}' for language '{language}'")]
    Word {
        language: String,
        set: String,
        id: String,
    },

    /// No element in the document matches the selector
    #[error("no element matches {0}")]
    Element(String),

    /// No translator callback registered under this name
    #[error("translator '{0}' is not registered")]
    Translator(String),
}

/// Errors raised by the language store and the substitution engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizationError {
    /// A requested language, word set, word, element or translator is missing
    #[error("Not found: {0}")]
    NotFound(NotFoundKind),

    /// An operation that needs an active language ran before one was set
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Dictionary input matched none of the accepted shapes
    #[error("Type mismatch: {0}")]
    TypeMismatch(String),
}

impl LocalizationError {
    pub(crate) fn no_active_language() -> Self {
        Self::InvalidState("no active language has been selected".to_string())
    }

    pub(crate) fn language_not_found(id: &str) -> Self {
        Self::NotFound(NotFoundKind::Language(id.to_string()))
    }

    /// True for any `NotFound` variant
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store and engine operations
pub type Result<T, E = LocalizationError> = std::result::Result<T, E>;
