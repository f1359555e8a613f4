use anyhow::{anyhow, Context, Result};
use log::{debug, LevelFilter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::store::{LanguageStore, WordTable};

/// Application configuration module
/// This module handles loading, validating and saving the language data the
/// CLI feeds into a `LanguageStore`.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Language selected before any lookup or substitution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_language: Option<String>,

    /// Configured languages
    #[serde(default)]
    pub languages: Vec<LanguageConfig>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Words and dictionary of one language
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LanguageConfig {
    /// Language identifier, e.g. "eng"
    pub id: String,

    /// Word sets: set name -> word id -> word
    #[serde(default)]
    pub words: WordTable,

    /// Dictionary in either accepted shape:
    /// `{"siteContents": [...], "translates": [...]}` or `[["original", "translated"], ...]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary: Option<Value>,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Write configuration as pretty JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to file: {}", path.display()))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for language in &self.languages {
            if language.id.trim().is_empty() {
                return Err(anyhow!("Language id must not be empty"));
            }
            if !seen.insert(language.id.as_str()) {
                return Err(anyhow!("Language '{}' is configured more than once", language.id));
            }
        }

        if let Some(active) = &self.active_language {
            if !seen.contains(active.as_str()) {
                return Err(anyhow!("Active language '{}' is not configured", active));
            }
        }

        Ok(())
    }

    /// Build a populated store from this configuration
    pub fn build_store(&self) -> Result<LanguageStore> {
        self.validate()?;

        let mut store = LanguageStore::new();
        for language in &self.languages {
            store.register_language(&language.id, Some(language.words.clone()));

            if let Some(dictionary) = &language.dictionary {
                store
                    .set_dictionary_from_value(dictionary, Some(&language.id))
                    .with_context(|| format!("Invalid dictionary for language '{}'", language.id))?;
            }

            debug!(
                "Loaded {}: {} word(s), {} dictionary entries",
                crate::language_utils::describe_language(&language.id),
                language.words.word_count(),
                store.dictionary(&language.id)?.len()
            );
        }

        if let Some(active) = &self.active_language {
            store.set_active_language(active);
        }

        Ok(store)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            active_language: Some("eng".to_string()),
            languages: vec![
                LanguageConfig {
                    id: "eng".to_string(),
                    words: WordTable::new().with_word("locations", "denver", "Denver"),
                    dictionary: None,
                },
                LanguageConfig {
                    id: "rus".to_string(),
                    words: WordTable::new().with_word("locations", "denver", "Денвер"),
                    dictionary: Some(serde_json::json!([["Denver", "Денвер"]])),
                },
            ],
            log_level: LogLevel::default(),
        }
    }
}
