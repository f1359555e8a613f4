/*!
 * Ordered find/replace dictionary used by tree substitution.
 *
 * Entries are stored as pairs so the two logical sequences, site contents
 * and translations, can never drift apart in length.
 */

use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{LocalizationError, Result};

/// One dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPair {
    /// Text as it appears in the document, compared after trimming
    pub original: String,

    /// Replacement text
    pub translated: String,
}

impl DictionaryPair {
    pub fn new(original: impl Into<String>, translated: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            translated: translated.into(),
        }
    }
}

/// Ordered list of (original, translated) pairs.
///
/// Serializes as `{"siteContents": [...], "translates": [...]}` and
/// deserializes from either shape accepted by [`Dictionary::from_value`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Dictionary {
    pairs: Vec<DictionaryPair>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of (original, translated) tuples.
    pub fn from_pairs<I, O, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (O, T)>,
        O: Into<String>,
        T: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(original, translated)| DictionaryPair::new(original, translated))
                .collect(),
        }
    }

    /// Build from two parallel sequences. Both must have the same length.
    pub fn from_parallel_lists<O, T>(site_contents: Vec<O>, translates: Vec<T>) -> Result<Self>
    where
        O: Into<String>,
        T: Into<String>,
    {
        if site_contents.len() != translates.len() {
            return Err(LocalizationError::TypeMismatch(format!(
                "siteContents has {} entries but translates has {}",
                site_contents.len(),
                translates.len()
            )));
        }

        Ok(Self::from_pairs(site_contents.into_iter().zip(translates)))
    }

    /// Build from a JSON value in either accepted shape:
    /// `{"siteContents": [...], "translates": [...]}` or `[["orig", "tr"], ...]`.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => {
                let site_contents = map
                    .get("siteContents")
                    .ok_or_else(|| shape_error("object is missing 'siteContents'"))?;
                let translates = map
                    .get("translates")
                    .ok_or_else(|| shape_error("object is missing 'translates'"))?;
                Self::from_parallel_lists(
                    string_list(site_contents, "siteContents")?,
                    string_list(translates, "translates")?,
                )
            }
            Value::Array(items) => {
                let mut pairs = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    match item.as_array().map(Vec::as_slice) {
                        Some([Value::String(original), Value::String(translated)]) => {
                            pairs.push((original.clone(), translated.clone()));
                        }
                        _ => {
                            return Err(shape_error(&format!(
                                "entry {} is not a two-element string array",
                                index
                            )));
                        }
                    }
                }
                Ok(Self::from_pairs(pairs))
            }
            other => Err(shape_error(&format!(
                "expected an object or an array, got {}",
                json_type_name(other)
            ))),
        }
    }

    /// First pair whose original equals `text` exactly, in stored order.
    pub fn lookup(&self, text: &str) -> Option<&DictionaryPair> {
        self.pairs.iter().find(|pair| pair.original == text)
    }

    /// Originals in stored order.
    pub fn site_contents(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.original.as_str()).collect()
    }

    /// Translations in stored order, index-aligned with `site_contents`.
    pub fn translates(&self) -> Vec<&str> {
        self.pairs.iter().map(|p| p.translated.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl TryFrom<Value> for Dictionary {
    type Error = LocalizationError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

impl Serialize for Dictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Dictionary", 2)?;
        state.serialize_field("siteContents", &self.site_contents())?;
        state.serialize_field("translates", &self.translates())?;
        state.end()
    }
}

fn shape_error(detail: &str) -> LocalizationError {
    LocalizationError::TypeMismatch(format!("unsupported dictionary shape: {}", detail))
}

fn string_list(value: &Value, field: &str) -> Result<Vec<String>> {
    let items = value
        .as_array()
        .ok_or_else(|| shape_error(&format!("'{}' is not an array", field)))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| shape_error(&format!("'{}' contains a non-string value", field)))
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
