//! The parsed input: a top-level JSON object in source key order

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};
use crate::parser::validation::require_object;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// A JSON object whose keys keep the order they had in the source text.
///
/// Order preservation relies on serde_json's `preserve_order` feature; a
/// duplicated key keeps its first position and takes the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    entries: Map<String, Value>,
    source: PathBuf,
}

impl Document {
    /// Accept `value` as a document, rejecting anything that is not an object
    pub fn from_value(value: Value, source: PathBuf) -> ConversionResult<Self> {
        match require_object(value) {
            Ok(entries) => Ok(Self { entries, source }),
            Err(found) => Err(ConversionError::conversion(
                ConversionErrorKind::not_an_object(source, found),
            )),
        }
    }

    /// Where the document was read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
