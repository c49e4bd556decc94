//! JSON loading and shape checking module

pub mod directory;
pub mod document;
pub mod filter;
pub mod validation;

pub use document::Document;

use crate::error::{ConversionError, ConversionResult, ParseError, ParseResult};
use std::path::PathBuf;

/// Source for parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum JsonSource {
    String(String),
    File(PathBuf),
}

impl JsonSource {
    /// Path of the source, if it is backed by a file
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            JsonSource::String(_) => None,
            JsonSource::File(path) => Some(path),
        }
    }

    /// Check if the source exists and is accessible
    pub fn exists(&self) -> bool {
        match self {
            JsonSource::String(_) => true,
            JsonSource::File(path) => path.is_file(),
        }
    }

    /// Read the whole source as UTF-8 text.
    ///
    /// Read failures surface as I/O errors; bytes that are not valid UTF-8 are
    /// reported as a parse error, since the file cannot be JSON text.
    pub fn read_content(&self) -> ConversionResult<String> {
        match self {
            JsonSource::String(content) => Ok(content.clone()),
            JsonSource::File(path) => {
                let bytes = std::fs::read(path).map_err(|e| ConversionError::io(e, path))?;
                String::from_utf8(bytes).map_err(|e| {
                    ConversionError::ParseError(
                        ParseError::new(format!("input is not valid UTF-8: {}", e), None)
                            .with_path(path.clone()),
                    )
                })
            }
        }
    }

    /// Read and parse the source into a JSON value
    pub fn parse(&self) -> ConversionResult<serde_json::Value> {
        let content = self.read_content()?;
        parse_from_string(&content).map_err(|err| match self.path() {
            Some(path) => ConversionError::ParseError(err.with_path(path.clone())),
            None => ConversionError::ParseError(err),
        })
    }

    /// Read and parse the source, requiring an object at the top level
    pub fn parse_document(&self) -> ConversionResult<Document> {
        let value = self.parse()?;
        let path = self
            .path()
            .cloned()
            .unwrap_or_else(|| PathBuf::from("<string input>"));
        Document::from_value(value, path)
    }
}

/// Parse JSON from a string
pub fn parse_from_string(content: &str) -> ParseResult<serde_json::Value> {
    serde_json::from_str(content).map_err(|e| {
        let location = (e.line() > 0).then(|| (e.line(), e.column()));
        ParseError::new(format!("Invalid JSON: {}", strip_location(&e)), location)
    })
}

/// serde_json appends " at line X column Y" to its messages; the location is
/// carried separately, so drop the suffix.
fn strip_location(error: &serde_json::Error) -> String {
    let message = error.to_string();
    match message.rfind(" at line ") {
        Some(idx) => message[..idx].to_string(),
        None => message,
    }
}
