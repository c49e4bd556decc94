//! Markdown formatting module

pub mod fence;
pub mod section;

pub use section::Section;

use crate::conversion::ConversionConfig;
use crate::error::{FormattingError, FormattingResult};
use crate::parser::Document;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Main Markdown formatter
pub struct MarkdownFormatter {
    config: ConversionConfig,
}

impl MarkdownFormatter {
    /// Create a new formatter with configuration
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Derive one section per top-level key, in document order
    pub fn sections<'a>(&self, document: &'a Document) -> FormattingResult<Vec<Section<'a>>> {
        document
            .iter()
            .map(|(key, value)| self.section(key, value))
            .collect()
    }

    fn section<'a>(&self, key: &'a str, value: &'a Value) -> FormattingResult<Section<'a>> {
        match value {
            Value::String(text) => Ok(Section::Text {
                heading: key,
                body: text,
            }),
            other => Ok(Section::Code {
                heading: key,
                body: self.pretty_json(key, other)?,
            }),
        }
    }

    /// Pretty-print a value with the configured indent. serde_json leaves
    /// non-ASCII characters unescaped.
    fn pretty_json(&self, key: &str, value: &Value) -> FormattingResult<String> {
        let indent = self.config.indent();
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        value
            .serialize(&mut serializer)
            .map_err(|e| FormattingError::serialize(key, e.to_string()))?;

        String::from_utf8(buf).map_err(|e| FormattingError::serialize(key, e.to_string()))
    }
}
