//! JSON to Markdown Converter
//!
//! Dumps a single JSON object into a Markdown document: every top-level key
//! becomes a `#` heading, string values are written verbatim and any other
//! value is pretty-printed inside a fenced `json` block.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_file, convert_json_to_markdown, Conversion, ConversionConfig, ConversionEngine,
    MarkdownData,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult, ParseError};
pub use formatter::{MarkdownFormatter, Section};
pub use parser::{Document, JsonSource};

/// Convert a JSON object to Markdown with default configuration
pub fn convert_json(json: &serde_json::Value) -> Result<String, ConversionError> {
    let config = ConversionConfig::default();
    convert_json_with_config(json, &config)
}

/// Convert a JSON object to Markdown with custom configuration
pub fn convert_json_with_config(
    json: &serde_json::Value,
    config: &ConversionConfig,
) -> Result<String, ConversionError> {
    let result = convert_json_to_markdown(json, config)?;
    Ok(result.content)
}
