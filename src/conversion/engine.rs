//! Core conversion engine for JSON to Markdown transformation

use crate::cli::path_mapping::default_output_path;
use crate::conversion::config::ConversionConfig;
use crate::conversion::ConversionResult;
use crate::error::ConversionError;
use crate::formatter::{MarkdownFormatter, Section};
use crate::parser::{Document, JsonSource};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Rendered Markdown plus facts about how it was produced
#[derive(Debug, Clone)]
pub struct MarkdownData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl MarkdownData {
    /// Create a new Markdown result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the rendered Markdown
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionMetadata {
    /// Sections emitted verbatim from string values
    pub text_sections: usize,
    /// Sections emitted as fenced JSON
    pub code_sections: usize,
    pub output_size: u64,
}

impl ConversionMetadata {
    pub fn section_count(&self) -> usize {
        self.text_sections + self.code_sections
    }
}

/// Outcome of converting one file
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub data: MarkdownData,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Render a parsed document
    pub fn render(&self, document: &Document) -> ConversionResult<MarkdownData> {
        let formatter = MarkdownFormatter::new(self.config.clone());
        let sections = formatter.sections(document)?;

        let mut content = String::new();
        let mut metadata = ConversionMetadata::default();
        for section in &sections {
            match section {
                Section::Text { .. } => metadata.text_sections += 1,
                Section::Code { .. } => metadata.code_sections += 1,
            }
            section.write_to(&mut content);
        }
        metadata.output_size = content.len() as u64;

        Ok(MarkdownData::new(content, metadata))
    }

    /// Convert an in-memory JSON value, which must be an object
    pub fn convert(&self, json_data: &Value) -> ConversionResult<MarkdownData> {
        let document = Document::from_value(json_data.clone(), PathBuf::from("<value>"))?;
        self.render(&document)
    }

    /// Convert JSON text to Markdown
    pub fn convert_string(&self, json_str: &str) -> ConversionResult<MarkdownData> {
        let document = JsonSource::String(json_str.to_string()).parse_document()?;
        self.render(&document)
    }

    /// Convert `input` and write the result to `output`, or next to the input
    /// with a `.md` extension when no output is given.
    ///
    /// Nothing is written unless the input parses and is an object. The whole
    /// document is rendered in memory before the output file is opened, and
    /// an existing file at the output path is overwritten.
    pub fn convert_file(
        &self,
        input: &Path,
        output: Option<&Path>,
    ) -> ConversionResult<Conversion> {
        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        let document = JsonSource::File(input.to_path_buf()).parse_document()?;
        let data = self.render(&document)?;

        if self.config.create_parent_dirs {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|e| ConversionError::io(e, parent))?;
            }
        }
        std::fs::write(&output, &data.content).map_err(|e| ConversionError::io(e, &output))?;

        Ok(Conversion {
            input: input.to_path_buf(),
            output,
            data,
        })
    }
}

/// High-level conversion functions
/// Convert a JSON value to Markdown
pub fn convert_json_to_markdown(
    json_data: &Value,
    config: &ConversionConfig,
) -> ConversionResult<MarkdownData> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert(json_data)
}

/// Convert a JSON file to a Markdown file
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    config: &ConversionConfig,
) -> ConversionResult<Conversion> {
    let engine = ConversionEngine::new(config.clone());
    engine.convert_file(input, output)
}
