//! JSON to Markdown conversion module
//!
//! This module contains the core conversion logic, configuration, and batch driver.

pub mod batch;
pub mod config;
pub mod engine;

pub use batch::{convert_directory, BatchOptions, BatchReport};
pub use config::ConversionConfig;
pub use engine::{
    convert_file, convert_json_to_markdown, Conversion, ConversionEngine, MarkdownData,
};

pub use crate::error::ConversionResult;
