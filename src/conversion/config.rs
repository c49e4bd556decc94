//! Configuration options for JSON to Markdown conversion

/// Largest indent accepted for fenced JSON blocks
pub const MAX_INDENT_SIZE: u8 = 8;

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Spaces per nesting level inside fenced JSON blocks (0-8)
    pub indent_size: u8,
    /// Create missing parent directories of the output path before writing
    pub create_parent_dirs: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            create_parent_dirs: false,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > MAX_INDENT_SIZE {
            return Err(format!("Indent size must be 0-{} spaces", MAX_INDENT_SIZE));
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Create missing output directories when writing
    pub fn with_parent_dirs(mut self, enabled: bool) -> Self {
        self.create_parent_dirs = enabled;
        self
    }

    /// Indent unit handed to the JSON pretty printer
    pub fn indent(&self) -> Vec<u8> {
        vec![b' '; self.indent_size as usize]
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > MAX_INDENT_SIZE {
            return Err(format!("Indent size must be 0-{} spaces", MAX_INDENT_SIZE));
        }

        Ok(())
    }
}
