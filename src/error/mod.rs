//! Error types and handling infrastructure for JSON to Markdown conversion

use std::fmt;
use std::path::PathBuf;

/// Failure kinds raised once the input has been located
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Input file does not exist: {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("Input is not a JSON object (found {found}): {}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("{failed} of {total} files failed to convert")]
    BatchFailed { failed: usize, total: usize },
}

impl ConversionErrorKind {
    pub fn missing_input(path: PathBuf) -> Self {
        Self::MissingInput { path }
    }

    pub fn not_an_object(path: PathBuf, found: &'static str) -> Self {
        Self::NotAnObject { path, found }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    FormattingError(#[from] FormattingError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        cause: Option<anyhow::Error>,
    },
}

impl ConversionError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, cause: None }
    }

    pub fn conversion_with_cause(kind: ConversionErrorKind, cause: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            cause: Some(cause),
        }
    }

    /// Wrap an I/O failure on `path`
    pub fn io(error: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::conversion(ConversionErrorKind::io(
            format!("{}: {}", path.display(), error),
            Some(path),
        ))
    }

    /// Whether this error was raised before the input could be parsed
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::Conversion {
                kind: ConversionErrorKind::MissingInput { .. },
                ..
            }
        )
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                let mut message = String::from("Failed to parse JSON");
                if let Some(path) = &err.path {
                    message.push_str(&format!(" file {}", path.display()));
                }
                if let Some((line, col)) = err.location {
                    message.push_str(&format!(" at line {}, column {}", line, col));
                }
                format!("{}: {}", message, err.message)
            }
            Self::FormattingError(err) => {
                format!("Markdown rendering error: {}", err)
            }
            Self::Conversion { kind, cause } => {
                let message = match kind {
                    ConversionErrorKind::Io { message, .. } => {
                        format!("Unable to read or write file: {}", message)
                    }
                    _ => kind.to_string(),
                };
                match cause {
                    Some(cause) => format!("{} ({})", message, cause),
                    None => message,
                }
            }
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub path: Option<PathBuf>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Markdown rendering errors
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    #[error("Cannot serialize value under key '{key}': {message}")]
    Serialize { key: String, message: String },
}

impl FormattingError {
    pub fn serialize(key: &str, message: String) -> Self {
        Self::Serialize {
            key: key.to_string(),
            message,
        }
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience result type for formatting operations
pub type FormattingResult<T> = Result<T, FormattingError>;
