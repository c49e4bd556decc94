//! One heading plus its body

use crate::formatter::fence::fence_for;
use std::fmt::Write;

/// Language tag placed on fenced blocks of re-serialized values
pub const JSON_FENCE_LANGUAGE: &str = "json";

/// A rendered unit of the output, derived from one top-level key
#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    /// A string value, emitted verbatim
    Text { heading: &'a str, body: &'a str },
    /// Any other value, pretty-printed inside a fenced block
    Code { heading: &'a str, body: String },
}

impl<'a> Section<'a> {
    pub fn heading(&self) -> &'a str {
        match self {
            Section::Text { heading, .. } | Section::Code { heading, .. } => *heading,
        }
    }

    /// Append `# heading`, a blank line, the body, and a trailing blank line
    pub fn write_to(&self, out: &mut String) {
        // Writing into a String cannot fail
        let _ = write!(out, "# {}\n\n", self.heading());
        match self {
            Section::Text { body, .. } => {
                out.push_str(body);
            }
            Section::Code { body, .. } => {
                let fence = fence_for(body);
                let _ = write!(out, "{fence}{JSON_FENCE_LANGUAGE}\n{body}\n{fence}");
            }
        }
        out.push_str("\n\n");
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
}
