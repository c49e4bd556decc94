use std::path::{Path, PathBuf};

/// Extension given to every Markdown output file
pub const MARKDOWN_EXTENSION: &str = "md";

/// Output path used when none is given: the input path with its final
/// extension replaced by `.md` (`data.json` -> `data.md`, `notes` -> `notes.md`).
pub fn default_output_path(input_file: &Path) -> PathBuf {
    input_file.with_extension(MARKDOWN_EXTENSION)
}

/// Map an input JSON file into an output Markdown file path.
/// This preserves the input directory structure relative to `input_dir`.
pub fn map_input_to_output(input_dir: &Path, input_file: &Path, output_dir: &Path) -> PathBuf {
    let relative = input_file.strip_prefix(input_dir).unwrap_or(input_file);
    let mut out = output_dir.join(relative);
    out.set_extension(MARKDOWN_EXTENSION);
    out
}
