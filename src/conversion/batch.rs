use crate::cli::path_mapping::map_input_to_output;
use crate::conversion::engine::{Conversion, ConversionEngine};
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::directory::find_json_files;
use std::path::{Path, PathBuf};

/// How a directory of JSON files is walked and where its Markdown goes
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Descend into subdirectories
    pub recursive: bool,
    /// Keep going after a file fails
    pub continue_on_error: bool,
    /// Mirror outputs under this directory instead of writing next to inputs
    pub output_dir: Option<PathBuf>,
}

/// What happened across one batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<Conversion>,
    pub failures: Vec<(PathBuf, ConversionError)>,
    /// JSON files found, including any left unprocessed after an abort
    pub total: usize,
    pub aborted: bool,
}

impl BatchReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Fail if any file in the batch failed
    pub fn ensure_success(&self) -> ConversionResult<()> {
        match self.failures.first() {
            None => Ok(()),
            Some((path, first)) => Err(ConversionError::conversion_with_cause(
                ConversionErrorKind::BatchFailed {
                    failed: self.failed(),
                    total: self.total,
                },
                anyhow::anyhow!(
                    "first failure: {}: {}",
                    path.display(),
                    first.user_message()
                ),
            )),
        }
    }
}

/// Convert every JSON file under `input_dir`, in sorted path order.
///
/// `on_result` sees each file's outcome as soon as it is known. Unless
/// `continue_on_error` is set, the first failure stops the run.
pub fn convert_directory<F>(
    input_dir: &Path,
    options: &BatchOptions,
    config: &ConversionConfig,
    mut on_result: F,
) -> ConversionResult<BatchReport>
where
    F: FnMut(&Path, &ConversionResult<Conversion>),
{
    let json_files = find_json_files(input_dir, options.recursive)
        .map_err(|e| ConversionError::io(e, input_dir))?;

    let mut config = config.clone();
    if options.output_dir.is_some() {
        config.create_parent_dirs = true;
    }
    let engine = ConversionEngine::new(config);

    let mut report = BatchReport {
        total: json_files.len(),
        ..Default::default()
    };

    for json_file in json_files {
        let output = options
            .output_dir
            .as_deref()
            .map(|dir| map_input_to_output(input_dir, &json_file, dir));

        let result = engine.convert_file(&json_file, output.as_deref());
        on_result(&json_file, &result);

        match result {
            Ok(conversion) => report.converted.push(conversion),
            Err(e) => {
                report.failures.push((json_file, e));
                if !options.continue_on_error {
                    report.aborted = true;
                    break;
                }
            }
        }
    }

    Ok(report)
}
