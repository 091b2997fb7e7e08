//! `headless.rs`
//! Convenience wrappers for using the core engine without a UI.
//! Provides one-shot helpers for cleaning strings and files.

use anyhow::Result;
use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::config::FilterConfig;
use crate::engine::CleaningEngine;
use crate::engines::marker_engine::MarkerEngine;
use crate::errors::JscleanError;
use crate::line_outcome::CleanReport;

/// Cleans an input string with the given filter and returns the cleaned text.
pub fn headless_clean_string(config: FilterConfig, content: &str) -> Result<String> {
    let engine = MarkerEngine::new(config)?;
    let report = engine.clean(content, "headless")?;
    Ok(report.content())
}

/// The result of cleaning one file.
#[derive(Debug, Clone)]
pub struct CleanedFile {
    /// The decoded input document.
    pub original: String,
    pub report: CleanReport,
}

/// Cleans `input` into `output` with the built-in filter.
///
/// Returns `(original_line_count, cleaned_line_count)`.
pub fn clean_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
) -> Result<(usize, usize), JscleanError> {
    let engine = MarkerEngine::with_defaults()?;
    let report = clean_file_with(&engine, input, output)?.report;
    Ok((report.original_line_count, report.cleaned_line_count))
}

/// Reads `input` fully, cleans it with `engine`, then writes `output`.
///
/// The output file is only created once the input has been read and
/// decoded, so a read or UTF-8 failure leaves no output behind.
pub fn clean_file_with<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &dyn CleaningEngine,
    input: P,
    output: Q,
) -> Result<CleanedFile, JscleanError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let original = read_document(input)?;
    let report = engine.clean(&original, &input.display().to_string())?;
    write_report(output, &report)?;
    Ok(CleanedFile { original, report })
}

/// Creates or overwrites `path` with the cleaned lines of `report`.
fn write_report(path: &Path, report: &CleanReport) -> Result<(), JscleanError> {
    debug!("Writing {} lines to {}", report.cleaned_line_count, path.display());
    fs::write(path, report.content()).map_err(|source| JscleanError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote cleaned output to {}", path.display());
    Ok(())
}

/// Reads a whole file and decodes it as UTF-8.
fn read_document(path: &Path) -> Result<String, JscleanError> {
    debug!("Reading input from {}", path.display());
    let bytes = fs::read(path).map_err(|source| JscleanError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|source| JscleanError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })
}
