//! The clean command: read, filter, write, report.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

use jsclean_core::{clean_file_with, CleanReport, CleanedFile, CleaningEngine};

use crate::ui::diff_viewer;
use crate::ui::output_format;

/// Options for a single clean run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub diff: bool,
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Runs one clean pass and prints the summary to stdout.
pub fn run_clean(engine: &dyn CleaningEngine, opts: &CleanOptions) -> Result<CleanReport> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let stderr_supports_color = io::stderr().is_terminal();
    run_clean_to(engine, opts, &mut writer, &mut io::stderr(), stderr_supports_color)
}

/// Same as [`run_clean`] with explicit summary and diff writers.
pub fn run_clean_to<W: Write, E: Write>(
    engine: &dyn CleaningEngine,
    opts: &CleanOptions,
    summary_out: &mut W,
    diff_out: &mut E,
    diff_color: bool,
) -> Result<CleanReport> {
    info!("Starting clean of {}", opts.input_path.display());

    let CleanedFile { original, report } = clean_file_with(engine, &opts.input_path, &opts.output_path)?;

    debug!(
        "Content cleaned. Original length: {}, cleaned length: {}",
        original.len(),
        report.lines.iter().map(String::len).sum::<usize>()
    );

    if report.retained_line_count > 0 {
        warn_msg(format!(
            "{} line(s) still contain '{}' because the strip pattern did not match.",
            report.retained_line_count,
            engine.get_config().marker
        ));
    }

    if opts.diff {
        diff_viewer::print_diff(&original, &report.content(), diff_out, diff_color)
            .context("Failed to write diff")?;
    }

    output_format::print_summary(summary_out, &report).context("Failed to write summary")?;

    info!("Clean completed.");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsclean_core::MarkerEngine;
    use std::fs;
    use tempfile::tempdir;

    #[test_log::test]
    fn writes_output_and_summary() -> Result<()> {
        let dir = tempdir()?;
        let opts = CleanOptions {
            input_path: dir.path().join("app.js"),
            output_path: dir.path().join("app_cleaned.js"),
            diff: true,
        };
        fs::write(&opts.input_path, "a();\nconsole.log(a);\nreturn b; console.log(b); \n")?;

        let engine = MarkerEngine::with_defaults()?;
        let mut summary = Vec::new();
        let mut diff = Vec::new();
        let report = run_clean_to(&engine, &opts, &mut summary, &mut diff, false)?;

        assert_eq!(report.removed_line_count(), 1);
        assert_eq!(fs::read_to_string(&opts.output_path)?, "a();\nreturn b; ");
        assert_eq!(String::from_utf8(summary)?, "Cleaned 3 lines down to 2 lines\nRemoved 1 lines\n");
        assert!(String::from_utf8(diff)?.contains("-console.log(a);"));
        Ok(())
    }

    #[test_log::test]
    fn missing_input_prints_no_summary() -> Result<()> {
        let dir = tempdir()?;
        let opts = CleanOptions {
            input_path: dir.path().join("absent.js"),
            output_path: dir.path().join("out.js"),
            diff: false,
        };
        let engine = MarkerEngine::with_defaults()?;
        let mut summary = Vec::new();
        let result = run_clean_to(&engine, &opts, &mut summary, &mut io::sink(), false);

        assert!(result.is_err());
        assert!(summary.is_empty());
        assert!(!opts.output_path.exists());
        Ok(())
    }
}
