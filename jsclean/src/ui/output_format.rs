//! Formatting helpers for warnings and the run summary.
//!
//! Warnings go to stderr and are colored only when the target is a
//! terminal. The summary is always plain text on stdout.

use std::io::{self, Write};

use jsclean_core::CleanReport;
use owo_colors::{AnsiColors, OwoColorize};

/// The parts of the output that get a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Warn,
    DiffAdded,
    DiffRemoved,
    DiffHeader,
}

impl Style {
    fn color(self) -> AnsiColors {
        match self {
            Style::Warn => AnsiColors::Yellow,
            Style::DiffAdded => AnsiColors::Green,
            Style::DiffRemoved => AnsiColors::Red,
            Style::DiffHeader => AnsiColors::Cyan,
        }
    }
}

/// Applies the color for `style` to `text` when color is supported.
pub fn styled(text: &str, style: Style, supports_color: bool) -> String {
    if supports_color {
        text.color(style.color()).to_string()
    } else {
        text.to_string()
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    let line = format!("Warning: {}", msg);
    writeln!(writer, "{}", styled(&line, Style::Warn, supports_color))
}

/// Writes the two summary lines:
///
/// ```text
/// Cleaned <N> lines down to <M> lines
/// Removed <N-M> lines
/// ```
pub fn print_summary<W: Write>(writer: &mut W, report: &CleanReport) -> io::Result<()> {
    writeln!(
        writer,
        "Cleaned {} lines down to {} lines",
        report.original_line_count, report.cleaned_line_count
    )?;
    writeln!(writer, "Removed {} lines", report.removed_line_count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_has_exact_wording() {
        let report = CleanReport {
            original_line_count: 10,
            cleaned_line_count: 7,
            ..Default::default()
        };
        let mut out = Vec::new();
        print_summary(&mut out, &report).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Cleaned 10 lines down to 7 lines\nRemoved 3 lines\n");
    }

    #[test]
    fn styled_is_plain_without_color_support() {
        assert_eq!(styled("hello", Style::Warn, false), "hello");
        assert_eq!(styled("hello", Style::Warn, true), "\u{1b}[33mhello\u{1b}[39m");
        assert_eq!(styled("gone", Style::DiffRemoved, true), "\u{1b}[31mgone\u{1b}[39m");
    }

    #[test]
    fn warnings_are_prefixed() {
        let mut out = Vec::new();
        print_warn_message(&mut out, "careful", false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Warning: careful\n");
    }
}
