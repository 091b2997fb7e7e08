//! A `CleaningEngine` implementation that classifies lines by plain
//! substring checks and rewrites embedded calls with the strip pattern.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;

use crate::config::FilterConfig;
use crate::engine::CleaningEngine;
use crate::filters::compiler::{get_or_compile_filter, CompiledFilter};
use crate::line_outcome::{CleanReport, LineOutcome};

#[derive(Debug)]
pub struct MarkerEngine {
    compiled_filter: Arc<CompiledFilter>,
    config: FilterConfig,
}

impl MarkerEngine {
    pub fn new(config: FilterConfig) -> Result<Self> {
        let compiled_filter = get_or_compile_filter(&config)
            .context("Failed to compile filter for MarkerEngine")?;

        Ok(Self {
            compiled_filter,
            config,
        })
    }

    /// Builds an engine from the embedded default filter.
    pub fn with_defaults() -> Result<Self> {
        Self::new(FilterConfig::load_default()?)
    }
}

/// Splits `content` after every `\n`, `\r\n` or lone `\r`.
///
/// Terminators stay attached to their line; the last line may have none.
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let bytes = rest.as_bytes();
        let end = match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}

impl CleaningEngine for MarkerEngine {
    fn classify_line(&self, line: &str) -> LineOutcome {
        let filter = &self.compiled_filter;
        if !filter.has_marker(line) {
            return LineOutcome::Kept;
        }
        if !filter.has_indicator(line) {
            return LineOutcome::Dropped;
        }
        // `\s*` in the default pattern also eats the line terminator.
        let cleaned = filter.strip_regex.replace_all(line, "");
        if cleaned == line {
            LineOutcome::Retained
        } else {
            LineOutcome::Stripped { cleaned: cleaned.into_owned() }
        }
    }

    fn clean(&self, content: &str, source_id: &str) -> Result<CleanReport> {
        debug!("Cleaning '{}' ({} bytes).", source_id, content.len());
        let mut report = CleanReport::default();

        for (idx, line) in split_lines(content).enumerate() {
            let outcome = self.classify_line(line);
            report.record(idx as u64 + 1, line, outcome);
        }

        info!(
            "Cleaned '{}': {} lines in, {} out ({} dropped, {} stripped, {} retained).",
            source_id,
            report.original_line_count,
            report.cleaned_line_count,
            report.dropped_line_count,
            report.stripped_line_count,
            report.retained_line_count
        );
        Ok(report)
    }

    fn get_config(&self) -> &FilterConfig { &self.config }
}
