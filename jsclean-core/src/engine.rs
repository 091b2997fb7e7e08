//! Defines the core CleaningEngine trait.
//!
//! The `CleaningEngine` trait provides a pluggable interface for line
//! filters. The headless helpers and the CLI only talk to this trait, so an
//! alternative classifier can be dropped in without touching I/O code.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::config::FilterConfig;
use crate::line_outcome::{CleanReport, LineOutcome};

/// A trait that defines the core functionality of a cleaning engine.
pub trait CleaningEngine: Send + Sync {
    /// Decides what happens to a single line (terminator included).
    fn classify_line(&self, line: &str) -> LineOutcome;

    /// Cleans a whole document.
    ///
    /// The content is split after every `\n`, `\r\n` or lone `\r`; the
    /// final line may lack a terminator. Lines are processed in order and never reordered.
    ///
    /// # Arguments
    /// * `content` - The document to clean.
    /// * `source_id` - The name or identifier of the source being processed.
    fn clean(&self, content: &str, source_id: &str) -> Result<CleanReport>;

    /// Returns a reference to the engine's configuration.
    fn get_config(&self) -> &FilterConfig;
}
