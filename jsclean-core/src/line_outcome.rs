//! Provides the data structures describing what the filter did to each line
//! and the per-run report handed back to callers.

use log::debug;

/// What happened to a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line is written unchanged.
    Kept,
    /// The marker was found alongside an indicator; `cleaned` is what remains
    /// after the strip pattern was removed.
    Stripped { cleaned: String },
    /// The marker was found alongside an indicator but the strip pattern did
    /// not match (e.g. nested parentheses); the line is written unchanged.
    Retained,
    /// A standalone diagnostic line; nothing is written.
    Dropped,
}

/// A record of one line that carried the diagnostic marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEvent {
    /// 1-based line number in the input document.
    pub line_number: u64,
    pub original: String,
    pub outcome: LineOutcome,
}

/// The result of cleaning one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Surviving lines in input order, terminators included.
    pub lines: Vec<String>,
    pub original_line_count: usize,
    pub cleaned_line_count: usize,
    pub stripped_line_count: usize,
    pub dropped_line_count: usize,
    /// Lines that kept a diagnostic call because the strip pattern missed it.
    pub retained_line_count: usize,
    pub events: Vec<LineEvent>,
}

impl CleanReport {
    /// Records the outcome for `line` and appends whatever survives.
    pub fn record(&mut self, line_number: u64, line: &str, outcome: LineOutcome) {
        self.original_line_count += 1;
        match &outcome {
            LineOutcome::Kept => {
                self.lines.push(line.to_string());
                self.cleaned_line_count += 1;
                return;
            }
            LineOutcome::Stripped { cleaned } => {
                debug!("Line {}: stripped diagnostic call in place.", line_number);
                self.lines.push(cleaned.clone());
                self.cleaned_line_count += 1;
                self.stripped_line_count += 1;
            }
            LineOutcome::Retained => {
                debug!("Line {}: diagnostic call left in place, strip pattern did not match.", line_number);
                self.lines.push(line.to_string());
                self.cleaned_line_count += 1;
                self.retained_line_count += 1;
            }
            LineOutcome::Dropped => {
                debug!("Line {}: dropped standalone diagnostic line.", line_number);
                self.dropped_line_count += 1;
            }
        }
        self.events.push(LineEvent {
            line_number,
            original: line.to_string(),
            outcome,
        });
    }

    /// Number of lines that did not make it into the output.
    pub fn removed_line_count(&self) -> usize {
        self.original_line_count - self.cleaned_line_count
    }

    /// The cleaned document as a single string.
    pub fn content(&self) -> String {
        self.lines.concat()
    }
}
