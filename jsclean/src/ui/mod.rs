//! Terminal output for the jsclean CLI: warnings, summary and diff.

pub mod diff_viewer;
pub mod output_format;
