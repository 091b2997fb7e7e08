//! # jsclean Core Library
//!
//! `jsclean-core` provides the platform-independent logic for stripping
//! `console.log` diagnostics from JavaScript sources. It defines the filter
//! configuration, compiles the strip pattern, and implements a pluggable
//! `CleaningEngine` trait that classifies each line.
//!
//! ## Modules
//!
//! * `config`: Defines `FilterConfig` and `FilterOverrides` and how they are loaded and merged.
//! * `filters`: Compiles a `FilterConfig` into a cached `CompiledFilter`.
//! * `engine`: Defines the `CleaningEngine` trait.
//! * `engines`: Contains concrete implementations of the `CleaningEngine` trait.
//! * `line_outcome`: Per-line outcomes and the per-run `CleanReport`.
//! * `headless`: One-shot helpers for strings and files.
//! * `errors`: The `JscleanError` type.
//!
//! ## The filter rule
//!
//! For each line, in order:
//!
//! 1. No `console.log` on the line: keep it unchanged.
//! 2. `console.log` plus one of `fetch(`, `.then(` or `return`: remove every
//!    match of `console\.log\([^)]*\);\s*` and keep the rest.
//! 3. `console.log` alone: drop the line.
//!
//! The strip pattern stops at the first `)`, so calls with nested
//! parentheses are only partially removed, or not at all.
//!
//! ## Usage Example
//!
//! ```rust
//! use jsclean_core::{FilterConfig, headless_clean_string};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = FilterConfig::load_default()?;
//!     let input = "init();\nconsole.log('booted');\nreturn fetch(u).then(r => { console.log(r); return r; });\n";
//!
//!     let cleaned = headless_clean_string(config, input)?;
//!     assert_eq!(cleaned, "init();\nreturn fetch(u).then(r => { return r; });\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Configuration loading uses `anyhow::Error`. File-level operations return
//! `JscleanError` so callers can tell input, decoding and output failures apart.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod filters;
pub mod headless;
pub mod line_outcome;

/// Re-exports the public configuration types and functions.
pub use config::{merge_config, validate_config, FilterConfig, FilterOverrides, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::JscleanError;

/// Re-exports the engine trait and its concrete implementation.
pub use engine::CleaningEngine;
pub use engines::marker_engine::MarkerEngine;

/// Re-exports per-line outcomes and the run report.
pub use line_outcome::{CleanReport, LineEvent, LineOutcome};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{clean_file, clean_file_with, headless_clean_string, CleanedFile};

pub use filters::compiler::{compile_filter, get_or_compile_filter, CompiledFilter};
