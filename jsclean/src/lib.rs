//! # jsclean CLI Application
//!
//! This crate provides the command-line interface for `jsclean-core`: argument
//! parsing, logging setup, the clean command and terminal output.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::clean::{run_clean, CleanOptions};
