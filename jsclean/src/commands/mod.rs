//! Command implementations for the jsclean CLI.

pub mod clean;
