//! Pattern handling for the jsclean line filter.
//!
//! This module turns a `FilterConfig` into a `CompiledFilter`: the marker and
//! indicators are kept as plain substrings, and the strip pattern is compiled
//! once into a `Regex` that the engine reuses for every line.

pub mod compiler;
