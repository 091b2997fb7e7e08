//! This module contains the cleaning engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `CleaningEngine` trait.

pub mod marker_engine;
