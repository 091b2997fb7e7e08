//! compiler.rs - Manages the compilation and caching of the line filter.
//!
//! This module provides a thread-safe, cached mechanism to convert a
//! `FilterConfig` into a `CompiledFilter`. It uses a global, shared cache to
//! avoid redundant regex compilation.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::{FilterConfig, MAX_PATTERN_LENGTH};
use crate::errors::JscleanError;

/// A filter ready to be applied line by line.
#[derive(Debug)]
pub struct CompiledFilter {
    /// Substring that marks a line as carrying a diagnostic call.
    pub marker: String,
    /// Substrings that mark the call as embedded in a larger expression.
    pub indicators: Vec<String>,
    /// The compiled strip pattern.
    pub strip_regex: Regex,
}

impl CompiledFilter {
    pub fn has_marker(&self, line: &str) -> bool {
        line.contains(self.marker.as_str())
    }

    pub fn has_indicator(&self, line: &str) -> bool {
        self.indicators.iter().any(|indicator| line.contains(indicator.as_str()))
    }
}

lazy_static! {
    /// A thread-safe, global cache for compiled filters.
    /// The key is a hash of the `FilterConfig`.
    static ref COMPILED_FILTER_CACHE: RwLock<HashMap<u64, Arc<CompiledFilter>>> = RwLock::new(HashMap::new());
}

fn hash_config(config: &FilterConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

/// Compiles a `FilterConfig` into a `CompiledFilter`.
/// This is the low-level function that performs the actual regex compilation.
pub fn compile_filter(config: &FilterConfig) -> Result<CompiledFilter, JscleanError> {
    let pattern = config.strip_pattern.as_str();
    debug!("Compiling strip pattern '{}'.", pattern);

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(JscleanError::PatternLengthExceeded(pattern.len(), MAX_PATTERN_LENGTH));
    }

    let strip_regex = RegexBuilder::new(pattern)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
        .map_err(|e| JscleanError::PatternCompilationError(pattern.to_string(), e))?;

    log::debug!(
        target: "jsclean_core::filter",
        "Strip pattern compiled successfully."
    );

    Ok(CompiledFilter {
        marker: config.marker.clone(),
        indicators: config.indicators.clone(),
        strip_regex,
    })
}

/// Gets a `CompiledFilter` from the cache or compiles it if not found.
pub fn get_or_compile_filter(config: &FilterConfig) -> Result<Arc<CompiledFilter>> {
    let cache_key = hash_config(config);

    {
        let cache = COMPILED_FILTER_CACHE
            .read()
            .map_err(|_| JscleanError::Fatal("compiled filter cache lock poisoned".to_string()))?;
        if let Some(filter) = cache.get(&cache_key) {
            debug!("Serving compiled filter from cache for key: {}", cache_key);
            return Ok(Arc::clone(filter));
        }
    } // Read lock is released here.

    debug!("Compiled filter not found in cache. Compiling now.");
    let compiled = Arc::new(compile_filter(config)?);

    COMPILED_FILTER_CACHE
        .write()
        .map_err(|_| JscleanError::Fatal("compiled filter cache lock poisoned".to_string()))?
        .insert(cache_key, Arc::clone(&compiled));

    debug!("Successfully compiled and cached filter for key: {}", cache_key);
    Ok(compiled)
}
