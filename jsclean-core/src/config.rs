//! Configuration management for `jsclean-core`.
//!
//! This module defines the filter configuration: the diagnostic marker, the
//! contextual indicators and the strip pattern. It handles deserialization of
//! YAML configurations and provides utilities for loading, merging and
//! validating them.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maximum allowed length for the strip pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The complete set of settings the line filter runs with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct FilterConfig {
    /// Substring identifying a diagnostic print call (e.g. `console.log`).
    pub marker: String,
    /// Substrings signalling the call is embedded in a larger expression.
    pub indicators: Vec<String>,
    /// Regex removed from lines that carry both the marker and an indicator.
    pub strip_pattern: String,
}

/// User-supplied overrides. Every field is optional; absent fields keep the default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterOverrides {
    pub marker: Option<String>,
    pub indicators: Option<Vec<String>>,
    pub strip_pattern: Option<String>,
}

impl FilterConfig {
    /// Loads the built-in filter from the embedded configuration.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default filter from embedded string...");
        let default_yaml = include_str!("../config/default_filter.yaml");
        let config: FilterConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default filter")?;

        debug!(
            "Loaded default filter: marker '{}', {} indicators.",
            config.marker,
            config.indicators.len()
        );
        Ok(config)
    }

    /// Loads filter overrides from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<FilterOverrides> {
        let path = path.as_ref();
        info!("Loading custom filter from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        // An empty document means "no overrides".
        if text.trim().is_empty() {
            return Ok(FilterOverrides::default());
        }
        let overrides: FilterOverrides = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(overrides)
    }
}

/// Merges user overrides into the default filter and validates the result.
pub fn merge_config(
    default_config: FilterConfig,
    overrides: Option<FilterOverrides>,
) -> Result<FilterConfig> {
    let mut merged = default_config;

    if let Some(user) = overrides {
        if let Some(marker) = user.marker {
            debug!("Overriding marker with user value: {}", marker);
            merged.marker = marker;
        }
        if let Some(indicators) = user.indicators {
            debug!("Overriding indicators with {} user values.", indicators.len());
            merged.indicators = indicators;
        }
        if let Some(pattern) = user.strip_pattern {
            debug!("Overriding strip pattern with user value: {}", pattern);
            merged.strip_pattern = pattern;
        }
    }

    validate_config(&merged)?;
    Ok(merged)
}

/// Validates filter integrity (non-empty fields, regex compilation, length limit).
pub fn validate_config(config: &FilterConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.marker.is_empty() {
        errors.push("The `marker` field is empty.".to_string());
    }

    for (idx, indicator) in config.indicators.iter().enumerate() {
        if indicator.is_empty() {
            errors.push(format!("Indicator #{} is empty.", idx + 1));
        }
    }

    if config.strip_pattern.is_empty() {
        errors.push("The `strip_pattern` field is empty.".to_string());
    } else if config.strip_pattern.len() > MAX_PATTERN_LENGTH {
        errors.push(format!(
            "The `strip_pattern` length ({}) exceeds maximum allowed ({}).",
            config.strip_pattern.len(),
            MAX_PATTERN_LENGTH
        ));
    } else if let Err(e) = Regex::new(&config.strip_pattern) {
        errors.push(format!("The `strip_pattern` is not a valid regex: {}", e));
    }

    if !errors.is_empty() {
        let full_error_message = format!("Filter validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_matches_builtin_values() {
        let config = FilterConfig::load_default().unwrap();
        assert_eq!(config.marker, "console.log");
        assert_eq!(config.indicators, vec!["fetch(", ".then(", "return"]);
        assert_eq!(config.strip_pattern, r"console\.log\([^)]*\);\s*");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn merge_replaces_only_present_fields() {
        let default = FilterConfig::load_default().unwrap();
        let overrides = FilterOverrides {
            marker: Some("console.debug".to_string()),
            ..Default::default()
        };
        let merged = merge_config(default.clone(), Some(overrides)).unwrap();
        assert_eq!(merged.marker, "console.debug");
        assert_eq!(merged.indicators, default.indicators);
        assert_eq!(merged.strip_pattern, default.strip_pattern);
    }

    #[test]
    fn validation_collects_every_problem() {
        let config = FilterConfig {
            marker: String::new(),
            indicators: vec!["ok".to_string(), String::new()],
            strip_pattern: "(unclosed".to_string(),
        };
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("`marker` field is empty"));
        assert!(err.contains("Indicator #2 is empty"));
        assert!(err.contains("not a valid regex"));
    }

    #[test]
    fn validation_rejects_overlong_pattern() {
        let mut config = FilterConfig::load_default().unwrap();
        config.strip_pattern = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = validate_config(&config).unwrap_err().to_string();
        assert!(err.contains("exceeds maximum allowed"));
    }
}
