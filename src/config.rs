//! Engine configuration with defaults and environment overrides.
//!
//! | Variable | Field |
//! |---|---|
//! | `SCHOOLS_DATASET_URL` | `dataset_url` (URL or local path) |
//! | `SCHOOLS_REQUEST_TIMEOUT_SECS` | `request_timeout_secs` |
//! | `SCHOOLS_MAX_RESULTS` | `max_results` |
//! | `SCHOOLS_DISPLAY_LIMIT` | `display_limit` |

use serde::{Deserialize, Serialize};

use crate::loader::DEFAULT_DATASET_URL;
use crate::ranking::DEFAULT_MAX_RESULTS;

/// Rows rendered by the result list
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutocompleteConfig {
    /// Dataset location
    pub dataset_url: String,

    /// Dataset fetch timeout
    pub request_timeout_secs: u64,

    /// Ranker result cap
    pub max_results: usize,

    /// Rows shown by the presentation layer (never above `max_results`)
    pub display_limit: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            dataset_url: DEFAULT_DATASET_URL.to_string(),
            request_timeout_secs: 10,
            max_results: DEFAULT_MAX_RESULTS,
            display_limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

impl AutocompleteConfig {
    /// Defaults overridden by `SCHOOLS_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable numbers keep their default
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("SCHOOLS_DATASET_URL").filter(|u| !u.trim().is_empty()) {
            config.dataset_url = url.trim().to_string();
        }
        if let Some(secs) = parse_var(&lookup, "SCHOOLS_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = secs;
        }
        if let Some(max) = parse_var(&lookup, "SCHOOLS_MAX_RESULTS") {
            config.max_results = max;
        }
        if let Some(limit) = parse_var(&lookup, "SCHOOLS_DISPLAY_LIMIT") {
            config.display_limit = limit;
        }

        config.validated()
    }

    /// Clamp `display_limit` to `max_results`
    pub fn validated(mut self) -> Self {
        if self.display_limit > self.max_results {
            tracing::warn!(
                "display_limit {} exceeds max_results {}, clamping",
                self.display_limit,
                self.max_results
            );
            self.display_limit = self.max_results;
        }
        self
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {}={:?}", key, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AutocompleteConfig::default();
        assert_eq!(config.dataset_url, DEFAULT_DATASET_URL);
        assert_eq!(config.max_results, 20);
        assert_eq!(config.display_limit, 10);
    }

    #[test]
    fn test_overrides() {
        let config = AutocompleteConfig::from_lookup(lookup(&[
            ("SCHOOLS_DATASET_URL", "data/schools.csv"),
            ("SCHOOLS_REQUEST_TIMEOUT_SECS", "3"),
            ("SCHOOLS_DISPLAY_LIMIT", "5"),
        ]));

        assert_eq!(config.dataset_url, "data/schools.csv");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.display_limit, 5);
        assert_eq!(config.max_results, 20);
    }

    #[test]
    fn test_invalid_numbers_keep_defaults() {
        let config = AutocompleteConfig::from_lookup(lookup(&[("SCHOOLS_MAX_RESULTS", "lots")]));
        assert_eq!(config.max_results, 20);
    }

    #[test]
    fn test_display_limit_clamped() {
        let config = AutocompleteConfig::from_lookup(lookup(&[
            ("SCHOOLS_MAX_RESULTS", "8"),
            ("SCHOOLS_DISPLAY_LIMIT", "12"),
        ]));
        assert_eq!(config.display_limit, 8);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AutocompleteConfig = serde_json::from_str(r#"{"max_results": 15}"#).unwrap();
        assert_eq!(config.max_results, 15);
        assert_eq!(config.display_limit, 10);
    }
}
