// src/config.rs
//! Runtime configuration and rule thresholds.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Local config file, optional.
pub const CONFIG_FILE: &str = "stylewarden.toml";

/// Thresholds for the complexity and naming checks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Maximum function arguments (`self`/`cls` not counted).
    pub max_arguments: usize,
    /// Maximum `return` statements per function.
    pub max_returns: usize,
    /// Maximum nesting depth of compound statements inside a function.
    pub max_nesting_depth: usize,
    /// Minimum identifier length (`_` is exempt).
    pub min_name_length: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            max_arguments: 5,
            max_returns: 5,
            max_nesting_depth: 5,
            min_name_length: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: RuleConfig,
    pub verbose: bool,
}

/// Shape of `stylewarden.toml`.
#[derive(Debug, Default, Deserialize)]
struct StylewardenToml {
    #[serde(default)]
    rules: Option<RuleConfig>,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and applies `stylewarden.toml` from the working
    /// directory when present. A missing file is fine; a malformed one is
    /// reported and ignored.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        config.load_local_config(Path::new(CONFIG_FILE));
        config
    }

    pub fn load_local_config(&mut self, path: &Path) {
        let Ok(content) = fs::read_to_string(path) else {
            return;
        };
        match toml::from_str::<StylewardenToml>(&content) {
            Ok(parsed) => {
                if let Some(rules) = parsed.rules {
                    self.rules = rules;
                }
            }
            Err(e) => {
                eprintln!("WARN: ignoring malformed {}: {e}", path.display());
            }
        }
    }
}
