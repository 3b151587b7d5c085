use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND: &str = "0.0.0.0:3000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("RECIPE_HUB_SEED must be true or false, got {0:?}")]
    InvalidSeedFlag(String),
}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind: String,
    /// Load the demo recipes and pantry before anything else.
    pub seed: bool,
    /// JSON data file imported at startup, after the sample data.
    pub data_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            seed: true,
            data_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(bind) = lookup("RECIPE_HUB_BIND").filter(|b| !b.trim().is_empty()) {
            config.bind = bind;
        }

        if let Some(seed) = lookup("RECIPE_HUB_SEED") {
            config.seed = match seed.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return Err(ConfigError::InvalidSeedFlag(seed)),
            };
        }

        config.data_file = lookup("RECIPE_HUB_DATA")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), ServerConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("RECIPE_HUB_BIND", "127.0.0.1:8080"),
            ("RECIPE_HUB_SEED", "false"),
            ("RECIPE_HUB_DATA", "/tmp/pantry.json"),
        ])
        .unwrap();
        assert_eq!(config.bind, "127.0.0.1:8080");
        assert!(!config.seed);
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/pantry.json")));
    }

    #[test]
    fn test_bad_seed_flag() {
        assert_eq!(
            config_from(&[("RECIPE_HUB_SEED", "maybe")]),
            Err(ConfigError::InvalidSeedFlag("maybe".to_string()))
        );
    }
}
