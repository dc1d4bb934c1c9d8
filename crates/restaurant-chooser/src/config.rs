//! # Configuration
//!
//! Settings are layered, later layers winning:
//!
//! 1. Built-in defaults ([`Config::default`])
//! 2. A JSON file named by `CHOOSER_CONFIG`, if set. Missing keys keep their defaults.
//! 3. `CHOOSER_DATA_DIR`, `CHOOSER_CHANNEL_BUFFER`, `CHOOSER_SEED`
//!
//! ```json
//! { "data_dir": "/var/lib/chooser", "channel_buffer": 64, "seed": 7 }
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_VAR: &str = "CHOOSER_CONFIG";
pub const DATA_DIR_VAR: &str = "CHOOSER_DATA_DIR";
pub const CHANNEL_BUFFER_VAR: &str = "CHOOSER_CHANNEL_BUFFER";
pub const SEED_VAR: &str = "CHOOSER_SEED";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `people.json` and `restaurants.json`.
    pub data_dir: PathBuf,
    /// Capacity of every actor's request channel. Must be at least 1.
    pub channel_buffer: usize,
    /// Fixed seed for the random choice. Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("restaurant-chooser");
        Self {
            data_dir,
            channel_buffer: 32,
            seed: None,
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using `lookup` in place of the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup(CONFIG_FILE_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(dir) = lookup(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(value) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: CHANNEL_BUFFER_VAR,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(SEED_VAR) {
            let seed = value.parse().map_err(|_| ConfigError::InvalidValue {
                name: SEED_VAR,
                value: value.clone(),
            })?;
            config.seed = Some(seed);
        }

        if config.channel_buffer == 0 {
            return Err(ConfigError::InvalidValue {
                name: CHANNEL_BUFFER_VAR,
                value: "0".to_string(),
            });
        }
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The random source for a session: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.channel_buffer, 32);
        assert!(config.data_dir.ends_with("restaurant-chooser"));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("chooser.json");
        std::fs::write(&file, r#"{ "channel_buffer": 8, "seed": 1 }"#).unwrap();
        let file = file.to_string_lossy().to_string();

        let config = Config::from_lookup(lookup(&[
            (CONFIG_FILE_VAR, &file),
            (SEED_VAR, "99"),
            (DATA_DIR_VAR, "/tmp/chooser"),
        ]))
        .unwrap();

        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/chooser"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::from_lookup(lookup(&[(CHANNEL_BUFFER_VAR, "lots")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { name, .. } if name == CHANNEL_BUFFER_VAR
        ));

        let err = Config::from_lookup(lookup(&[(CHANNEL_BUFFER_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = Config::from_lookup(lookup(&[(CONFIG_FILE_VAR, "/no/such/file.json")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        let config = Config {
            seed: Some(5),
            ..Config::default()
        };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }
}
