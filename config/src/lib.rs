//! Configuration loading for the padlock mechanism.
//!
//! ```toml
//! [lock]
//! combination = [10, 20, 30]
//!
//! [dial]
//! start = "random"
//! ```

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use padlock_types::Combination;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV_VAR: &str = "PADLOCK_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct PadlockConfig {
    #[serde(default)]
    pub lock: LockConfig,
    #[serde(default)]
    pub dial: DialConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LockConfig {
    /// Written as `[n1, n2, n3]`. Defaults to `[0, 0, 0]`.
    #[serde(default)]
    pub combination: Combination,
}

#[derive(Debug, Default, Deserialize)]
pub struct DialConfig {
    #[serde(default)]
    pub start: StartPose,
}

/// Where the discs sit when a lock is built from config.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartPose {
    /// Factory pose: rear 4, middle 2, front 0.
    #[default]
    Rest,
    /// Independent uniform draw for each disc.
    Random,
}

impl StartPose {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Random => "random",
        }
    }
}

impl PadlockConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the config from [`config_path`]. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_optional(config_path())
    }

    fn load_optional(path: Option<PathBuf>) -> Result<Option<Self>, ConfigError> {
        let Some(path) = path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        match Self::load_from(&path) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!(path = %path.display(), "{err}");
                Err(err)
            }
        }
    }
}

/// `$PADLOCK_CONFIG` if set and non-empty, otherwise `~/.padlock/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    resolve_config_path(env::var_os(CONFIG_ENV_VAR), dirs::home_dir())
}

fn resolve_config_path(override_path: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match override_path {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => home.map(|home| home.join(".padlock").join("config.toml")),
    }
}
