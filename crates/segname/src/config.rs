//! Configuration loaded from segname.toml
//!
//! ```toml
//! [name]
//! delimiter = "/"
//! backing = "string"
//! ```

use segname_core::{Backing, Delimiter};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE: &str = "segname.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegnameConfig {
    /// Defaults for names given on the command line
    #[serde(default)]
    pub name: NameSection,
}

/// [name] section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameSection {
    #[serde(default)]
    pub delimiter: Delimiter,
    #[serde(default)]
    pub backing: Backing,
}

impl SegnameConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load `path`, or `segname.toml` in the working directory if present.
    ///
    /// An explicit path must exist; the implicit file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE);
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Self::from_toml_str(&text)
    }
}
