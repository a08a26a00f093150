use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diagnostics::ConfigError;
use crate::pretty::DumpOptions;

/// File name searched for by [`Config::discover`].
pub const CONFIG_FILE: &str = "jtree.toml";

/// Crate-level settings, read from a `jtree.toml`:
///
/// ```toml
/// [dump]
/// indent_width = 4
/// show_source = true
/// ```
///
/// Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dump: DumpOptions,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io(path.to_path_buf(), e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load the nearest `jtree.toml` at or above `start_dir`, or the defaults
    /// if there is none.
    pub fn discover(start_dir: &Path) -> Result<Self, ConfigError> {
        match find_config_walk(start_dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

fn find_config_walk(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir;
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}
