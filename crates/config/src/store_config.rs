// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::load_config::{find_in_parent, relative_to_config, resolve_config_path};
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};
use tracing::info;

pub const DEFAULT_CONFIG_NAME: &str = "polystore.config.yaml";
pub const ENV_PREFIX: &str = "POLYSTORE_";

/// Which medium holds evicted payloads
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "lowercase")]
#[serde(tag = "type")]
pub enum BackendConfig {
    /// Host heap
    InMem {
        /// Optional cap on the total number of payload bytes
        #[serde(default)]
        capacity: Option<usize>,
    },
    /// On-disk sled database
    Sled {
        /// Database directory. Relative paths are resolved against the config file location.
        path: PathBuf,
        /// Tree inside the database
        #[serde(default = "default_tree")]
        tree: String,
    },
}

fn default_tree() -> String {
    "polynomials".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig::InMem { capacity: None }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    pub backend: BackendConfig,
    /// Record every write made to an in-memory backend
    pub capture: bool,
}

impl StoreConfig {
    /// Defaults, overlaid with the YAML file at `path` (if it exists), overlaid with
    /// `POLYSTORE_` environment variables. Nested keys use `__`, eg.
    /// `POLYSTORE_BACKEND__TYPE=sled`.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(StoreConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Figment::from(Serialized::defaults(StoreConfig::default()))
            .merge(Yaml::string(yaml))
            .extract()
            .context("Could not parse configuration")
    }

    /// Makes a relative sled path absolute with respect to the config file.
    fn resolve_paths(mut self, config_file: &Path, cwd: &Path) -> Self {
        if let BackendConfig::Sled { ref mut path, .. } = self.backend {
            *path = relative_to_config(config_file, cwd, path);
        }
        self
    }
}

pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("polystore")
}

/// Load the config at `config_file`, or the nearest `polystore.config.yaml`, or defaults.
///
/// An explicitly passed file must exist.
pub fn load_config(config_file: Option<&Path>) -> Result<StoreConfig> {
    let cwd = env::current_dir()?;
    let resolved = resolve_config_path(
        find_in_parent,
        &cwd,
        &default_config_dir(),
        DEFAULT_CONFIG_NAME,
        config_file,
    );

    if config_file.is_some() && !resolved.exists() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Configuration file not found: {}", resolved.display()),
        )
        .into());
    }

    let config: StoreConfig = StoreConfig::figment(&resolved)
        .extract()
        .context("Could not parse configuration")?;
    info!(path = %resolved.display(), backend = ?config.backend, "loaded store configuration");

    Ok(config.resolve_paths(&resolved, &cwd))
}
