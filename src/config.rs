use std::{path::PathBuf, str::FromStr};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::journal::DEFAULT_STORAGE_KEY;

pub const DATA_DIR_ENV: &str = "KIDNEY_GARDEN_DATA_DIR";
pub const BACKEND_ENV: &str = "KIDNEY_GARDEN_BACKEND";
pub const DEBUG_ENV: &str = "KIDNEY_GARDEN_DEBUG";

const DEFAULT_DATA_DIR: &str = "kidney-garden-data";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    Json,
    Sqlite,
}

impl Default for StorageBackend {
    fn default() -> Self {
        StorageBackend::Sqlite
    }
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "json" => Ok(StorageBackend::Json),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(anyhow!("unknown storage backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GardenConfig {
    pub data_dir: PathBuf,
    pub backend: StorageBackend,
    pub storage_key: String,
    pub debug: bool,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            backend: StorageBackend::default(),
            storage_key: DEFAULT_STORAGE_KEY.into(),
            debug: false,
        }
    }
}

impl GardenConfig {
    /// Defaults overridden by `KIDNEY_GARDEN_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(backend) = lookup(BACKEND_ENV) {
            config.backend = backend
                .parse()
                .with_context(|| format!("invalid {BACKEND_ENV}"))?;
        }
        config.debug = lookup(DEBUG_ENV)
            .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(config)
    }

    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join("kidney-garden.sqlite3")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<GardenConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GardenConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.backend, StorageBackend::Sqlite);
        assert_eq!(config.storage_key, "kidneyGardenData");
        assert_eq!(config.data_dir, PathBuf::from("kidney-garden-data"));
        assert!(!config.debug);
    }

    #[test]
    fn environment_overrides() {
        let config = config_from(&[
            (DATA_DIR_ENV, "/tmp/garden"),
            (BACKEND_ENV, " JSON "),
            (DEBUG_ENV, "true"),
        ])
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/garden"));
        assert_eq!(config.backend, StorageBackend::Json);
        assert!(config.debug);
        assert_eq!(config.sqlite_path(), PathBuf::from("/tmp/garden/kidney-garden.sqlite3"));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(config_from(&[(BACKEND_ENV, "postgres")]).is_err());
    }
}
