use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Resolve configuration in order: explicit path (flag or
    /// `PAYROLL_CONFIG`), else global config then a root-local
    /// `config.toml`, each merged over the defaults. Environment
    /// overrides apply last.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("PAYROLL_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(local) = Self::load_local(root)? {
                config.merge_patch(local);
            }
        }

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let path = dirs::config_dir()
            .ok_or_else(|| PayrollError::MissingConfig("config directory not found".to_string()))?
            .join("payroll/config.toml");
        Self::load_patch(&path)
    }

    fn load_local(root: &Path) -> Result<Option<ConfigPatch>> {
        let path = root.join("config.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| PayrollError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| PayrollError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.storage {
            self.storage.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(value) = env_string("PAYROLL_DATA_FILE") {
            self.storage.file = value;
        }
        if let Some(value) = env_bool("PAYROLL_PRETTY") {
            self.storage.pretty = value;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backing file name, resolved against the data root unless absolute.
    #[serde(default)]
    pub file: String,
    /// Pretty-print the JSON on save.
    #[serde(default)]
    pub pretty: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: "payroll_data.json".to_string(),
            pretty: true,
        }
    }
}

impl StorageConfig {
    fn merge(&mut self, patch: StoragePatch) {
        if let Some(value) = patch.file {
            self.file = value;
        }
        if let Some(value) = patch.pretty {
            self.pretty = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub storage: Option<StoragePatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct StoragePatch {
    pub file: Option<String>,
    pub pretty: Option<bool>,
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
