//! TOML-file configuration store.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, TriggerConfig};
use crate::ports::ConfigStore;

const CONFIG_PATH_ENV: &str = "COFFEECTL_CONFIG";
const DEFAULT_RELATIVE_PATH: &str = ".config/coffeectl/config.toml";

/// Stores the single configuration as a TOML file. The file holds the
/// bearer token in the clear, so it lives under the user's home.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    path: PathBuf,
}

impl FilesystemConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FilesystemConfigStore { path: path.into() }
    }

    /// Resolve the store location: `$COFFEECTL_CONFIG` if set, otherwise
    /// `$HOME/.config/coffeectl/config.toml`.
    pub fn default_location() -> Result<Self, AppError> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(Self::new(PathBuf::from(path)));
        }

        let home = env::var_os("HOME")
            .ok_or_else(|| AppError::config_error("HOME is not set; cannot locate config file"))?;
        Ok(Self::new(PathBuf::from(home).join(DEFAULT_RELATIVE_PATH)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FilesystemConfigStore {
    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> Result<TriggerConfig, AppError> {
        if !self.path.exists() {
            return Err(AppError::NotConfigured);
        }

        let raw = fs::read_to_string(&self.path)?;
        let config: TriggerConfig = toml::from_str(&raw)?;
        Ok(config)
    }

    fn save(&self, config: &TriggerConfig) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = toml::to_string_pretty(config)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Credentials, RepositoryTarget};

    #[test]
    fn load_without_a_file_is_not_configured() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemConfigStore::new(dir.path().join("config.toml"));

        assert!(!store.exists());
        assert!(matches!(store.load(), Err(AppError::NotConfigured)));
    }

    #[test]
    fn saved_configuration_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilesystemConfigStore::new(dir.path().join("nested/config.toml"));

        let config = TriggerConfig::new(
            Credentials::new("ghp_token"),
            RepositoryTarget::new("someone", "else", "other.yml"),
        );
        store.save(&config).unwrap();

        assert!(store.exists());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.credentials().token(), "ghp_token");
        assert_eq!(loaded.target().slug(), "someone/else");
    }

    #[test]
    fn partial_file_gains_default_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "github_token = \"ghp_token\"\n").unwrap();

        let store = FilesystemConfigStore::new(path);
        let loaded = store.load().unwrap();
        assert_eq!(loaded.target(), &RepositoryTarget::default());
    }
}
