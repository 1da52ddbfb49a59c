//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` (by default
//! `~/.config/dossier/config.toml`) and applies environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use dossier_core::config::RootConfig;
use dossier_core::error::{DossierError, Result};

use crate::paths::DossierPaths;

/// Environment variable that overrides `[gemini].api_key`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Reads `config.toml`.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service for the configured (or platform default) config file.
    pub fn from_paths(paths: &DossierPaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| DossierError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is a configuration error.
    pub fn load(&self) -> Result<RootConfig> {
        if !self.path.exists() {
            tracing::debug!(
                "[ConfigService] No config file at {}, using defaults",
                self.path.display()
            );
            return Ok(RootConfig::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DossierError::config(format!("cannot read {}: {}", self.path.display(), e))
        })?;

        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            DossierError::config(format!("malformed {}: {}", self.path.display(), e))
        })?;

        tracing::info!("[ConfigService] Loaded {}", self.path.display());
        Ok(config)
    }

    /// Loads the configuration and applies [`API_KEY_ENV`].
    pub fn load_with_env(&self) -> Result<RootConfig> {
        let config = self.load()?;
        Ok(apply_api_key_override(config, std::env::var(API_KEY_ENV).ok()))
    }
}

/// Replaces the configured API key with `env_value` when it is non-blank.
pub fn apply_api_key_override(mut config: RootConfig, env_value: Option<String>) -> RootConfig {
    if let Some(key) = env_value.filter(|k| !k.trim().is_empty()) {
        config.gemini.api_key = Some(key);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use dossier_core::config::DEFAULT_SHARE_BASE_URL;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().unwrap(), RootConfig::default());
    }

    #[test]
    fn test_loads_sections() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[gemini]
api_key = "from-file"
text_model = "custom-text"

[share]
base_url = "https://dossier.example/"

[storage]
data_dir = "/var/lib/dossier"
"#,
        )
        .unwrap();

        let config = ConfigService::new(&path).load().unwrap();
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.gemini.text_model, "custom-text");
        assert_eq!(config.share.base_url, "https://dossier.example/");
        assert_eq!(
            config.storage.data_dir,
            Some(PathBuf::from("/var/lib/dossier"))
        );
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[gemini\napi_key = ").unwrap();

        let err = ConfigService::new(&path).load().unwrap_err();
        assert!(matches!(err, DossierError::Config(_)));
    }

    #[test]
    fn test_api_key_override() {
        let mut config = RootConfig::default();
        config.gemini.api_key = Some("from-file".to_string());

        let config = apply_api_key_override(config, Some("from-env".to_string()));
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-env"));

        let config = apply_api_key_override(config, Some("  ".to_string()));
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-env"));

        let config = apply_api_key_override(config, None);
        assert_eq!(config.gemini.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.share.base_url, DEFAULT_SHARE_BASE_URL);
    }
}
