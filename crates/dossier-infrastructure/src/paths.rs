//! Unified path management for dossier configuration and data files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/dossier/           # Config directory (platform config dir)
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/dossier/      # Data directory (platform data dir)
//! ├── persona_history.json     # History snapshot (FileBlobStore)
//! └── logs/                    # Application logs
//!     └── dossier.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

/// Application directory name under the platform config/data dirs.
pub const APP_DIR_NAME: &str = "dossier";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config or data directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution with optional overrides.
///
/// Overrides come from CLI flags or `[storage]` in config.toml; without them the
/// platform directories (via `dirs`) are used.
#[derive(Debug, Clone, Default)]
pub struct DossierPaths {
    config_file: Option<PathBuf>,
    data_dir: Option<PathBuf>,
}

impl DossierPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an explicit config file instead of `<config_dir>/config.toml`.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Uses an explicit data directory.
    pub fn with_data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(path.into());
        self
    }

    /// Sets the data directory unless one is already set.
    pub fn or_data_dir(mut self, path: Option<&Path>) -> Self {
        if self.data_dir.is_none() {
            self.data_dir = path.map(Path::to_path_buf);
        }
        self
    }

    /// Returns the dossier configuration directory (e.g., `~/.config/dossier/`).
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(parent) = self.config_file.as_deref().and_then(Path::parent) {
            return Ok(parent.to_path_buf());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        match &self.config_file {
            Some(path) => Ok(path.clone()),
            None => Ok(self.config_dir()?.join("config.toml")),
        }
    }

    /// Returns the dossier data directory (e.g., `~/.local/share/dossier/`).
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dirs_end_with_app_name() {
        let paths = DossierPaths::new();
        if let Ok(config_dir) = paths.config_dir() {
            assert!(config_dir.ends_with(APP_DIR_NAME));
            assert!(paths.config_file().unwrap().starts_with(&config_dir));
        }
        if let Ok(data_dir) = paths.data_dir() {
            assert!(data_dir.ends_with(APP_DIR_NAME));
            assert!(paths.logs_dir().unwrap().ends_with("logs"));
        }
    }

    #[test]
    fn test_overrides() {
        let paths = DossierPaths::new()
            .with_config_file("/tmp/custom/dossier.toml")
            .with_data_dir("/tmp/data");

        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/custom/dossier.toml")
        );
        assert_eq!(paths.config_dir().unwrap(), PathBuf::from("/tmp/custom"));
        assert_eq!(paths.data_dir().unwrap(), PathBuf::from("/tmp/data"));
        assert_eq!(paths.logs_dir().unwrap(), PathBuf::from("/tmp/data/logs"));
    }

    #[test]
    fn test_or_data_dir_keeps_explicit_value() {
        let paths = DossierPaths::new()
            .with_data_dir("/tmp/flag")
            .or_data_dir(Some(Path::new("/tmp/config")));
        assert_eq!(paths.data_dir().unwrap(), PathBuf::from("/tmp/flag"));

        let paths = DossierPaths::new().or_data_dir(Some(Path::new("/tmp/config")));
        assert_eq!(paths.data_dir().unwrap(), PathBuf::from("/tmp/config"));
    }
}
