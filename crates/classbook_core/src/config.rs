//! Application configuration.
//!
//! # Responsibility
//! - Load and save the optional JSON settings file.
//! - Resolve relative paths against the config file's directory.
//!
//! # Invariants
//! - A missing file yields `AppConfig::default()`; a malformed one is an error.
//! - Unknown keys are ignored so older binaries can read newer files.

use crate::logging::default_log_level;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "classbook.json";
pub const DEFAULT_DATA_FILE: &str = "data/classbook.sqlite3";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Malformed { path: PathBuf, source: serde_json::Error },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access config `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "malformed config `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    /// `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: Some(PathBuf::from(DEFAULT_LOG_DIR)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&raw).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Writes pretty-printed JSON, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, json).map_err(io_err)
    }

    /// Absolute log directory, relative entries resolved against `base`.
    pub fn resolve_log_dir(&self, base: &Path) -> Option<PathBuf> {
        self.log_dir.as_deref().map(|dir| resolve(base, dir))
    }

    pub fn resolve_data_file(&self, base: &Path) -> PathBuf {
        resolve(base, &self.data_file)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classbook.json");
        std::fs::write(&path, r#"{"log_level":"warn","unknown":1}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classbook.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Malformed { .. })
        ));
    }

    #[test]
    fn relative_paths_resolve_against_base() {
        let config = AppConfig::default();
        let base = Path::new("/srv/classbook");
        assert_eq!(
            config.resolve_data_file(base),
            PathBuf::from("/srv/classbook/data/classbook.sqlite3")
        );
        assert_eq!(
            config.resolve_log_dir(base),
            Some(PathBuf::from("/srv/classbook/logs"))
        );
    }
}
