use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::AppConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory for this platform; pass --config")]
    ConfigDirNotFound,
    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not encode config: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The TOML file settings are read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Uses `path_override` when given, otherwise `config.toml` in the
    /// platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` when there is no override and
    /// the platform has no config directory.
    pub fn resolve(path_override: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path_override {
            Some(path) => path.to_path_buf(),
            None => AppConfig::default_config_dir()
                .ok_or(ConfigError::ConfigDirNotFound)?
                .join(CONFIG_FILE_NAME),
        };
        Ok(Self { path })
    }

    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the config. A missing file is created with defaults; a file
    /// that does not parse yields defaults and is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults
    /// cannot be written.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No config file, writing defaults");
                let config = AppConfig::default();
                self.save(&config)?;
                return Ok(config);
            }
            Err(e) => return Err(ConfigError::io(&self.path, e)),
        };

        toml::from_str::<AppConfig>(&content).or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Ignoring malformed config file");
            Ok(AppConfig::default())
        })
    }

    /// Writes the config through a temporary file in the same directory,
    /// so readers never see a partial file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if encoding or any file operation fails.
    pub fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(config)?;
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;

        let mut staged = NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
        staged
            .write_all(content.as_bytes())
            .map_err(|e| ConfigError::io(dir, e))?;
        staged
            .persist(&self.path)
            .map_err(|e| ConfigError::io(&self.path, e.error))?;

        debug!(path = %self.path.display(), "Config saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::at(dir.path().join("nested").join(CONFIG_FILE_NAME));

        let config = file.load().unwrap();
        assert_eq!(config.submission.max_tags, 5);
        assert!(file.path().exists());

        let reloaded = file.load().unwrap();
        assert_eq!(reloaded.search.popular_tags, config.search.popular_tags);
    }

    #[test]
    fn test_malformed_file_falls_back_and_is_kept() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::at(dir.path().join(CONFIG_FILE_NAME));
        std::fs::write(file.path(), "log_level = [not valid").unwrap();

        let config = file.load().unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(
            std::fs::read_to_string(file.path()).unwrap(),
            "log_level = [not valid"
        );
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::at(dir.path().join(CONFIG_FILE_NAME));
        let mut config = AppConfig::default();
        config.notifications.push_enabled = false;
        config.submission.max_tags = 3;

        file.save(&config).unwrap();
        let loaded = file.load().unwrap();

        assert!(!loaded.notifications.push_enabled);
        assert_eq!(loaded.submission.max_tags, 3);
    }

    #[test]
    fn test_resolve_prefers_override() {
        let dir = tempdir().unwrap();
        let custom = dir.path().join("custom.toml");
        std::fs::write(&custom, "log_level = \"trace\"\n").unwrap();

        let file = ConfigFile::resolve(Some(&custom)).unwrap();
        assert_eq!(file.path(), custom);
        assert_eq!(file.load().unwrap().log_level, LogLevel::Trace);
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempdir().unwrap();
        let file = ConfigFile::at(dir.path());

        assert!(matches!(file.load(), Err(ConfigError::Io { .. })));
    }
}
