//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::entities::DEFAULT_MAX_TAGS;

const APP_NAME: &str = "mot-creators";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "motcreators";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Catalog file to load instead of the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Discover view configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Submission form configuration.
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Notification settings.
    #[serde(default)]
    pub notifications: NotificationsConfig,
}

/// Discover view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tag chips offered under the search bar.
    #[serde(default = "default_popular_tags")]
    pub popular_tags: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            popular_tags: default_popular_tags(),
        }
    }
}

/// Submission form configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Maximum number of tags per design.
    #[serde(default = "default_max_tags")]
    pub max_tags: usize,

    /// Tags suggested while typing.
    #[serde(default = "default_suggested_tags")]
    pub suggested_tags: Vec<String>,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            max_tags: default_max_tags(),
            suggested_tags: default_suggested_tags(),
        }
    }
}

/// Notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Show confirmations such as "Design Submitted!".
    #[serde(default = "default_true")]
    pub push_enabled: bool,

    /// Email updates about sales and payouts.
    #[serde(default = "default_true")]
    pub email_enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            push_enabled: true,
            email_enabled: true,
        }
    }
}

fn default_popular_tags() -> Vec<String> {
    [
        "abstract",
        "minimal",
        "retro",
        "nature",
        "geometric",
        "vintage",
        "space",
    ]
    .map(String::from)
    .to_vec()
}

fn default_suggested_tags() -> Vec<String> {
    [
        "abstract",
        "geometric",
        "minimal",
        "colorful",
        "typography",
        "vintage",
        "nature",
        "pop art",
    ]
    .map(String::from)
    .to_vec()
}

const fn default_max_tags() -> usize {
    DEFAULT_MAX_TAGS
}

const fn default_true() -> bool {
    true
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(catalog) = &args.catalog {
            self.catalog = Some(catalog.clone());
        }
        if let Some(max_tags) = args.max_tags {
            self.submission.max_tags = max_tags;
        }
        if let Some(push_enabled) = args.push_notifications {
            self.notifications.push_enabled = push_enabled;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("mot-creators.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            catalog: None,
            search: SearchConfig::default(),
            submission: SubmissionConfig::default(),
            notifications: NotificationsConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"
            catalog = "/srv/catalog.toml"

            [submission]
            max_tags = 3

            [notifications]
            email_enabled = false
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.catalog, Some(PathBuf::from("/srv/catalog.toml")));
        assert_eq!(config.submission.max_tags, 3);
        assert_eq!(config.submission.suggested_tags.len(), 8);
        assert!(config.notifications.push_enabled);
        assert!(!config.notifications.email_enabled);
        assert_eq!(config.search.popular_tags, default_popular_tags());
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.submission.max_tags, DEFAULT_MAX_TAGS);
        assert!(config.catalog.is_none());
        assert!(config.notifications.push_enabled);
        assert_eq!(config.search.popular_tags.len(), 7);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "mot-creators",
            "--log-level",
            "warn",
            "--max-tags",
            "2",
            "--catalog",
            "designs.json",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.submission.max_tags, 2);
        assert_eq!(config.catalog, Some(PathBuf::from("designs.json")));
        assert!(config.notifications.push_enabled);
    }
}
