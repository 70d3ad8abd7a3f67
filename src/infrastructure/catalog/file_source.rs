//! Catalog source reading a TOML or JSON file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::errors::CatalogError;
use crate::domain::ports::{CatalogPort, CatalogSnapshot};

/// Supported catalog file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
}

impl CatalogFormat {
    /// Picks the format from the file extension.
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for anything but `.toml` and `.json`.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(Self::Toml),
            "json" => Ok(Self::Json),
            _ => Err(CatalogError::UnsupportedFormat { extension }),
        }
    }

    /// Decodes a catalog document.
    ///
    /// # Errors
    /// Returns `Malformed` if the document does not describe a catalog.
    pub fn parse(self, content: &str) -> Result<CatalogSnapshot, CatalogError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| CatalogError::malformed(e.to_string())),
            Self::Json => {
                serde_json::from_str(content).map_err(|e| CatalogError::malformed(e.to_string()))
            }
        }
    }
}

/// Catalog source backed by a file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogPort for FileCatalogSource {
    async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        let format = CatalogFormat::from_path(&self.path)?;

        let content = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::unavailable(format!("{}: {e}", self.path.display())))?;

        debug!(path = %self.path.display(), bytes = content.len(), ?format, "Read catalog file");

        format.parse(&content)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
