//! Catalog error types.

use thiserror::Error;

/// Catalog error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum CatalogError {
    #[error("duplicate design id in catalog: {id}")]
    DuplicateDesign { id: String },

    #[error("design not found: {id}")]
    DesignNotFound { id: String },

    #[error("invalid tag: {raw:?}")]
    InvalidTag { raw: String },

    #[error("failed to read catalog source: {message}")]
    SourceUnavailable { message: String },

    #[error("failed to parse catalog: {message}")]
    Malformed { message: String },

    #[error("unsupported catalog format: {extension}")]
    UnsupportedFormat { extension: String },
}

impl CatalogError {
    /// Creates duplicate design error.
    #[must_use]
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::DuplicateDesign { id: id.into() }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::DesignNotFound { id: id.into() }
    }

    /// Creates invalid tag error.
    #[must_use]
    pub fn invalid_tag(raw: impl Into<String>) -> Self {
        Self::InvalidTag { raw: raw.into() }
    }

    /// Creates source unavailable error.
    #[must_use]
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            message: message.into(),
        }
    }

    /// Creates malformed catalog error.
    #[must_use]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// Returns whether the error comes from loading rather than from a lookup.
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. } | Self::Malformed { .. } | Self::UnsupportedFormat { .. }
        )
    }
}
