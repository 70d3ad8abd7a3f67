//! MOT Creators - design catalog core.
//!
//! Browsing, searching, tagging, liking and submitting designs for the MOT
//! Creators marketplace, layered into domain, application, infrastructure and
//! presentation modules.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing shared services and use cases.
pub mod application;
/// Domain layer containing entities, search, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and catalog adapters.
pub mod infrastructure;
/// Presentation layer containing the command shell.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "mot-creators";
