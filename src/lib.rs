//! utilicss-config - Configuration front-end for the utilicss generator
//!
//! This crate loads the declarative build configuration of a utilicss
//! project (content glob patterns, dark-mode strategy, theme extensions,
//! plugin list), validates it against the plugin registry, and hands the
//! resulting immutable document to the CSS generation engine.

pub mod config;
pub mod types;

pub use config::{lint, ConfigDocument, ConfigLoader, DarkModeStrategy, LintWarning, PluginRef, Theme};
pub use types::ConfigError;
