//! Configuration system for the utilicss generator
//!
//! Loads the project's declarative build configuration, validates it
//! eagerly against the plugin registry, and hands the immutable document
//! to the CSS generation engine. Plugin descriptors resolve from two
//! sources: built-in defaults (highest priority) and the embedded registry.

mod defaults;
mod document;
mod lint;
mod loader;
mod registry;

pub use defaults::get_default_plugins;
pub use document::{ConfigDocument, DarkModeStrategy, PluginRef, Theme};
pub use lint::{lint, LintWarning};
pub use loader::ConfigLoader;
pub use registry::{Contribution, PluginPackage, PluginSource};
