//! Lint-level checks for loaded configurations
//!
//! These flag documents that load cleanly but almost certainly do not do
//! what the author intended. They are advisory only and never fail a load.

use crate::config::ConfigDocument;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintWarning {
    /// An empty content list leaves the scanner with nothing to scan, so
    /// every utility is treated as unused and stripped from the output.
    EmptyContent,
    /// The same glob pattern is listed more than once.
    DuplicatePattern(String),
    /// The same plugin is registered more than once; the engine keeps the
    /// last registration, which is rarely what was meant.
    DuplicatePlugin(String),
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(
                f,
                "content is empty: no files will be scanned and all utilities will be stripped"
            ),
            Self::DuplicatePattern(pattern) => {
                write!(f, "content pattern '{}' is listed more than once", pattern)
            }
            Self::DuplicatePlugin(name) => {
                write!(f, "plugin '{}' is registered more than once", name)
            }
        }
    }
}

/// Check a loaded document for suspicious but valid configurations.
pub fn lint(document: &ConfigDocument) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if document.content.is_empty() {
        warnings.push(LintWarning::EmptyContent);
    }

    let mut seen_patterns = HashSet::new();
    for pattern in &document.content {
        if !seen_patterns.insert(pattern.as_str()) {
            warnings.push(LintWarning::DuplicatePattern(pattern.clone()));
        }
    }

    let mut seen_plugins = HashSet::new();
    for plugin in &document.plugins {
        if !seen_plugins.insert(plugin.name()) {
            warnings.push(LintWarning::DuplicatePlugin(plugin.name().to_string()));
        }
    }

    warnings
}
