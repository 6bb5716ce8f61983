//! Plugin registry types

use serde::{Deserialize, Serialize};

/// A plugin descriptor known to the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginPackage {
    pub name: String,
    pub description: String,
    pub homepage: Option<String>,
    pub licenses: Vec<String>,
    /// Which namespaces of the generated stylesheet this plugin contributes to.
    pub provides: Vec<Contribution>,
    pub source: PluginSource,
    /// Options applied when the document does not parameterize the entry.
    pub default_options: Option<toml::Value>,
}

/// What a plugin adds to the generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contribution {
    Utilities,
    Components,
    Variants,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PluginSource {
    Npm {
        package: String,
        version: Option<String>,
    },
    GithubRelease {
        repo: String,
        tag: Option<String>,
    },
    /// Ships with the generator itself; nothing to fetch.
    Builtin,
}
