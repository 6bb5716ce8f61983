//! Configuration document types
//!
//! The on-disk declaration is parsed into a raw shape first, then validated
//! eagerly into a `ConfigDocument` so that every configuration error
//! surfaces before the generator starts any scanning work.

use crate::types::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How dark-mode variants are triggered in the generated stylesheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkModeStrategy {
    /// Follow the OS/browser `prefers-color-scheme` signal.
    #[default]
    Media,
    /// Follow a `dark` class toggled on an ancestor element by script.
    Class,
}

impl FromStr for DarkModeStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "media" => Ok(Self::Media),
            "class" => Ok(Self::Class),
            other => Err(ConfigError::InvalidConfig(format!(
                "dark_mode must be 'media' or 'class', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for DarkModeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Media => write!(f, "media"),
            Self::Class => write!(f, "class"),
        }
    }
}

/// Theme customization layered on top of the generator's built-in tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Token-category overrides (color, spacing, ...). Empty means
    /// "defaults only"; an absent `theme` table parses to the same value.
    #[serde(default)]
    pub extend: BTreeMap<String, toml::Value>,
}

/// A reference to a plugin in the registry, optionally parameterized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PluginRef {
    /// Bare identifier, e.g. `"flowbite/plugin"`.
    Name(String),
    /// Identifier plus options forwarded to the plugin verbatim.
    Detailed {
        name: String,
        #[serde(default)]
        options: BTreeMap<String, toml::Value>,
    },
}

impl PluginRef {
    /// The registry identifier this entry refers to.
    pub fn name(&self) -> &str {
        match self {
            PluginRef::Name(name) => name,
            PluginRef::Detailed { name, .. } => name,
        }
    }
}

/// The validated configuration handed to the CSS generator.
///
/// Constructed once at startup and never mutated afterwards; the generator
/// shares it read-only across however many scanner workers it runs.
///
/// Field order matters for serialization: tables (`theme`) must come after
/// plain values or the TOML writer rejects the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigDocument {
    /// Glob patterns selecting the files scanned for class-name usage.
    pub content: Vec<String>,
    /// Dark-mode trigger strategy.
    pub dark_mode: DarkModeStrategy,
    /// Plugins to activate, in registration order.
    pub plugins: Vec<PluginRef>,
    /// Design-token overrides.
    pub theme: Theme,
}

impl ConfigDocument {
    /// Serialize back to the on-disk TOML shape.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize to the JSON handoff format read by the generator.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Raw on-disk shape, before validation.
///
/// Kept separate from `ConfigDocument` so validation errors can name the
/// offending value instead of surfacing as a serde path.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawDocument {
    #[serde(default)]
    pub(crate) content: Vec<String>,
    #[serde(default, alias = "darkMode")]
    pub(crate) dark_mode: Option<String>,
    #[serde(default)]
    pub(crate) theme: Theme,
    #[serde(default)]
    pub(crate) plugins: Vec<PluginRef>,
}

impl RawDocument {
    /// Parse the TOML text into the raw shape.
    ///
    /// A malformed document or unknown top-level key is an
    /// `InvalidConfig` error carrying the parser's message.
    pub(crate) fn parse(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::InvalidConfig(e.to_string()))
    }
}
