//! Configuration loader with eager validation
//!
//! Resolves the declaration file, parses it, and validates every field
//! against the plugin registry before the generator sees it. Plugin
//! descriptors come from two sources (highest to lowest priority):
//! 1. Built-in defaults (hardcoded first-party plugins)
//! 2. Embedded registry (TOML descriptors compiled into the binary)

use crate::config::document::{ConfigDocument, DarkModeStrategy, RawDocument};
use crate::config::{get_default_plugins, PluginPackage};
use crate::types::ConfigError;
use glob::Pattern;
use include_dir::{include_dir, Dir};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

// Embed the registry directory at compile time
static REGISTRY_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/registry");

pub struct ConfigLoader {
    defaults: HashMap<String, PluginPackage>,
    registry: HashMap<String, PluginPackage>,
}

impl ConfigLoader {
    pub fn new() -> Result<Self, ConfigError> {
        let defaults = get_default_plugins();
        info!("Loaded {} built-in plugin descriptors", defaults.len());

        let registry = Self::load_registry()?;
        info!("Loaded {} plugin descriptors from registry", registry.len());

        Ok(Self { defaults, registry })
    }

    fn load_registry() -> Result<HashMap<String, PluginPackage>, ConfigError> {
        let mut registry = HashMap::new();

        // Iterate through all embedded .toml files
        for file in REGISTRY_DIR.files() {
            if let Some(file_name) = file.path().file_name() {
                let file_name_str = file_name.to_string_lossy();

                if file_name_str.ends_with(".toml") {
                    let content = file.contents_utf8().ok_or_else(|| {
                        ConfigError::InvalidConfig(format!("Invalid UTF-8 in {}", file_name_str))
                    })?;

                    match toml::from_str::<PluginPackage>(content) {
                        Ok(package) => {
                            if let Some(homepage) = &package.homepage {
                                if Url::parse(homepage).is_err() {
                                    warn!(
                                        "Skipping registry entry {}: bad homepage URL '{}'",
                                        package.name, homepage
                                    );
                                    continue;
                                }
                            }

                            debug!("Loaded registry entry: {}", package.name);
                            registry.insert(package.name.clone(), package);
                        }
                        Err(e) => {
                            warn!("Failed to parse registry file {}: {}", file_name_str, e);
                        }
                    }
                }
            }
        }

        Ok(registry)
    }

    /// Locate the declaration file.
    ///
    /// Tries, in priority order:
    /// 1. ./utilicss.toml (project-local)
    /// 2. $UTILICSS_CONFIG (environment variable)
    /// 3. <config dir>/utilicss/config.toml (user-global)
    fn find_config_file() -> Result<PathBuf, ConfigError> {
        let mut candidates = Vec::new();

        // Project-local config
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join("utilicss.toml"));
        }

        // Environment variable
        if let Ok(config_path) = std::env::var("UTILICSS_CONFIG") {
            candidates.push(PathBuf::from(config_path));
        }

        // User-global config
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("utilicss").join("config.toml"));
        }

        for path in &candidates {
            if path.exists() {
                debug!("Resolved configuration file: {}", path.display());
                return Ok(path.clone());
            }
        }

        let tried = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ConfigError::NotFound(tried))
    }

    /// Load the configuration from the well-known locations.
    pub fn load(&self) -> Result<ConfigDocument, ConfigError> {
        let path = Self::find_config_file()?;
        self.load_from_path(&path)
    }

    /// Load the configuration from an explicit path.
    pub fn load_from_path(&self, path: &Path) -> Result<ConfigDocument, ConfigError> {
        debug!("Loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(path)?;
        self.load_from_str(&content)
    }

    /// Parse and validate a declaration given as text.
    pub fn load_from_str(&self, text: &str) -> Result<ConfigDocument, ConfigError> {
        let raw = RawDocument::parse(text)?;
        self.validate(raw)
    }

    fn validate(&self, raw: RawDocument) -> Result<ConfigDocument, ConfigError> {
        // Every content entry must be a syntactically valid glob
        for pattern in &raw.content {
            Pattern::new(pattern).map_err(|e| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                reason: e.to_string(),
            })?;
        }

        let dark_mode = match raw.dark_mode.as_deref() {
            Some(value) => value.parse()?,
            None => DarkModeStrategy::default(),
        };

        // Every plugin reference must resolve in the registry, but the
        // list itself is handed over in the order it was written
        for plugin in &raw.plugins {
            if self.resolve_plugin(plugin.name()).is_none() {
                return Err(ConfigError::UnknownPlugin(plugin.name().to_string()));
            }
            debug!("Resolved plugin reference: {}", plugin.name());
        }

        Ok(ConfigDocument {
            content: raw.content,
            dark_mode,
            plugins: raw.plugins,
            theme: raw.theme,
        })
    }

    fn resolve_plugin(&self, name: &str) -> Option<&PluginPackage> {
        self.defaults.get(name).or_else(|| self.registry.get(name))
    }

    /// Get a plugin descriptor by exact name.
    pub fn plugin_by_name(&self, name: &str) -> Result<&PluginPackage, ConfigError> {
        self.resolve_plugin(name)
            .ok_or_else(|| ConfigError::UnknownPlugin(name.to_string()))
    }

    /// List all available plugins.
    pub fn list_available_plugins(&self) -> Vec<&PluginPackage> {
        let mut plugins: Vec<&PluginPackage> = Vec::new();

        // Collect from all sources (defaults take priority for duplicates)
        let mut seen = std::collections::HashSet::new();

        for pkg in self.defaults.values() {
            if seen.insert(&pkg.name) {
                plugins.push(pkg);
            }
        }

        for pkg in self.registry.values() {
            if seen.insert(&pkg.name) {
                plugins.push(pkg);
            }
        }

        plugins
    }
}
