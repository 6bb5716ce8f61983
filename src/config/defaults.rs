//! Built-in plugin descriptors
//!
//! First-party plugins every install can reference without a registry entry

use crate::config::registry::{Contribution, PluginPackage, PluginSource};
use std::collections::HashMap;

pub fn get_default_plugins() -> HashMap<String, PluginPackage> {
    let mut plugins = HashMap::new();

    plugins.insert("typography".to_string(), typography_plugin());
    plugins.insert("forms".to_string(), forms_plugin());
    plugins.insert("aspect-ratio".to_string(), aspect_ratio_plugin());

    plugins
}

fn typography_plugin() -> PluginPackage {
    PluginPackage {
        name: "typography".to_string(),
        description: "Prose classes for styling blocks of user-generated HTML".to_string(),
        homepage: Some("https://github.com/utilicss/typography".to_string()),
        licenses: vec!["MIT".to_string()],
        provides: vec![Contribution::Components],
        source: PluginSource::Builtin,
        default_options: None,
    }
}

fn forms_plugin() -> PluginPackage {
    PluginPackage {
        name: "forms".to_string(),
        description: "Form-control reset layer that makes inputs stylable with utilities"
            .to_string(),
        homepage: Some("https://github.com/utilicss/forms".to_string()),
        licenses: vec!["MIT".to_string()],
        provides: vec![Contribution::Utilities, Contribution::Components],
        source: PluginSource::Builtin,
        default_options: None,
    }
}

fn aspect_ratio_plugin() -> PluginPackage {
    PluginPackage {
        name: "aspect-ratio".to_string(),
        description: "Composable aspect-ratio utilities for embedded media".to_string(),
        homepage: Some("https://github.com/utilicss/aspect-ratio".to_string()),
        licenses: vec!["MIT".to_string()],
        provides: vec![Contribution::Utilities],
        source: PluginSource::Builtin,
        default_options: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_default_plugins() {
        let plugins = get_default_plugins();
        assert!(plugins.contains_key("typography"));
        assert!(plugins.contains_key("forms"));
        assert!(plugins.contains_key("aspect-ratio"));
    }

    #[test]
    fn test_forms_plugin() {
        let plugin = forms_plugin();
        assert_eq!(plugin.name, "forms");
        assert!(plugin.provides.contains(&Contribution::Utilities));
    }
}
