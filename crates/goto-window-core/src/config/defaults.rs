//! Default values for configuration types.
//!
//! The free functions are used by serde `#[serde(default = "...")]` attributes.

use crate::config::types::{FocusConfig, HostConfig};

pub fn default_decoy_app() -> String {
    "Finder".to_string()
}

pub fn default_app_name() -> String {
    "Sublime Text".to_string()
}

pub fn default_legacy_app_name() -> String {
    "Sublime Text 2".to_string()
}

/// First build of the host that ships under the current application name.
pub fn default_legacy_build_threshold() -> u32 {
    3000
}

pub fn default_project_extension() -> String {
    ".sublime-project".to_string()
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            experimental_menu_click: false,
            decoy_app: default_decoy_app(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            legacy_app_name: default_legacy_app_name(),
            legacy_build_threshold: default_legacy_build_threshold(),
            project_extension: default_project_extension(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::GotoWindowConfig;

    #[test]
    fn test_default_config() {
        let config = GotoWindowConfig::default();
        assert!(!config.focus.experimental_menu_click);
        assert_eq!(config.focus.decoy_app, "Finder");
        assert_eq!(config.host.app_name, "Sublime Text");
        assert_eq!(config.host.legacy_app_name, "Sublime Text 2");
        assert_eq!(config.host.legacy_build_threshold, 3000);
        assert_eq!(config.host.project_extension, ".sublime-project");
    }

    #[test]
    fn test_empty_file_matches_default() {
        let config: GotoWindowConfig = toml::from_str("").unwrap();
        assert_eq!(config, GotoWindowConfig::default());
    }
}
