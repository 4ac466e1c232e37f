//! Configuration type definitions.
//!
//! # Example Configuration
//!
//! ```toml
//! [focus]
//! experimental_menu_click = false
//! decoy_app = "Finder"
//!
//! [host]
//! app_name = "Sublime Text"
//! legacy_app_name = "Sublime Text 2"
//! legacy_build_threshold = 3000
//! project_extension = ".sublime-project"
//! ```

use serde::{Deserialize, Serialize};

/// Configuration loaded from the TOML config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GotoWindowConfig {
    /// Activation behaviour
    #[serde(default)]
    pub focus: FocusConfig,

    /// Facts about the host application
    #[serde(default)]
    pub host: HostConfig,
}

/// Activation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Click the target's entry in the host's "Window" menu instead of the
    /// decoy activation. macOS only; needs UI scripting permission.
    #[serde(default)]
    pub experimental_menu_click: bool,

    /// Application activated briefly before the host on macOS 10.x.
    #[serde(default = "super::defaults::default_decoy_app")]
    pub decoy_app: String,
}

/// Host application identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Application name as the OS knows it (process name and window title suffix).
    #[serde(default = "super::defaults::default_app_name")]
    pub app_name: String,

    /// Application name used by builds older than `legacy_build_threshold`.
    #[serde(default = "super::defaults::default_legacy_app_name")]
    pub legacy_app_name: String,

    #[serde(default = "super::defaults::default_legacy_build_threshold")]
    pub legacy_build_threshold: u32,

    /// Extension stripped from project file paths when naming a window.
    #[serde(default = "super::defaults::default_project_extension")]
    pub project_extension: String,
}

impl HostConfig {
    /// Application name for the given host build number.
    pub fn app_name_for_build(&self, build: u32) -> &str {
        if build < self.legacy_build_threshold {
            &self.legacy_app_name
        } else {
            &self.app_name
        }
    }
}
