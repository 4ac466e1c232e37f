//! # Configuration System
//!
//! TOML configuration for goto-window, re-read on every invocation so edits
//! take effect without restarting the host.
//!
//! ## Configuration Sources
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.goto-window/config.toml`
//! 3. **Override path** - `$GOTO_WINDOW_CONFIG`, used instead of the user config when set
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.goto-window/config.toml
//! [focus]
//! experimental_menu_click = true
//!
//! [host]
//! app_name = "Sublime Text"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use goto_window_core::config::GotoWindowConfig;
//!
//! fn example() -> Result<(), goto_window_core::errors::ConfigError> {
//!     let config = GotoWindowConfig::load()?;
//!     println!("{}", config.host.app_name);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use loading::{CONFIG_ENV_VAR, validate_config};
pub use types::{FocusConfig, GotoWindowConfig, HostConfig};

impl GotoWindowConfig {
    /// Load configuration from the user config file or `$GOTO_WINDOW_CONFIG`.
    ///
    /// See [`loading::load`] for details.
    pub fn load() -> Result<Self, crate::errors::ConfigError> {
        loading::load()
    }
}
