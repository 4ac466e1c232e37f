//! Configuration loading and validation.

use crate::config::types::GotoWindowConfig;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming a config file to use instead of the user config.
pub const CONFIG_ENV_VAR: &str = "GOTO_WINDOW_CONFIG";

/// Load the configuration for this invocation.
///
/// Uses `$GOTO_WINDOW_CONFIG` when set, otherwise `~/.goto-window/config.toml`.
/// A missing file yields the defaults; unreadable or malformed files are errors.
pub fn load() -> Result<GotoWindowConfig, ConfigError> {
    match config_path() {
        Some(path) => load_from_path(&path),
        None => {
            debug!(
                event = "core.config.load_skipped",
                reason = "home directory not found"
            );
            Ok(GotoWindowConfig::default())
        }
    }
}

/// Resolve the config file path for this process.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".goto-window").join("config.toml"))
}

/// Load and validate a configuration file, falling back to defaults if it does not exist.
pub fn load_from_path(path: &Path) -> Result<GotoWindowConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                event = "core.config.file_not_found",
                path = %path.display()
            );
            return Ok(GotoWindowConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::ReadFailed {
                path: path.display().to_string(),
                source,
            });
        }
    };

    let config: GotoWindowConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    validate_config(&config)?;

    info!(
        event = "core.config.load_completed",
        path = %path.display(),
        experimental_menu_click = config.focus.experimental_menu_click
    );

    Ok(config)
}

/// Reject values that would produce unusable scripts or window titles.
pub fn validate_config(config: &GotoWindowConfig) -> Result<(), ConfigError> {
    let required = [
        ("host.app_name", &config.host.app_name),
        ("host.legacy_app_name", &config.host.legacy_app_name),
        ("focus.decoy_app", &config.focus.decoy_app),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must not be empty", key),
            });
        }
    }

    let extension = &config.host.project_extension;
    if !extension.is_empty() && !extension.starts_with('.') {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "host.project_extension must start with '.', got '{}'",
                extension
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GotoWindowConfig::default());
    }

    #[test]
    fn test_load_experimental_flag() {
        let file = write_config("[focus]\nexperimental_menu_click = true\n");
        let config = load_from_path(file.path()).unwrap();
        assert!(config.focus.experimental_menu_click);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let file = write_config("[focus\nexperimental_menu_click = ");
        let err = load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_wrong_type_is_parse_error() {
        let file = write_config("[focus]\nexperimental_menu_click = \"yes\"\n");
        let err = load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
    }

    #[test]
    fn test_validate_rejects_empty_app_name() {
        let file = write_config("[host]\napp_name = \"  \"\n");
        let err = load_from_path(file.path()).unwrap_err();
        assert!(err.to_string().contains("host.app_name"));
    }

    #[test]
    fn test_validate_rejects_extension_without_dot() {
        let mut config = GotoWindowConfig::default();
        config.host.project_extension = "sublime-project".to_string();
        assert!(validate_config(&config).is_err());

        config.host.project_extension = String::new();
        assert!(validate_config(&config).is_ok());
    }
}
