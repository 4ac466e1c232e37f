use crate::errors::GotoWindowError;

#[derive(Debug, thiserror::Error)]
pub enum FocusError {
    #[error(
        "`{tool}` is required by goto-window but was not found on your system. Please install it and try again."
    )]
    MissingExternalTool { tool: String },

    #[error("Failed to launch '{program}': {message}")]
    LaunchFailed { program: String, message: String },

    #[error("Native window operation failed: {message}")]
    NativeWindowError { message: String },

    #[error("Native window operations are not supported on this platform")]
    NativeUnsupported,

    #[error("Cannot derive a title for window {window_id}: no project or folder")]
    UnresolvableWindowTitle { window_id: u64 },
}

impl GotoWindowError for FocusError {
    fn error_code(&self) -> &'static str {
        match self {
            FocusError::MissingExternalTool { .. } => "MISSING_EXTERNAL_TOOL",
            FocusError::LaunchFailed { .. } => "LAUNCH_FAILED",
            FocusError::NativeWindowError { .. } => "NATIVE_WINDOW_ERROR",
            FocusError::NativeUnsupported => "NATIVE_UNSUPPORTED",
            FocusError::UnresolvableWindowTitle { .. } => "UNRESOLVABLE_WINDOW_TITLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, FocusError::MissingExternalTool { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_external_tool_message() {
        let error = FocusError::MissingExternalTool {
            tool: "wmctrl".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "`wmctrl` is required by goto-window but was not found on your system. Please install it and try again."
        );
        assert_eq!(error.error_code(), "MISSING_EXTERNAL_TOOL");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_launch_failed_is_not_user_error() {
        let error = FocusError::LaunchFailed {
            program: "osascript".to_string(),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to launch 'osascript': permission denied"
        );
        assert!(!error.is_user_error());
    }
}
