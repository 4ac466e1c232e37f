//! Detached process launches.
//!
//! Activation helpers (`osascript`, `wmctrl`) are started at most once, never
//! retried, and never waited on by the caller. The only failure reported back
//! is the program being absent; exit status and output are discarded.

use std::cell::RefCell;
use std::collections::HashSet;
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::focus::errors::FocusError;

/// A program invocation, as launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchRequest {
    pub program: String,
    pub args: Vec<String>,
}

impl LaunchRequest {
    pub fn new<S: Into<String>>(program: &str, args: impl IntoIterator<Item = S>) -> Self {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

pub trait ProcessLauncher {
    /// Start `request` without waiting for it.
    ///
    /// Returns [`FocusError::MissingExternalTool`] when the program is not installed.
    fn launch_detached(&self, request: &LaunchRequest) -> Result<(), FocusError>;
}

/// Launches real processes with stdio detached.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn launch_detached(&self, request: &LaunchRequest) -> Result<(), FocusError> {
        let program = request.program.as_str();

        match which::which(program) {
            Ok(path) => {
                debug!(
                    event = "core.focus.launch_resolved",
                    program = program,
                    path = %path.display()
                );
            }
            Err(which::Error::CannotFindBinaryPath) => {
                warn!(event = "core.focus.launch_tool_missing", program = program);
                return Err(FocusError::MissingExternalTool {
                    tool: program.to_string(),
                });
            }
            Err(e) => {
                debug!(
                    event = "core.focus.launch_resolve_failed",
                    program = program,
                    error = %e
                );
            }
        }

        let mut child = Command::new(program)
            .args(&request.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => FocusError::MissingExternalTool {
                    tool: program.to_string(),
                },
                _ => FocusError::LaunchFailed {
                    program: program.to_string(),
                    message: e.to_string(),
                },
            })?;

        let pid = child.id();
        info!(event = "core.focus.launch_completed", program = program, pid = pid);

        // Reap the child so it does not linger as a zombie; the status is only logged.
        let reaper = std::thread::Builder::new()
            .name("goto-window-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) => debug!(event = "core.focus.launch_exited", pid = pid, status = %status),
                Err(e) => debug!(event = "core.focus.launch_wait_failed", pid = pid, error = %e),
            });
        if let Err(e) = reaper {
            debug!(event = "core.focus.reaper_spawn_failed", pid = pid, error = %e);
        }

        Ok(())
    }
}

/// Records launches instead of running them. Used for dry runs and tests.
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    launched: RefCell<Vec<LaunchRequest>>,
    missing: HashSet<String>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat `program` as not installed.
    pub fn with_missing(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    pub fn launched(&self) -> Vec<LaunchRequest> {
        self.launched.borrow().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn launch_detached(&self, request: &LaunchRequest) -> Result<(), FocusError> {
        if self.missing.contains(&request.program) {
            return Err(FocusError::MissingExternalTool {
                tool: request.program.clone(),
            });
        }
        self.launched.borrow_mut().push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_launcher_missing_binary() {
        let request = LaunchRequest::new("goto-window-no-such-tool-12345", ["-a", "x"]);
        let err = SystemLauncher.launch_detached(&request).unwrap_err();
        assert!(matches!(err, FocusError::MissingExternalTool { ref tool } if tool == "goto-window-no-such-tool-12345"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_launcher_does_not_wait_for_exit_status() {
        let request = LaunchRequest::new("sh", ["-c", "exit 3"]);
        assert!(SystemLauncher.launch_detached(&request).is_ok());
    }

    #[test]
    fn test_recording_launcher_records_in_order() {
        let launcher = RecordingLauncher::new();
        launcher
            .launch_detached(&LaunchRequest::new("wmctrl", ["-a", "one"]))
            .unwrap();
        launcher
            .launch_detached(&LaunchRequest::new("osascript", ["-e", "two"]))
            .unwrap();
        let programs: Vec<String> = launcher.launched().into_iter().map(|r| r.program).collect();
        assert_eq!(programs, vec!["wmctrl", "osascript"]);
    }

    #[test]
    fn test_recording_launcher_missing_tool() {
        let launcher = RecordingLauncher::new().with_missing("wmctrl");
        let err = launcher
            .launch_detached(&LaunchRequest::new("wmctrl", ["-a", "x"]))
            .unwrap_err();
        assert!(matches!(err, FocusError::MissingExternalTool { .. }));
        assert!(launcher.launched().is_empty());
    }
}
