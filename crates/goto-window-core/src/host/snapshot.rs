//! A [`Host`] backed by a serialized description of the host's windows.
//!
//! Host bridges dump their window state as JSON, hand it to this crate, and
//! replay the recorded [`HostAction`]s afterwards. Focus calls and messages
//! never touch a real host here; they are appended to an action log.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::host::errors::HostError;
use crate::host::traits::{Host, HostWindow};
use crate::host::types::{
    Document, HostAction, NativeHandle, PaneId, VAR_FILE_NAME, VAR_FOLDER, VAR_PROJECT_BASE_NAME,
    WindowId,
};
use crate::platform::PlatformFamily;

/// Serialized host state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSnapshot {
    /// Host build number.
    pub version: u32,
    pub platform: PlatformFamily,
    #[serde(default)]
    pub active_window: Option<WindowId>,
    #[serde(default)]
    pub windows: Vec<WindowSnapshot>,
}

/// Serialized state of a single window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    #[serde(default)]
    pub project_file: Option<PathBuf>,
    #[serde(default)]
    pub folders: Vec<PathBuf>,
    #[serde(default)]
    pub active_document: Option<Document>,
    #[serde(default)]
    pub active_pane: Option<PaneId>,
    /// Explicit display variables; missing keys are derived from the other fields.
    #[serde(default)]
    pub variables: HashMap<String, String>,
    #[serde(default)]
    pub native_handle: Option<NativeHandle>,
}

impl WindowSnapshot {
    pub fn new(id: u64) -> Self {
        Self {
            id: WindowId(id),
            project_file: None,
            folders: Vec::new(),
            active_document: None,
            active_pane: None,
            variables: HashMap::new(),
            native_handle: None,
        }
    }

    pub fn with_project(mut self, path: impl Into<PathBuf>) -> Self {
        self.project_file = Some(path.into());
        self
    }

    pub fn with_folders<P: Into<PathBuf>>(mut self, folders: impl IntoIterator<Item = P>) -> Self {
        self.folders = folders.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_document(mut self, document: Document) -> Self {
        self.active_document = Some(document);
        self
    }

    pub fn with_pane(mut self, pane: u32) -> Self {
        self.active_pane = Some(PaneId(pane));
        self
    }

    pub fn with_variable(mut self, key: &str, value: &str) -> Self {
        self.variables.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_native_handle(mut self, handle: isize) -> Self {
        self.native_handle = Some(NativeHandle(handle));
        self
    }
}

impl HostSnapshot {
    pub fn new(version: u32, platform: PlatformFamily) -> Self {
        Self {
            version,
            platform,
            active_window: None,
            windows: Vec::new(),
        }
    }

    pub fn with_window(mut self, window: WindowSnapshot) -> Self {
        self.windows.push(window);
        self
    }

    pub fn with_active(mut self, id: u64) -> Self {
        self.active_window = Some(WindowId(id));
        self
    }

    /// Parse a snapshot from JSON, rejecting duplicate window ids.
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        let snapshot: HostSnapshot =
            serde_json::from_str(json).map_err(|e| HostError::SnapshotParse {
                message: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        for window in &snapshot.windows {
            if !seen.insert(window.id) {
                return Err(HostError::DuplicateWindow { id: window.id.0 });
            }
        }

        Ok(snapshot)
    }

    pub fn from_file(path: &Path) -> Result<Self, HostError> {
        let content = std::fs::read_to_string(path).map_err(|source| HostError::SnapshotRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }
}

/// [`Host`] implementation over a [`HostSnapshot`], recording every side effect.
#[derive(Debug, Clone)]
pub struct SnapshotHost {
    snapshot: HostSnapshot,
    actions: Rc<RefCell<Vec<HostAction>>>,
}

impl SnapshotHost {
    pub fn new(snapshot: HostSnapshot) -> Self {
        Self {
            snapshot,
            actions: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Actions requested so far, in order.
    pub fn actions(&self) -> Vec<HostAction> {
        self.actions.borrow().clone()
    }

    /// Drop a window, as if the user closed it.
    pub fn close_window(&mut self, id: u64) {
        self.snapshot.windows.retain(|w| w.id != WindowId(id));
        if self.snapshot.active_window == Some(WindowId(id)) {
            self.snapshot.active_window = None;
        }
    }

    fn record(&self, action: HostAction) {
        debug!(event = "core.host.action_recorded", action = ?action);
        self.actions.borrow_mut().push(action);
    }
}

impl Host for SnapshotHost {
    type Window = SnapshotWindow;

    fn windows(&self) -> Vec<SnapshotWindow> {
        self.snapshot
            .windows
            .iter()
            .map(|state| SnapshotWindow {
                state: state.clone(),
                actions: Rc::clone(&self.actions),
            })
            .collect()
    }

    fn active_window(&self) -> Option<WindowId> {
        self.snapshot.active_window
    }

    fn version(&self) -> u32 {
        self.snapshot.version
    }

    fn platform(&self) -> PlatformFamily {
        self.snapshot.platform
    }

    fn error_message(&self, message: &str) {
        self.record(HostAction::ErrorMessage {
            message: message.to_string(),
        });
    }
}

/// A window handed out by [`SnapshotHost`].
#[derive(Debug, Clone)]
pub struct SnapshotWindow {
    state: WindowSnapshot,
    actions: Rc<RefCell<Vec<HostAction>>>,
}

impl SnapshotWindow {
    fn record(&self, action: HostAction) {
        debug!(event = "core.host.action_recorded", action = ?action);
        self.actions.borrow_mut().push(action);
    }
}

impl HostWindow for SnapshotWindow {
    fn id(&self) -> WindowId {
        self.state.id
    }

    fn project_file(&self) -> Option<PathBuf> {
        self.state.project_file.clone()
    }

    fn folders(&self) -> Vec<PathBuf> {
        self.state.folders.clone()
    }

    fn active_document(&self) -> Option<Document> {
        self.state.active_document.clone()
    }

    fn active_pane(&self) -> Option<PaneId> {
        self.state.active_pane
    }

    fn display_variables(&self) -> HashMap<String, String> {
        let mut variables = HashMap::new();

        if let Some(stem) = self.state.project_file.as_deref().and_then(Path::file_stem) {
            variables.insert(
                VAR_PROJECT_BASE_NAME.to_string(),
                stem.to_string_lossy().into_owned(),
            );
        }
        if let Some(folder) = self.state.folders.first() {
            variables.insert(VAR_FOLDER.to_string(), folder.display().to_string());
        }
        if let Some(name) = self
            .state
            .active_document
            .as_ref()
            .and_then(|d| d.file_path.as_deref())
            .and_then(Path::file_name)
        {
            variables.insert(VAR_FILE_NAME.to_string(), name.to_string_lossy().into_owned());
        }

        variables.extend(self.state.variables.clone());
        variables
    }

    fn focus_document(&self, document: &Document) {
        self.record(HostAction::FocusDocument {
            window: self.state.id,
            document: document.id,
        });
    }

    fn focus_pane(&self, pane: PaneId) {
        self.record(HostAction::FocusPane {
            window: self.state.id,
            pane,
        });
    }

    fn run_command(&self, command: &str) {
        self.record(HostAction::RunCommand {
            window: self.state.id,
            command: command.to_string(),
        });
    }

    fn native_handle(&self) -> Option<NativeHandle> {
        self.state.native_handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GotoWindowError;

    const SNAPSHOT_JSON: &str = r#"{
        "version": 4169,
        "platform": "linux",
        "active_window": 2,
        "windows": [
            {"id": 1, "project_file": "/home/u/work.sublime-project", "folders": ["/home/u/work"]},
            {"id": 2, "folders": ["/home/u/site"], "active_pane": 0,
             "active_document": {"id": 20, "file_path": "/home/u/site/index.html"}}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let snapshot = HostSnapshot::from_json(SNAPSHOT_JSON).unwrap();
        assert_eq!(snapshot.version, 4169);
        assert_eq!(snapshot.platform, PlatformFamily::Linux);
        assert_eq!(snapshot.active_window, Some(WindowId(2)));
        assert_eq!(snapshot.windows.len(), 2);
        assert_eq!(snapshot.windows[1].active_pane, Some(PaneId(0)));
    }

    #[test]
    fn test_from_json_rejects_duplicate_ids() {
        let json = r#"{"version": 4169, "platform": "osx", "windows": [{"id": 1}, {"id": 1}]}"#;
        let err = HostSnapshot::from_json(json).unwrap_err();
        assert!(matches!(err, HostError::DuplicateWindow { id: 1 }));
    }

    #[test]
    fn test_from_json_reports_malformed_input() {
        let err = HostSnapshot::from_json("{\"version\": ").unwrap_err();
        assert_eq!(err.error_code(), "HOST_SNAPSHOT_PARSE_ERROR");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = HostSnapshot::from_file(&dir.path().join("state.json")).unwrap_err();
        assert!(matches!(err, HostError::SnapshotRead { .. }));
    }

    #[test]
    fn test_display_variables_derived() {
        let host = SnapshotHost::new(HostSnapshot::from_json(SNAPSHOT_JSON).unwrap());
        let windows = host.windows();

        let vars = windows[0].display_variables();
        assert_eq!(vars.get(VAR_PROJECT_BASE_NAME).map(String::as_str), Some("work"));
        assert_eq!(vars.get(VAR_FOLDER).map(String::as_str), Some("/home/u/work"));

        let vars = windows[1].display_variables();
        assert!(!vars.contains_key(VAR_PROJECT_BASE_NAME));
        assert_eq!(vars.get(VAR_FILE_NAME).map(String::as_str), Some("index.html"));
    }

    #[test]
    fn test_explicit_variables_override_derived() {
        let window = WindowSnapshot::new(1)
            .with_project("/home/u/work.sublime-project")
            .with_variable(VAR_PROJECT_BASE_NAME, "custom");
        let host = SnapshotHost::new(HostSnapshot::new(4169, PlatformFamily::Linux).with_window(window));
        let vars = host.windows()[0].display_variables();
        assert_eq!(vars.get(VAR_PROJECT_BASE_NAME).map(String::as_str), Some("custom"));
    }

    #[test]
    fn test_actions_are_shared_between_windows_and_host() {
        let host = SnapshotHost::new(
            HostSnapshot::new(4169, PlatformFamily::Other)
                .with_window(WindowSnapshot::new(1).with_pane(0)),
        );
        let window = &host.windows()[0];
        window.focus_pane(PaneId(0));
        window.run_command("focus_neighboring_group");
        host.error_message("boom");

        assert_eq!(
            host.actions(),
            vec![
                HostAction::FocusPane { window: WindowId(1), pane: PaneId(0) },
                HostAction::RunCommand {
                    window: WindowId(1),
                    command: "focus_neighboring_group".to_string()
                },
                HostAction::ErrorMessage { message: "boom".to_string() },
            ]
        );
    }

    #[test]
    fn test_close_window_clears_active() {
        let mut host = SnapshotHost::new(
            HostSnapshot::new(4169, PlatformFamily::Other)
                .with_window(WindowSnapshot::new(1))
                .with_window(WindowSnapshot::new(2))
                .with_active(2),
        );
        host.close_window(2);
        assert_eq!(host.windows().len(), 1);
        assert_eq!(host.active_window(), None);
    }
}
