use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Host command that moves focus to the neighbouring pane group.
pub const FOCUS_NEIGHBORING_GROUP: &str = "focus_neighboring_group";

/// Display variable holding the project file name without extension.
pub const VAR_PROJECT_BASE_NAME: &str = "project_base_name";
/// Display variable holding the first folder bound to the window.
pub const VAR_FOLDER: &str = "folder";
/// Display variable holding the active document's file name.
pub const VAR_FILE_NAME: &str = "file_name";

/// Host-assigned identity of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(pub u64);

/// Index of a pane group inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(pub u32);

/// Native OS window handle (HWND on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NativeHandle(pub isize);

/// The document shown in a window's focused view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    /// Path on disk; `None` for unsaved buffers.
    #[serde(default)]
    pub file_path: Option<PathBuf>,
    /// In-memory name shown on the tab (may be empty).
    #[serde(default)]
    pub name: String,
}

impl Document {
    pub fn saved(id: u64, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            file_path: Some(path.into()),
            name: String::new(),
        }
    }

    pub fn unsaved(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            file_path: None,
            name: name.into(),
        }
    }

    /// Name as it appears in the host's title bar: file name if saved, else the tab name.
    pub fn title(&self) -> Option<String> {
        self.file_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .or_else(|| (!self.name.is_empty()).then(|| self.name.clone()))
    }
}

/// A side effect requested from the host, recorded for replay by bridges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HostAction {
    FocusDocument { window: WindowId, document: u64 },
    FocusPane { window: WindowId, pane: PaneId },
    RunCommand { window: WindowId, command: String },
    ErrorMessage { message: String },
}
