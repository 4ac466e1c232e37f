use crate::host::types::{Document, NativeHandle, PaneId, WindowId};
use crate::platform::PlatformFamily;
use std::collections::HashMap;
use std::path::PathBuf;

/// One top-level host window.
///
/// Capabilities the host may lack are `Option`s; callers resolve them by
/// precedence rather than probing the host at runtime.
pub trait HostWindow {
    fn id(&self) -> WindowId;

    /// Project/workspace file associated with the window.
    fn project_file(&self) -> Option<PathBuf>;

    /// Folders bound to the window, in host order.
    fn folders(&self) -> Vec<PathBuf>;

    fn active_document(&self) -> Option<Document>;

    fn active_pane(&self) -> Option<PaneId>;

    /// Title-bar variables such as `project_base_name` and `folder`.
    fn display_variables(&self) -> HashMap<String, String>;

    fn focus_document(&self, document: &Document);

    fn focus_pane(&self, pane: PaneId);

    fn run_command(&self, command: &str);

    fn native_handle(&self) -> Option<NativeHandle>;
}

/// Process-wide host surface.
pub trait Host {
    type Window: HostWindow;

    /// All open windows in the host's own order.
    fn windows(&self) -> Vec<Self::Window>;

    fn active_window(&self) -> Option<WindowId>;

    /// Host build number.
    fn version(&self) -> u32;

    fn platform(&self) -> PlatformFamily;

    /// Show a blocking modal message to the user.
    fn error_message(&self, message: &str);
}
