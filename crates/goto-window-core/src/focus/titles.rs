//! Window titles as the OS sees them.

use std::collections::HashMap;
use std::path::Path;

use crate::host::{HostWindow, VAR_FOLDER, VAR_PROJECT_BASE_NAME};

/// Project part of the host's title bar: project base name, else folder basename.
pub fn project_title(variables: &HashMap<String, String>) -> Option<String> {
    if let Some(name) = variables.get(VAR_PROJECT_BASE_NAME) {
        return Some(name.clone());
    }
    variables
        .get(VAR_FOLDER)
        .and_then(|folder| Path::new(folder).file_name())
        .map(|n| n.to_string_lossy().into_owned())
}

/// Substring `wmctrl -a` matches against: `"<project>) - <app>"`.
pub fn wmctrl_match(project_title: &str, app_name: &str) -> String {
    format!("{}) - {}", project_title, app_name)
}

/// Entry of the host's "Window" menu for `window`: `"<document> — <project>"`.
pub fn menu_item_title<W: HostWindow + ?Sized>(window: &W) -> Option<String> {
    let document = window.active_document().and_then(|d| d.title());
    let project = project_title(&window.display_variables());

    match (document, project) {
        (Some(document), Some(project)) => Some(format!("{} \u{2014} {}", document, project)),
        (Some(document), None) => Some(document),
        (None, Some(project)) => Some(project),
        (None, None) => None,
    }
}
