use std::path::{Path, is_separator};

use tracing::{debug, info};

use crate::catalog::types::{CatalogOptions, OrderedCatalog, WindowEntry, WindowRef};
use crate::host::{Host, HostWindow};

/// Name representing `window` in the catalog, before home abbreviation.
///
/// Precedence: project file (extension stripped), then the active document
/// when no folders are open (file path, else tab name), then the first
/// folder. `None` means the window cannot be listed.
pub fn display_name<W: HostWindow + ?Sized>(window: &W, project_extension: &str) -> Option<String> {
    if let Some(project) = window.project_file() {
        let project = project.to_string_lossy();
        let project: &str = &project;
        let name = if project_extension.is_empty() {
            project
        } else {
            project.strip_suffix(project_extension).unwrap_or(project)
        };
        return Some(name.to_string());
    }

    let folders = window.folders();

    if folders.is_empty() {
        let document = window.active_document()?;
        if let Some(path) = document.file_path.filter(|p| !p.as_os_str().is_empty()) {
            return Some(path.to_string_lossy().into_owned());
        }
        return (!document.name.is_empty()).then_some(document.name);
    }

    folders.first().map(|f| f.to_string_lossy().into_owned())
}

/// Replace a leading `home` path in `name` with `~`.
///
/// Only whole path components match, so `/home/u` does not abbreviate
/// `/home/user2/x`. A plain string prefix test would rewrite it to `~ser2/x`.
pub fn abbreviate_home(name: &str, home: Option<&Path>) -> String {
    let Some(home) = home else {
        return name.to_string();
    };
    let home = home.to_string_lossy();
    let home = home.trim_end_matches(is_separator);
    if home.is_empty() {
        return name.to_string();
    }

    match name.strip_prefix(home) {
        Some(rest) if rest.is_empty() || rest.starts_with(is_separator) => format!("~{}", rest),
        _ => name.to_string(),
    }
}

/// Build the ordered catalog from the host's current windows.
pub fn enumerate<H: Host>(host: &H, options: &CatalogOptions) -> OrderedCatalog {
    let windows = host.windows();
    let total = windows.len();

    let entries: Vec<WindowEntry> = windows
        .iter()
        .enumerate()
        .filter_map(|(index, window)| {
            let Some(name) = display_name(window, &options.project_extension) else {
                debug!(
                    event = "core.catalog.window_skipped",
                    window_id = window.id().0,
                    reason = "no display name"
                );
                return None;
            };
            Some(WindowEntry {
                display_name: abbreviate_home(&name, options.home.as_deref()),
                window_ref: WindowRef {
                    index,
                    id: window.id(),
                },
            })
        })
        .collect();

    let catalog = OrderedCatalog::from_unsorted(entries);

    info!(
        event = "core.catalog.enumerate_completed",
        windows = total,
        listed = catalog.len()
    );

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Document, HostSnapshot, SnapshotHost, WindowSnapshot};
    use crate::platform::PlatformFamily;
    use std::path::PathBuf;

    const EXT: &str = ".sublime-project";

    fn options(home: &str) -> CatalogOptions {
        CatalogOptions {
            home: Some(PathBuf::from(home)),
            project_extension: EXT.to_string(),
        }
    }

    fn host_with(windows: Vec<WindowSnapshot>) -> SnapshotHost {
        let mut snapshot = HostSnapshot::new(4169, PlatformFamily::Linux);
        snapshot.windows = windows;
        SnapshotHost::new(snapshot)
    }

    fn name_of(window: WindowSnapshot) -> Option<String> {
        let host = host_with(vec![window]);
        display_name(&host.windows()[0], EXT)
    }

    #[test]
    fn test_project_file_wins_over_folders() {
        let window = WindowSnapshot::new(1)
            .with_project("/home/u/work.sublime-project")
            .with_folders(["/home/u/other"]);
        assert_eq!(name_of(window).as_deref(), Some("/home/u/work"));
    }

    #[test]
    fn test_first_folder_without_project() {
        let window = WindowSnapshot::new(1)
            .with_folders(["/home/u/site", "/home/u/assets"])
            .with_document(Document::saved(1, "/home/u/site/index.html"));
        assert_eq!(name_of(window).as_deref(), Some("/home/u/site"));
    }

    #[test]
    fn test_saved_document_without_folders() {
        let window = WindowSnapshot::new(1).with_document(Document::saved(1, "/tmp/notes.md"));
        assert_eq!(name_of(window).as_deref(), Some("/tmp/notes.md"));
    }

    #[test]
    fn test_unsaved_document_name_without_folders() {
        let window = WindowSnapshot::new(1).with_document(Document::unsaved(1, "untitled"));
        assert_eq!(name_of(window).as_deref(), Some("untitled"));
    }

    #[test]
    fn test_unresolvable_window_has_no_name() {
        assert_eq!(name_of(WindowSnapshot::new(1)), None);
        let nameless = WindowSnapshot::new(2).with_document(Document::unsaved(1, ""));
        assert_eq!(name_of(nameless), None);
    }

    #[test]
    fn test_project_extension_only_stripped_at_end() {
        let window = WindowSnapshot::new(1).with_project("/p/a.sublime-project.bak");
        assert_eq!(name_of(window).as_deref(), Some("/p/a.sublime-project.bak"));
    }

    #[test]
    fn test_abbreviate_home() {
        let home = PathBuf::from("/home/u");
        assert_eq!(abbreviate_home("/home/u/project", Some(&home)), "~/project");
        assert_eq!(abbreviate_home("/home/u", Some(&home)), "~");
        assert_eq!(abbreviate_home("/srv/project", Some(&home)), "/srv/project");
        assert_eq!(abbreviate_home("/home/user2/x", Some(&home)), "/home/user2/x");
        assert_eq!(abbreviate_home("untitled", Some(&home)), "untitled");
    }

    #[test]
    fn test_abbreviate_home_trailing_separator_and_unknown_home() {
        let home = PathBuf::from("/home/u/");
        assert_eq!(abbreviate_home("/home/u/site", Some(&home)), "~/site");
        assert_eq!(abbreviate_home("/home/u/site", None), "/home/u/site");
        assert_eq!(
            abbreviate_home("/home/u/site", Some(Path::new("/"))),
            "/home/u/site"
        );
    }

    #[test]
    fn test_enumerate_three_window_scenario() {
        let host = host_with(vec![
            WindowSnapshot::new(1).with_project("/home/u/work.sublime-project"),
            WindowSnapshot::new(2).with_folders(["/home/u/site"]),
            WindowSnapshot::new(3).with_document(Document::unsaved(9, "untitled")),
        ]);
        let catalog = enumerate(&host, &options("/home/u"));
        assert_eq!(catalog.display_names(), vec!["untitled", "~/site", "~/work"]);

        let indices: Vec<usize> = catalog
            .entries()
            .iter()
            .map(|e| e.window_ref.index)
            .collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }

    #[test]
    fn test_enumerate_excludes_unnamed_windows_and_sorts() {
        let host = host_with(vec![
            WindowSnapshot::new(1).with_folders(["/b"]),
            WindowSnapshot::new(2),
            WindowSnapshot::new(3).with_folders(["/a"]),
            WindowSnapshot::new(4).with_folders(["/c"]),
        ]);
        let catalog = enumerate(&host, &options("/home/u"));
        assert_eq!(catalog.display_names(), vec!["/a", "/b", "/c"]);
        assert!(catalog.position_of(crate::host::WindowId(2)).is_none());
    }

    #[test]
    fn test_enumerate_is_idempotent() {
        let host = host_with(vec![
            WindowSnapshot::new(1).with_folders(["/home/u/z"]),
            WindowSnapshot::new(2).with_folders(["/home/u/a"]),
            WindowSnapshot::new(3).with_folders(["/home/u/a"]),
        ]);
        let first = enumerate(&host, &options("/home/u"));
        let second = enumerate(&host, &options("/home/u"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumerate_empty_host() {
        let host = host_with(Vec::new());
        assert!(enumerate(&host, &options("/home/u")).is_empty());
    }
}
