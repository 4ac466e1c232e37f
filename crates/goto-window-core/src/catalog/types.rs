use crate::config::HostConfig;
use crate::host::WindowId;
use serde::Serialize;
use std::path::PathBuf;

/// Points back at a window in the host's window list.
///
/// `index` is the position in [`Host::windows`](crate::host::Host::windows)
/// at enumeration time; `id` guards against the list shifting afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WindowRef {
    pub index: usize,
    pub id: WindowId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowEntry {
    pub display_name: String,
    pub window_ref: WindowRef,
}

/// Entries sorted ascending by display name, ties in host order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct OrderedCatalog {
    entries: Vec<WindowEntry>,
}

impl OrderedCatalog {
    /// Sort `entries` by display name. The sort is stable.
    pub fn from_unsorted(mut entries: Vec<WindowEntry>) -> Self {
        entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        Self { entries }
    }

    pub fn entries(&self) -> &[WindowEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&WindowEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the entry for window `id`, if it is listed.
    pub fn position_of(&self, id: WindowId) -> Option<usize> {
        self.entries.iter().position(|e| e.window_ref.id == id)
    }

    pub fn display_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.display_name.as_str()).collect()
    }
}

/// Inputs to catalog construction that do not come from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Home directory to abbreviate as `~`; `None` disables abbreviation.
    pub home: Option<PathBuf>,
    /// Extension stripped from project file paths.
    pub project_extension: String,
}

impl CatalogOptions {
    pub fn from_config(host: &HostConfig) -> Self {
        Self {
            home: dirs::home_dir(),
            project_extension: host.project_extension.clone(),
        }
    }
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self::from_config(&HostConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, index: usize) -> WindowEntry {
        WindowEntry {
            display_name: name.to_string(),
            window_ref: WindowRef {
                index,
                id: WindowId(index as u64 + 100),
            },
        }
    }

    #[test]
    fn test_from_unsorted_sorts_case_sensitively() {
        let catalog = OrderedCatalog::from_unsorted(vec![
            entry("b", 0),
            entry("a", 1),
            entry("B", 2),
        ]);
        assert_eq!(catalog.display_names(), vec!["B", "a", "b"]);
    }

    #[test]
    fn test_from_unsorted_keeps_ties_in_host_order() {
        let catalog = OrderedCatalog::from_unsorted(vec![
            entry("same", 0),
            entry("other", 1),
            entry("same", 2),
        ]);
        let indices: Vec<usize> = catalog
            .entries()
            .iter()
            .map(|e| e.window_ref.index)
            .collect();
        assert_eq!(indices, vec![1, 0, 2]);
    }

    #[test]
    fn test_position_of() {
        let catalog = OrderedCatalog::from_unsorted(vec![entry("z", 0), entry("a", 1)]);
        assert_eq!(catalog.position_of(WindowId(100)), Some(1));
        assert_eq!(catalog.position_of(WindowId(999)), None);
    }

    #[test]
    fn test_options_from_config_uses_extension() {
        let mut host = HostConfig::default();
        host.project_extension = ".code-workspace".to_string();
        let options = CatalogOptions::from_config(&host);
        assert_eq!(options.project_extension, ".code-workspace");
    }
}
