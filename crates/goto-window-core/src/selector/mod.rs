//! Present the catalog and turn the user's pick into a window reference.

pub mod handler;
pub mod types;

pub use handler::{current_index, list_items, present_and_select, resolve_selection};
pub use types::{ListItem, NoOpReason, PresetChoice, QuickPanel, SelectionOutcome};
