use std::path::Path;

use tracing::{debug, info};

use crate::catalog::{self, CatalogOptions, OrderedCatalog};
use crate::host::{Host, WindowId};
use crate::selector::types::{ListItem, NoOpReason, QuickPanel, SelectionOutcome};

/// Rows for the quick panel: basename as label, full name as detail.
pub fn list_items(catalog: &OrderedCatalog) -> Vec<ListItem> {
    catalog
        .entries()
        .iter()
        .map(|entry| {
            let label = Path::new(&entry.display_name)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| entry.display_name.clone());
            ListItem {
                label,
                detail: entry.display_name.clone(),
            }
        })
        .collect()
}

/// Catalog position of the host's active window.
pub fn current_index(catalog: &OrderedCatalog, active: Option<WindowId>) -> Option<usize> {
    active.and_then(|id| catalog.position_of(id))
}

/// Show the catalog in `panel` and resolve the user's choice.
pub fn present_and_select<H: Host, P: QuickPanel + ?Sized>(
    host: &H,
    panel: &mut P,
    options: &CatalogOptions,
) -> SelectionOutcome {
    let catalog = catalog::enumerate(host, options);
    let items = list_items(&catalog);
    let highlighted = current_index(&catalog, host.active_window());

    debug!(
        event = "core.selector.present_started",
        items = items.len(),
        highlighted = ?highlighted
    );

    let choice = panel.select(&items, highlighted);
    resolve_selection(host, choice, options, Some(&catalog))
}

/// Map a quick-panel answer to an outcome against a freshly built catalog.
///
/// The catalog is rebuilt because windows may have opened or closed while
/// the list was shown. When the `shown` catalog is known, the pick must still
/// name the same window in the fresh one.
pub fn resolve_selection<H: Host>(
    host: &H,
    choice: Option<usize>,
    options: &CatalogOptions,
    shown: Option<&OrderedCatalog>,
) -> SelectionOutcome {
    let Some(choice) = choice else {
        info!(event = "core.selector.select_cancelled");
        return SelectionOutcome::no_op(NoOpReason::Cancelled);
    };

    let catalog = catalog::enumerate(host, options);

    if current_index(&catalog, host.active_window()) == Some(choice) {
        info!(event = "core.selector.select_already_active", index = choice);
        return SelectionOutcome::no_op(NoOpReason::AlreadyActive);
    }

    let Some(entry) = catalog.get(choice) else {
        info!(
            event = "core.selector.select_stale",
            index = choice,
            listed = catalog.len()
        );
        return SelectionOutcome::no_op(NoOpReason::StaleSelection);
    };

    let moved = shown
        .and_then(|shown| shown.get(choice))
        .is_some_and(|listed| listed.window_ref.id != entry.window_ref.id);
    if moved {
        info!(
            event = "core.selector.select_stale",
            index = choice,
            window_id = entry.window_ref.id.0
        );
        return SelectionOutcome::no_op(NoOpReason::StaleSelection);
    }

    info!(
        event = "core.selector.select_completed",
        index = choice,
        window_id = entry.window_ref.id.0,
        display_name = %entry.display_name
    );

    SelectionOutcome::Activate {
        window: entry.window_ref,
    }
}
