use serde::Serialize;

use crate::catalog::WindowRef;

/// One row of the quick-selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Last path segment of the display name.
    pub label: String,
    /// Full display name.
    pub detail: String,
}

/// Why a selection led to no activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoOpReason {
    /// The user dismissed the list.
    Cancelled,
    /// The picked window already has focus.
    AlreadyActive,
    /// The picked window closed before the choice was confirmed.
    StaleSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SelectionOutcome {
    Activate { window: WindowRef },
    NoOp { reason: NoOpReason },
}

impl SelectionOutcome {
    pub fn no_op(reason: NoOpReason) -> Self {
        SelectionOutcome::NoOp { reason }
    }

    pub fn window(&self) -> Option<WindowRef> {
        match self {
            SelectionOutcome::Activate { window } => Some(*window),
            SelectionOutcome::NoOp { .. } => None,
        }
    }
}

/// The host's single-selection list widget.
pub trait QuickPanel {
    /// Show `items` with `highlighted` pre-selected; `None` means cancelled.
    fn select(&mut self, items: &[ListItem], highlighted: Option<usize>) -> Option<usize>;
}

/// A panel whose answer is known up front, e.g. an index passed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetChoice(pub Option<usize>);

impl QuickPanel for PresetChoice {
    fn select(&mut self, _items: &[ListItem], _highlighted: Option<usize>) -> Option<usize> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::WindowId;

    #[test]
    fn test_outcome_window() {
        let window = WindowRef {
            index: 0,
            id: WindowId(1),
        };
        assert_eq!(SelectionOutcome::Activate { window }.window(), Some(window));
        assert_eq!(SelectionOutcome::no_op(NoOpReason::Cancelled).window(), None);
    }

    #[test]
    fn test_outcome_json() {
        let json = serde_json::to_string(&SelectionOutcome::no_op(NoOpReason::AlreadyActive)).unwrap();
        assert_eq!(json, r#"{"outcome":"no_op","reason":"already_active"}"#);
    }
}
