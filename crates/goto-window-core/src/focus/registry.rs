//! Strategy selection from the platform family.

use std::rc::Rc;

use crate::focus::launcher::ProcessLauncher;
use crate::focus::native::Win32Placement;
use crate::focus::strategies::{AppleScriptStrategy, NoOpStrategy, RestoreStrategy, WmctrlStrategy};
use crate::focus::traits::FocusStrategy;
use crate::platform::PlatformFamily;

/// Activation workaround family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Windows: restore minimized windows, host focus calls do the rest.
    RestoreAndFocus,
    /// Family A: AppleScript through System Events.
    ScriptedActivate,
    /// Family B: external window-manager tool.
    ExternalToolActivate,
    /// Family C: nothing beyond the host focus calls.
    NoOp,
}

impl StrategyKind {
    pub fn for_family(family: PlatformFamily) -> Self {
        match family {
            PlatformFamily::Windows => StrategyKind::RestoreAndFocus,
            PlatformFamily::MacOs => StrategyKind::ScriptedActivate,
            PlatformFamily::Linux => StrategyKind::ExternalToolActivate,
            PlatformFamily::Other => StrategyKind::NoOp,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::RestoreAndFocus => write!(f, "restore_and_focus"),
            StrategyKind::ScriptedActivate => write!(f, "scripted_activate"),
            StrategyKind::ExternalToolActivate => write!(f, "external_tool_activate"),
            StrategyKind::NoOp => write!(f, "no_op"),
        }
    }
}

/// Build the strategy for `kind`, launching helpers through `launcher`.
pub fn build_strategy(kind: StrategyKind, launcher: Rc<dyn ProcessLauncher>) -> Box<dyn FocusStrategy> {
    match kind {
        StrategyKind::RestoreAndFocus => Box::new(RestoreStrategy::new(Win32Placement)),
        StrategyKind::ScriptedActivate => Box::new(AppleScriptStrategy::new(launcher)),
        StrategyKind::ExternalToolActivate => Box::new(WmctrlStrategy::new(launcher)),
        StrategyKind::NoOp => Box::new(NoOpStrategy),
    }
}
