use tracing::{debug, info};

use crate::focus::errors::FocusError;
use crate::focus::native::{PlacementApi, PlacementState, Win32Placement};
use crate::focus::traits::FocusStrategy;
use crate::host::HostWindow;

/// Windows: restore a minimized window, then rely on the host focus calls.
#[derive(Debug, Clone, Default)]
pub struct RestoreStrategy<P: PlacementApi = Win32Placement> {
    placement: P,
}

impl<P: PlacementApi> RestoreStrategy<P> {
    pub fn new(placement: P) -> Self {
        Self { placement }
    }
}

impl<P: PlacementApi> FocusStrategy for RestoreStrategy<P> {
    fn name(&self) -> &'static str {
        "restore_and_focus"
    }

    fn restore_if_minimized(&self, window: &dyn HostWindow) -> Result<(), FocusError> {
        let Some(handle) = window.native_handle() else {
            debug!(
                event = "core.focus.restore_skipped",
                window_id = window.id().0,
                reason = "no native handle"
            );
            return Ok(());
        };

        match self.placement.placement(handle)? {
            PlacementState::Minimized => {
                self.placement.restore(handle)?;
                info!(
                    event = "core.focus.restore_completed",
                    window_id = window.id().0
                );
            }
            state => {
                debug!(
                    event = "core.focus.restore_skipped",
                    window_id = window.id().0,
                    state = ?state
                );
            }
        }

        Ok(())
    }
}
