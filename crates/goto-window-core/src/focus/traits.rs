use crate::focus::engine::FocusSettings;
use crate::focus::errors::FocusError;
use crate::host::HostWindow;
use crate::platform::PlatformContext;

/// Everything a strategy needs to activate one window.
pub struct ActivationRequest<'a> {
    pub window: &'a dyn HostWindow,
    pub context: &'a PlatformContext,
    pub settings: &'a FocusSettings,
}

/// Per-platform activation steps around the host's own focus calls.
pub trait FocusStrategy {
    /// Identifier used in logs.
    fn name(&self) -> &'static str;

    /// Un-minimize the native window before focusing it.
    fn restore_if_minimized(&self, _window: &dyn HostWindow) -> Result<(), FocusError> {
        Ok(())
    }

    /// Whether a missing helper tool is shown to the user instead of only logged.
    fn reports_missing_tool(&self) -> bool {
        false
    }

    /// OS-level workaround run after the host focus calls.
    fn activate_os(&self, _request: &ActivationRequest<'_>) -> Result<(), FocusError> {
        Ok(())
    }
}
