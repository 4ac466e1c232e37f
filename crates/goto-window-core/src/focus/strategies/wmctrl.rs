//! Linux/X11: activate the window with `wmctrl -a`.

use std::rc::Rc;

use tracing::info;

use crate::focus::errors::FocusError;
use crate::focus::launcher::{LaunchRequest, ProcessLauncher};
use crate::focus::titles::{project_title, wmctrl_match};
use crate::focus::traits::{ActivationRequest, FocusStrategy};

/// Window-manager tool launched by [`WmctrlStrategy`].
pub const WMCTRL: &str = "wmctrl";

/// Family B strategy: `wmctrl -a "<project>) - <app>"`.
///
/// wmctrl matches a substring of the window title, so the closing
/// parenthesis of the host's `(<project>)` title segment anchors the match.
pub struct WmctrlStrategy {
    launcher: Rc<dyn ProcessLauncher>,
}

impl WmctrlStrategy {
    pub fn new(launcher: Rc<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }
}

impl FocusStrategy for WmctrlStrategy {
    fn name(&self) -> &'static str {
        "external_tool_activate"
    }

    fn reports_missing_tool(&self) -> bool {
        true
    }

    fn activate_os(&self, request: &ActivationRequest<'_>) -> Result<(), FocusError> {
        let window = request.window;
        let title = project_title(&window.display_variables()).ok_or(
            FocusError::UnresolvableWindowTitle {
                window_id: window.id().0,
            },
        )?;

        let pattern = wmctrl_match(&title, &request.settings.app_name);
        self.launcher
            .launch_detached(&LaunchRequest::new(WMCTRL, ["-a", pattern.as_str()]))?;

        info!(
            event = "core.focus.wmctrl_launched",
            window_id = window.id().0,
            pattern = %pattern
        );
        Ok(())
    }
}
