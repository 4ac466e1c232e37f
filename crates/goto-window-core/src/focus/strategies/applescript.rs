//! macOS: AppleScript activation through System Events.
//!
//! Focusing a host window from inside the host leaves keyboard focus on the
//! previously active application. Activating some other application first
//! and then the host moves it for real.

use std::rc::Rc;

use tracing::{debug, info};

use crate::escape::applescript_escape;
use crate::focus::errors::FocusError;
use crate::focus::launcher::{LaunchRequest, ProcessLauncher};
use crate::focus::titles::menu_item_title;
use crate::focus::traits::{ActivationRequest, FocusStrategy};
use crate::platform::OsVersion;

/// Decoy first, then the host. `delay 1/60` is the shortest delay AppleScript honours.
const DECOY_SCRIPT: &str = r#"tell application "System Events"
    activate application "{decoy}"
    delay 1/60
    activate application "{app}"
end tell"#;

/// macOS 11 and later: the decoy must be System Events itself and no delay is needed.
const SYSTEM_EVENTS_SCRIPT: &str = r#"tell application "System Events"
    activate application "System Events"
    activate application "{app}"
end tell"#;

/// Click the window's entry in the host's Window menu. Needs UI scripting permission.
const MENU_CLICK_SCRIPT: &str = r#"tell application "System Events"
    tell process "{app}"
        set frontmost to true
        click menu item "{title}" of menu "Window" of menu bar 1
    end tell
end tell"#;

/// First macOS major version that needs [`SYSTEM_EVENTS_SCRIPT`].
const BIG_SUR_MAJOR: u32 = 11;

/// Script that re-activates `app_name` via a decoy application.
pub fn activation_script(app_name: &str, decoy_app: &str, os_version: Option<OsVersion>) -> String {
    let app = applescript_escape(app_name);
    match os_version {
        Some(version) if version.major >= BIG_SUR_MAJOR => SYSTEM_EVENTS_SCRIPT.replace("{app}", &app),
        _ => DECOY_SCRIPT
            .replace("{decoy}", &applescript_escape(decoy_app))
            .replace("{app}", &app),
    }
}

/// Script that clicks `menu_title` in `app_name`'s Window menu.
pub fn menu_click_script(app_name: &str, menu_title: &str) -> String {
    MENU_CLICK_SCRIPT
        .replace("{app}", &applescript_escape(app_name))
        .replace("{title}", &applescript_escape(menu_title))
}

/// Family A strategy: run an `osascript` one-shot after the host focus calls.
pub struct AppleScriptStrategy {
    launcher: Rc<dyn ProcessLauncher>,
}

impl AppleScriptStrategy {
    pub fn new(launcher: Rc<dyn ProcessLauncher>) -> Self {
        Self { launcher }
    }
}

impl FocusStrategy for AppleScriptStrategy {
    fn name(&self) -> &'static str {
        "scripted_activate"
    }

    fn activate_os(&self, request: &ActivationRequest<'_>) -> Result<(), FocusError> {
        let settings = request.settings;

        let menu_title = if settings.experimental_menu_click {
            let title = menu_item_title(request.window);
            if title.is_none() {
                debug!(
                    event = "core.focus.menu_click_skipped",
                    window_id = request.window.id().0,
                    reason = "no window title"
                );
            }
            title
        } else {
            None
        };

        let script = match &menu_title {
            Some(title) => menu_click_script(&settings.app_name, title),
            None => activation_script(
                &settings.app_name,
                &settings.decoy_app,
                request.context.os_version(),
            ),
        };

        self.launcher
            .launch_detached(&LaunchRequest::new("osascript", ["-e", script.as_str()]))?;

        info!(
            event = "core.focus.applescript_launched",
            app_name = %settings.app_name,
            menu_click = menu_title.is_some()
        );
        Ok(())
    }
}
