use std::rc::Rc;

use tracing::{debug, error, info, warn};

use crate::catalog::WindowRef;
use crate::config::GotoWindowConfig;
use crate::errors::GotoWindowError;
use crate::focus::errors::FocusError;
use crate::focus::launcher::ProcessLauncher;
use crate::focus::registry::{StrategyKind, build_strategy};
use crate::focus::traits::{ActivationRequest, FocusStrategy};
use crate::host::{FOCUS_NEIGHBORING_GROUP, Host, HostWindow};
use crate::platform::PlatformContext;

/// Activation settings for one invocation, resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSettings {
    pub experimental_menu_click: bool,
    pub decoy_app: String,
    /// Host application name for the running build.
    pub app_name: String,
}

impl FocusSettings {
    pub fn from_config(config: &GotoWindowConfig, context: &PlatformContext) -> Self {
        Self {
            experimental_menu_click: config.focus.experimental_menu_click,
            decoy_app: config.focus.decoy_app.clone(),
            app_name: config
                .host
                .app_name_for_build(context.host_build())
                .to_string(),
        }
    }
}

/// Runs the activation sequence for a chosen window.
pub struct FocusEngine {
    strategy: Box<dyn FocusStrategy>,
    context: PlatformContext,
    settings: FocusSettings,
}

impl FocusEngine {
    pub fn new(
        strategy: Box<dyn FocusStrategy>,
        context: PlatformContext,
        settings: FocusSettings,
    ) -> Self {
        Self {
            strategy,
            context,
            settings,
        }
    }

    pub fn with_launcher(
        context: PlatformContext,
        settings: FocusSettings,
        launcher: Rc<dyn ProcessLauncher>,
    ) -> Self {
        let kind = StrategyKind::for_family(context.family());
        debug!(event = "core.focus.strategy_selected", strategy = %kind);
        Self::new(build_strategy(kind, launcher), context, settings)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Bring `target` to the foreground with input focus.
    ///
    /// Failures never reach the caller. A missing `wmctrl` is shown to the
    /// user through [`Host::error_message`]; anything else is logged.
    pub fn activate<H: Host>(&self, host: &H, target: WindowRef) {
        info!(
            event = "core.focus.activate_started",
            window_id = target.id.0,
            strategy = self.strategy.name()
        );

        let Some(window) = host
            .windows()
            .into_iter()
            .nth(target.index)
            .filter(|w| w.id() == target.id)
        else {
            warn!(
                event = "core.focus.activate_skipped",
                window_id = target.id.0,
                reason = "window no longer open"
            );
            return;
        };

        if let Err(e) = self.strategy.restore_if_minimized(&window) {
            self.report(host, "restore", &e);
        }

        grab_host_focus(&window);

        let request = ActivationRequest {
            window: &window,
            context: &self.context,
            settings: &self.settings,
        };
        match self.strategy.activate_os(&request) {
            Ok(()) => info!(
                event = "core.focus.activate_completed",
                window_id = target.id.0
            ),
            Err(e) => self.report(host, "activate_os", &e),
        }
    }

    fn report<H: Host>(&self, host: &H, step: &str, e: &FocusError) {
        let user_visible = matches!(e, FocusError::MissingExternalTool { .. })
            && self.strategy.reports_missing_tool();
        if user_visible {
            error!(
                event = "core.focus.activate_failed",
                step = step,
                error = %e,
                error_code = e.error_code()
            );
            host.error_message(&e.to_string());
        } else {
            warn!(
                event = "core.focus.activate_failed",
                step = step,
                error = %e,
                error_code = e.error_code()
            );
        }
    }
}

/// Move host focus into `window`.
///
/// One focus call is not enough for the OS to hand over input focus, so the
/// view (or pane) is focused, focus bounces to the neighbouring group, and
/// the same view is focused again.
pub fn grab_host_focus<W: HostWindow + ?Sized>(window: &W) {
    if let Some(document) = window.active_document() {
        window.focus_document(&document);
        window.run_command(FOCUS_NEIGHBORING_GROUP);
        window.focus_document(&document);
        return;
    }

    if let Some(pane) = window.active_pane() {
        window.focus_pane(pane);
        window.run_command(FOCUS_NEIGHBORING_GROUP);
        window.focus_pane(pane);
        return;
    }

    debug!(
        event = "core.focus.host_focus_skipped",
        window_id = window.id().0,
        reason = "no active document or pane"
    );
}
