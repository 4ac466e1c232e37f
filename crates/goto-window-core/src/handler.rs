//! The "go to window" command: present, select, activate.

use std::rc::Rc;

use tracing::{info, warn};

use crate::catalog::CatalogOptions;
use crate::config::GotoWindowConfig;
use crate::errors::GotoWindowError;
use crate::focus::{FocusEngine, FocusSettings, ProcessLauncher, SystemLauncher};
use crate::host::Host;
use crate::platform::PlatformContext;
use crate::selector::{self, QuickPanel, SelectionOutcome};

/// Load this invocation's configuration, falling back to defaults on error.
///
/// A broken config file must not stop window switching, so the error is logged only.
pub fn load_config_or_default() -> GotoWindowConfig {
    match GotoWindowConfig::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(
                event = "core.config.load_failed",
                error = %e,
                error_code = e.error_code()
            );
            GotoWindowConfig::default()
        }
    }
}

/// Show the window list, then activate the chosen window.
pub fn go_to_window<H: Host, P: QuickPanel + ?Sized>(
    host: &H,
    panel: &mut P,
    context: &PlatformContext,
) -> SelectionOutcome {
    let config = load_config_or_default();
    let options = CatalogOptions::from_config(&config.host);
    let outcome = selector::present_and_select(host, panel, &options);
    activate_outcome(host, outcome, context, &config, Rc::new(SystemLauncher));
    outcome
}

/// Handle an answer from an asynchronous quick panel.
pub fn on_select<H: Host>(
    host: &H,
    choice: Option<usize>,
    context: &PlatformContext,
    config: &GotoWindowConfig,
    launcher: Rc<dyn ProcessLauncher>,
) -> SelectionOutcome {
    let options = CatalogOptions::from_config(&config.host);
    let outcome = selector::resolve_selection(host, choice, &options, None);
    activate_outcome(host, outcome, context, config, launcher);
    outcome
}

fn activate_outcome<H: Host>(
    host: &H,
    outcome: SelectionOutcome,
    context: &PlatformContext,
    config: &GotoWindowConfig,
    launcher: Rc<dyn ProcessLauncher>,
) {
    let Some(window) = outcome.window() else {
        info!(event = "core.goto.no_op", outcome = ?outcome);
        return;
    };

    let settings = FocusSettings::from_config(config, context);
    FocusEngine::with_launcher(context.clone(), settings, launcher).activate(host, window);
}
