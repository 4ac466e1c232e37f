//! Focus strategy implementations, one per platform family.

mod applescript;
mod noop;
mod restore;
mod wmctrl;

pub use applescript::{AppleScriptStrategy, activation_script, menu_click_script};
pub use noop::NoOpStrategy;
pub use restore::RestoreStrategy;
pub use wmctrl::{WMCTRL, WmctrlStrategy};
