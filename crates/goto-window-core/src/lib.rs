//! goto-window-core: list a host application's windows and focus one of them.
//!
//! The host (an editor with several top-level windows) supplies its windows
//! through [`host::Host`]. This crate names and orders them, maps the user's
//! pick back to a window, and runs the platform-specific sequence that
//! actually moves keyboard focus there.
//!
//! # Main Entry Points
//!
//! - [`catalog`] - Display names and ordering
//! - [`selector`] - Quick-panel rows and selection outcomes
//! - [`focus`] - Per-platform activation strategies
//! - [`handler`] - The whole "go to window" command
//! - [`config`] - Configuration loading

pub mod catalog;
pub mod config;
pub mod errors;
pub mod escape;
pub mod focus;
pub mod handler;
pub mod host;
pub mod logging;
pub mod platform;
pub mod selector;

// Re-export commonly used types at crate root for convenience
pub use catalog::{CatalogOptions, OrderedCatalog, WindowEntry, WindowRef};
pub use config::GotoWindowConfig;
pub use errors::{ConfigError, GotoWindowError, GotoWindowResult};
pub use focus::{FocusEngine, FocusError, FocusSettings, FocusStrategy, StrategyKind};
pub use host::{Host, HostAction, HostError, HostSnapshot, HostWindow, SnapshotHost};
pub use platform::{PlatformContext, PlatformFamily};
pub use selector::{ListItem, NoOpReason, QuickPanel, SelectionOutcome};

pub use handler::{go_to_window, on_select};

// Re-export logging initialization
pub use logging::init_logging;
