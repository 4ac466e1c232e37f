//! Window activation: per-platform strategies behind one engine.

pub mod engine;
pub mod errors;
pub mod launcher;
pub mod native;
pub mod registry;
pub mod strategies;
pub mod titles;
pub mod traits;

pub use engine::{FocusEngine, FocusSettings, grab_host_focus};
pub use errors::FocusError;
pub use launcher::{LaunchRequest, ProcessLauncher, RecordingLauncher, SystemLauncher};
pub use registry::{StrategyKind, build_strategy};
pub use traits::{ActivationRequest, FocusStrategy};
