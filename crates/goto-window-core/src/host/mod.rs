//! Host application surface.
//!
//! The host owns window enumeration, focus primitives, and the modal message
//! box. [`Host`] and [`HostWindow`] describe what this crate consumes;
//! [`SnapshotHost`] implements them over a JSON description of the host's
//! windows for bridges and tests.

pub mod errors;
pub mod snapshot;
pub mod traits;
pub mod types;

pub use errors::HostError;
pub use snapshot::{HostSnapshot, SnapshotHost, SnapshotWindow, WindowSnapshot};
pub use traits::{Host, HostWindow};
pub use types::{
    Document, FOCUS_NEIGHBORING_GROUP, HostAction, NativeHandle, PaneId, VAR_FILE_NAME,
    VAR_FOLDER, VAR_PROJECT_BASE_NAME, WindowId,
};
