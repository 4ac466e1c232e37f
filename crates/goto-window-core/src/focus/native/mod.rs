//! Native window placement queries.

#[cfg(windows)]
mod windows;
mod types;

pub use types::{PlacementApi, PlacementState, Win32Placement};
