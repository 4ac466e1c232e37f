//! Window catalog: display names and ordering for one invocation.

pub mod operations;
pub mod types;

pub use operations::{abbreviate_home, display_name, enumerate};
pub use types::{CatalogOptions, OrderedCatalog, WindowEntry, WindowRef};
