//! Read-once facts about the host and the operating system.

pub mod detection;
pub mod types;

pub use detection::{parse_product_version, probe_macos_version};
pub use types::{OsVersion, PlatformContext, PlatformFamily};
