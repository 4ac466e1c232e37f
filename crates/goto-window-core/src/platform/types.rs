use serde::{Deserialize, Serialize};
use tracing::info;

use crate::host::Host;
use crate::platform::detection::probe_macos_version;

/// Operating system family, named the way the host reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformFamily {
    Windows,
    #[serde(rename = "osx", alias = "macos")]
    MacOs,
    Linux,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for PlatformFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformFamily::Windows => write!(f, "windows"),
            PlatformFamily::MacOs => write!(f, "osx"),
            PlatformFamily::Linux => write!(f, "linux"),
            PlatformFamily::Other => write!(f, "other"),
        }
    }
}

/// Dotted product version, e.g. `10.15.7` or `14.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OsVersion {
    pub major: u32,
    pub minor: u32,
}

/// Process-wide host and OS facts, established once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    host_build: u32,
    family: PlatformFamily,
    os_version: Option<OsVersion>,
}

impl PlatformContext {
    pub fn new(host_build: u32, family: PlatformFamily, os_version: Option<OsVersion>) -> Self {
        Self {
            host_build,
            family,
            os_version,
        }
    }

    /// Read the host identity and, on macOS, probe the product version.
    pub fn detect<H: Host>(host: &H) -> Self {
        let family = host.platform();
        let os_version = match family {
            PlatformFamily::MacOs => probe_macos_version(),
            _ => None,
        };

        let context = Self::new(host.version(), family, os_version);
        info!(
            event = "core.platform.detect_completed",
            host_build = context.host_build,
            family = %context.family,
            os_version = ?context.os_version
        );
        context
    }

    pub fn host_build(&self) -> u32 {
        self.host_build
    }

    pub fn family(&self) -> PlatformFamily {
        self.family
    }

    pub fn os_version(&self) -> Option<OsVersion> {
        self.os_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_family_serde_names() {
        let parsed: PlatformFamily = serde_json::from_str("\"osx\"").unwrap();
        assert_eq!(parsed, PlatformFamily::MacOs);
        let parsed: PlatformFamily = serde_json::from_str("\"macos\"").unwrap();
        assert_eq!(parsed, PlatformFamily::MacOs);
        let parsed: PlatformFamily = serde_json::from_str("\"freebsd\"").unwrap();
        assert_eq!(parsed, PlatformFamily::Other);
        assert_eq!(
            serde_json::to_string(&PlatformFamily::Linux).unwrap(),
            "\"linux\""
        );
    }

    #[test]
    fn test_platform_family_display() {
        assert_eq!(PlatformFamily::Windows.to_string(), "windows");
        assert_eq!(PlatformFamily::MacOs.to_string(), "osx");
        assert_eq!(PlatformFamily::Other.to_string(), "other");
    }

    #[test]
    fn test_os_version_ordering() {
        let catalina = OsVersion { major: 10, minor: 15 };
        let big_sur = OsVersion { major: 11, minor: 1 };
        assert!(catalina < big_sur);
    }
}
