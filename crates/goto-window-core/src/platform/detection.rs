//! OS version probing.

use crate::platform::types::OsVersion;
#[cfg(target_os = "macos")]
use tracing::warn;

/// Parse the output of `sw_vers -productVersion`.
pub fn parse_product_version(output: &str) -> Option<OsVersion> {
    let mut parts = output.trim().split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().and_then(|m| m.parse().ok()).unwrap_or(0);
    Some(OsVersion { major, minor })
}

/// Run `sw_vers -productVersion` once. `None` when the probe fails.
#[cfg(target_os = "macos")]
pub fn probe_macos_version() -> Option<OsVersion> {
    match std::process::Command::new("sw_vers")
        .arg("-productVersion")
        .output()
    {
        Ok(output) if output.status.success() => {
            parse_product_version(&String::from_utf8_lossy(&output.stdout))
        }
        Ok(output) => {
            warn!(
                event = "core.platform.sw_vers_failed",
                stderr = %String::from_utf8_lossy(&output.stderr).trim()
            );
            None
        }
        Err(e) => {
            warn!(event = "core.platform.sw_vers_failed", error = %e);
            None
        }
    }
}

#[cfg(not(target_os = "macos"))]
pub fn probe_macos_version() -> Option<OsVersion> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_version() {
        assert_eq!(
            parse_product_version("10.15.7\n"),
            Some(OsVersion { major: 10, minor: 15 })
        );
        assert_eq!(
            parse_product_version("11.1"),
            Some(OsVersion { major: 11, minor: 1 })
        );
        assert_eq!(
            parse_product_version("14"),
            Some(OsVersion { major: 14, minor: 0 })
        );
    }

    #[test]
    fn test_parse_product_version_garbage() {
        assert_eq!(parse_product_version(""), None);
        assert_eq!(parse_product_version("abc"), None);
    }

    #[test]
    fn test_probe_does_not_panic() {
        let _version = probe_macos_version();
    }
}
