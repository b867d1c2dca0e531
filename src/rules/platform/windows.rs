//! Windows version extraction and naming.
//!
//! Two numbering lines share the `Windows` platform tag:
//!
//! ```text
//! NT line      "Windows NT 6.1"  -> WindowsNt("6.1")  -> "Windows 7" / "Windows Server 2008 R2"
//! legacy line  "Windows 98"      -> Windows("4.10")   -> "Windows 98"
//! ```
//!
//! Their numbers overlap (NT 4.0 vs. Windows 95 `4.00`), so they stay apart
//! in [`PlatformVersion`] and are named by different tables.

use std::cmp::Ordering;

use crate::platform::{PlatformVersion, WindowsFlavor};
use crate::version::compare_versions;
use crate::UaText;

/// Legacy releases that only identify by name, with their internal numbers.
const LEGACY_RELEASES: &[(&str, &str)] = &[("Windows ME", "4.90"), ("Windows 98", "4.10"), ("Windows 95", "4.00")];

/// Raw Windows version from the UA. Only meaningful when the platform is
/// Windows.
pub fn detect_version(ua: &UaText<'_>) -> PlatformVersion {
    if let Some(caps) = regex!(r"(?i)Windows NT\s*([^\s;)$]+)").captures(ua.raw()) {
        if let Some(m) = caps.get(1) {
            return PlatformVersion::WindowsNt(m.as_str().to_string());
        }
    }

    if let Some((_, number)) = LEGACY_RELEASES.iter().find(|(token, _)| ua.contains(token)) {
        return PlatformVersion::Windows(number.to_string());
    }

    if let Some(caps) = regex!(r"(?i)Windows 3\.([^\s;)$]+)").captures(ua.raw()) {
        if let Some(m) = caps.get(1) {
            return PlatformVersion::Windows(format!("3.{}", m.as_str()));
        }
    }

    PlatformVersion::Unknown
}

fn cmp(version: &str, other: &str) -> Ordering {
    compare_versions(version, other)
}

/// Release name for an NT version (`"6.1"`), or `None` for numbers that never
/// shipped.
///
/// Only the first two components decide the release; `"6.1.7601"` is still
/// Windows 7. Versions from 11 on are reported as-is.
pub fn nt_name(version: &str, flavor: WindowsFlavor) -> Option<String> {
    let short = version.split('.').take(2).collect::<Vec<_>>().join(".");
    let pick = |client: &str, server: &str| match flavor {
        WindowsFlavor::Client => client.to_string(),
        WindowsFlavor::Server => server.to_string(),
    };

    if cmp(&short, "11").is_ge() {
        return Some(format!("Windows {version}"));
    }
    if cmp(&short, "10").is_ge() {
        return Some(pick("Windows 10", "Windows Server 2016"));
    }
    if cmp(&short, "7").is_ge() {
        return None;
    }

    let is = |number: &str| cmp(&short, number).is_eq();
    let name = if is("6.3") {
        pick("Windows 8.1", "Windows Server 2012 R2")
    } else if is("6.2") {
        pick("Windows 8", "Windows Server 2012")
    } else if is("6.1") {
        pick("Windows 7", "Windows Server 2008 R2")
    } else if is("6") {
        pick("Windows Vista", "Windows Server 2008")
    } else if is("5.2") {
        pick("Windows XP x64 Edition", "Windows Server 2003 / Windows Server 2003 R2")
    } else if is("5.1") {
        "Windows XP".to_string()
    } else if is("5") {
        "Windows 2000".to_string()
    } else if cmp(&short, "5").is_lt() && cmp(&short, "3").is_ge() {
        format!("Windows NT {version}")
    } else {
        return None;
    };
    Some(name)
}

/// Release name for a Windows 3.x/9x number (`"4.10"`), or `None`.
pub fn legacy_name(version: &str) -> Option<String> {
    let within = |low: &str, high: &str| cmp(version, low).is_ge() && cmp(version, high).is_lt();

    let name = if within("4.90", "4.91") {
        "Windows Me".to_string()
    } else if within("4.10", "4.11") {
        "Windows 98".to_string()
    } else if within("4", "4.04") {
        "Windows 95".to_string()
    } else if cmp(version, "3.1").is_eq() || cmp(version, "3.11").is_eq() {
        format!("Windows {version}")
    } else {
        return None;
    };
    Some(name)
}
