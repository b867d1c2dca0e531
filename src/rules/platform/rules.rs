//! Platform token table.
//!
//! Scanned top to bottom, first hit wins. Mobile systems come first because
//! their UAs usually also name a desktop kernel (`Linux; Android`, `Windows
//! Phone` on `Windows NT`). The bare `Win` and `Mac` fallbacks come last.

use crate::platform::{Platform, PlatformVersion};
use crate::rules::platform::windows;
use crate::UaText;

/// One row of the platform table.
#[derive(Debug, Clone, Copy)]
pub struct PlatformRule {
    pub tokens: &'static [&'static str],
    pub platform: Platform,
    pub mobile: bool,
}

const fn row(tokens: &'static [&'static str], platform: Platform, mobile: bool) -> PlatformRule {
    PlatformRule { tokens, platform, mobile }
}

pub const PLATFORM_RULES: &[PlatformRule] = &[
    // Mobile
    row(&["Windows Phone", "IEMobile"], Platform::WindowsPhone, true),
    row(&["Windows CE"], Platform::WindowsCe, true),
    row(&["iPhone"], Platform::IPhone, true),
    row(&["iPad"], Platform::IPad, true),
    row(&["iPod"], Platform::IPod, true),
    row(&["Android"], Platform::Android, true),
    row(&["Symbian"], Platform::Symbian, true),
    row(&["BlackBerry", "BB10", "RIM Tablet OS"], Platform::BlackBerry, true),
    row(&["Nokia"], Platform::Nokia, true),
    // Desktop
    row(&["Windows"], Platform::Windows, false),
    row(&["Macintosh"], Platform::Macintosh, false),
    row(&["Linux"], Platform::Linux, false),
    row(&["FreeBSD"], Platform::FreeBsd, false),
    row(&["OpenBSD"], Platform::OpenBsd, false),
    row(&["NetBSD"], Platform::NetBsd, false),
    // Discontinued
    row(&["OpenSolaris"], Platform::OpenSolaris, false),
    row(&["OS/2"], Platform::Os2, false),
    row(&["BeOS"], Platform::BeOs, false),
    row(&["SunOS"], Platform::SunOs, false),
    // Generic
    row(&["Win"], Platform::Windows, false),
    row(&["Mac"], Platform::Macintosh, false),
];

/// Outcome of the platform stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformMatch {
    pub platform: Platform,
    pub mobile: bool,
    pub x64: bool,
    pub version: PlatformVersion,
}

/// Run the platform table, the 64-bit check and (for Windows) version
/// extraction over `ua`.
pub fn resolve(ua: &UaText<'_>) -> PlatformMatch {
    let hit = PLATFORM_RULES.iter().find(|rule| ua.contains_any(rule.tokens));
    let (platform, mobile) = hit.map_or((Platform::Unknown, false), |rule| (rule.platform, rule.mobile));

    let version =
        if platform == Platform::Windows { windows::detect_version(ua) } else { PlatformVersion::Unknown };

    PlatformMatch { platform, mobile, x64: ua.contains_any(&["WOW64", "Win64"]), version }
}
