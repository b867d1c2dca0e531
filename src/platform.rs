//! Platform tags and platform versions.

use crate::rules::platform::windows;
use crate::version::UNKNOWN;
use serde::{Serialize, Serializer};
use std::fmt;
use strum::IntoEnumIterator;

/// The platform family a browser runs on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[non_exhaustive]
pub enum Platform {
    #[strum(to_string = "Android")]
    Android,
    #[strum(to_string = "BeOS")]
    BeOs,
    #[strum(to_string = "BlackBerry")]
    BlackBerry,
    #[strum(to_string = "FreeBSD")]
    FreeBsd,
    #[strum(to_string = "iPad")]
    IPad,
    #[strum(to_string = "iPhone")]
    IPhone,
    #[strum(to_string = "iPod")]
    IPod,
    #[strum(to_string = "Linux")]
    Linux,
    #[strum(to_string = "Macintosh")]
    Macintosh,
    #[strum(to_string = "NetBSD")]
    NetBsd,
    #[strum(to_string = "Nokia")]
    Nokia,
    #[strum(to_string = "OpenBSD")]
    OpenBsd,
    #[strum(to_string = "OpenSolaris")]
    OpenSolaris,
    #[strum(to_string = "OS/2")]
    Os2,
    #[strum(to_string = "SunOS")]
    SunOs,
    #[strum(to_string = "Symbian")]
    Symbian,
    #[strum(to_string = "Windows")]
    Windows,
    #[strum(to_string = "Windows CE")]
    WindowsCe,
    #[strum(to_string = "Windows Phone")]
    WindowsPhone,
    #[default]
    #[strum(to_string = "unknown")]
    Unknown,
}

impl Platform {
    pub fn display_name(&self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

/// Which edition name to report for Windows NT versions shared by a client
/// and a server release.
///
/// NT 6.1 is both Windows 7 and Windows Server 2008 R2; the UA alone cannot
/// tell them apart, so the caller picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WindowsFlavor {
    #[default]
    Client,
    Server,
}

/// Raw platform version extracted from the UA.
///
/// Only Windows exposes a numeric OS version. NT-family versions are kept
/// apart from the legacy 3.x/9x line because their numbers overlap.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum PlatformVersion {
    #[default]
    Unknown,
    /// `Windows NT x.y`; the payload is `x.y`.
    WindowsNt(String),
    /// Windows 3.x / 95 / 98 / Me; the payload is e.g. `4.10`.
    Windows(String),
}

impl PlatformVersion {
    /// Numeric form: `"NT 6.1"`, `"4.10"` or `"unknown"`.
    pub fn raw(&self) -> String {
        match self {
            PlatformVersion::Unknown => UNKNOWN.to_string(),
            PlatformVersion::WindowsNt(v) => format!("NT {v}"),
            PlatformVersion::Windows(v) => v.clone(),
        }
    }

    /// Release name such as `"Windows 8.1"`, or `None` when the number does
    /// not map to a known release.
    pub fn name(&self, flavor: WindowsFlavor) -> Option<String> {
        match self {
            PlatformVersion::Unknown => None,
            PlatformVersion::WindowsNt(v) => windows::nt_name(v, flavor),
            PlatformVersion::Windows(v) => windows::legacy_name(v),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PlatformVersion::Unknown)
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

impl Serialize for PlatformVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PlatformVersion::Unknown => serializer.serialize_none(),
            _ => serializer.serialize_str(&self.raw()),
        }
    }
}
