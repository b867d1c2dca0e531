//! Co-branded clients.
//!
//! AOL ships its client on top of IE or Netscape and appends its own marker,
//! `AOL 9.0; AOLBuild 4337.43;`, without the usual `name/version` slash.

use crate::{UaText, Version};

/// `Some` when the UA carries an `AOL ` marker; the version inside may be
/// unknown. The marker is found case-insensitively, but the version is only
/// read after an exact `AOL ` (so `aol 9.0` yields an unknown version).
pub fn resolve_aol(ua: &UaText<'_>) -> Option<Version> {
    let tail = ua.tail_from("AOL ")?;
    let version = tail.split("AOL ").nth(1).and_then(|rest| rest.split(' ').next()).unwrap_or("");
    Some(Version::parse(version))
}

/// Whether the Google Chrome Frame plugin is announced.
pub fn is_chrome_frame(ua: &UaText<'_>) -> bool {
    ua.contains("chromeframe")
}
