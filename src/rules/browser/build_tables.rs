//! Safari 0.8 – 2.0.4 build numbers.
//!
//! Before 3.0, Safari did not send a `Version/` token; only its own build
//! number and the WebKit build number. Both map to public releases through
//! these fixed tables (Apple's historical UA matrix). Builds outside the
//! tables return `None` so the caller can try the next source.

use std::cmp::Ordering;

use crate::version::{compare_versions, parse_int};

/// `major.minor.patch` integers of a build string, zero padded.
fn build_parts(build: &str) -> [u64; 3] {
    let mut parts = [0u64; 3];
    for (slot, part) in parts.iter_mut().zip(build.split('.')) {
        *slot = parse_int(part);
    }
    parts
}

/// Safari build (`Safari/412.2`) to Safari version.
pub fn safari_build_to_version(build: &str) -> Option<&'static str> {
    let [major, minor, _] = build_parts(build);

    let version = match major {
        419 => "2.0.4",
        417 => "2.0.3",
        416 => "2.0.2",
        412 if minor >= 5 => "2.0.1",
        412 => "2.0",
        312 if minor >= 5 => "1.3.2",
        312 if minor >= 3 => "1.3.1",
        312 => "1.3",
        125 if minor >= 11 => "1.2.4",
        125 if minor >= 9 => "1.2.3",
        125 if minor >= 7 => "1.2.2",
        125 => "1.2",
        100 if minor >= 1 => "1.1.1",
        100 => "1.1",
        85 if minor >= 8 => "1.0.3",
        85 if minor >= 7 => "1.0.2",
        85 => "1.0",
        73 => "0.9",
        51 => "0.8.1",
        48 => "0.8",
        _ => return None,
    };
    Some(version)
}

/// WebKit build (`AppleWebKit/125.5.5`) to Safari version.
///
/// Some WebKit builds shipped with two Safari releases (WebKit 100 is Safari
/// 1.1 or 1.1.1, WebKit 85.7 is Safari 1.0 or 1.0.2); the Safari build is
/// more precise and is tried first.
pub fn webkit_build_to_version(build: &str) -> Option<&'static str> {
    let [major, minor, patch] = build_parts(build);

    let version = match major {
        419 => "2.0.4",
        418 if minor >= 8 => "2.0.4",
        418 => "2.0.3",
        417 => "2.0.3",
        416 => "2.0.2",
        412 if minor >= 7 => "2.0.1",
        412 => "2.0",
        312 if minor >= 8 => "1.3.2",
        312 if minor >= 5 => "1.3.1",
        312 => "1.3",
        // 125.5.5 and later
        125 if compare_versions("5.4", &format!("{minor}.{patch}")) == Ordering::Less => "1.2.4",
        125 if minor >= 4 => "1.2.3",
        125 if minor >= 2 => "1.2.2",
        125 => "1.2",
        100 => "1.1.1",
        85 if minor >= 8 => "1.0.3",
        85 if minor >= 7 => "1.0.2",
        85 => "1.0",
        73 => "0.9",
        51 => "0.8.1",
        48 => "0.8",
        _ => return None,
    };
    Some(version)
}
