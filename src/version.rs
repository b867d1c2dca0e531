//! Version strings.
//!
//! Versions pulled out of a User-Agent are free-form: `"41.0.2272.118"`,
//! `"4.04 Gold"`, `"Link-4.5"`, `"NT 6.1"`. They are stored as cleaned text and
//! only interpreted numerically when two of them are compared.
//!
//! ```text
//! raw token ──clean_version──▶ "1.0 final" ──Version::parse──▶ Known("1.0 final")
//!                          └─▶ ""          ──Version::parse──▶ Unknown
//! ```
//!
//! Comparison splits on `.`, reads each component as a non-negative integer
//! (leading digits only, anything else is `0`), pads the shorter side with
//! zeros and compares left to right. That makes `"1.2" == "1.2.0"` and keeps
//! the relation a total order, which the range checks in `rules/platform`
//! depend on.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Text used for anything the detector could not determine.
pub const UNKNOWN: &str = "unknown";

/// A cleaned browser/product version, or the `Unknown` sentinel.
///
/// `Unknown` never takes part in numeric comparisons: [`Version::compare`]
/// returns `None` for it instead of pretending it is `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(untagged)]
pub enum Version {
    #[default]
    Unknown,
    Known(String),
}

impl Version {
    /// Clean `raw` and wrap it; an empty result becomes [`Version::Unknown`].
    ///
    /// ```
    /// use uaclass::Version;
    ///
    /// assert_eq!(Version::parse("11.0)").as_str(), "11.0");
    /// assert!(Version::parse("(KHTML)").is_unknown());
    /// ```
    pub fn parse(raw: &str) -> Self {
        let cleaned = clean_version(raw);
        if cleaned.is_empty() { Version::Unknown } else { Version::Known(cleaned) }
    }

    /// The cleaned text, or `"unknown"`.
    pub fn as_str(&self) -> &str {
        match self {
            Version::Unknown => UNKNOWN,
            Version::Known(v) => v,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Version::Unknown)
    }

    pub fn is_known(&self) -> bool {
        !self.is_unknown()
    }

    /// Compare against `other` with [`compare_versions`].
    ///
    /// Returns `None` when this version is unknown.
    pub fn compare(&self, other: &str) -> Option<Ordering> {
        match self {
            Version::Unknown => None,
            Version::Known(v) => Some(compare_versions(v, other)),
        }
    }

    /// Rewrite a known version, leaving `Unknown` untouched. The result is
    /// cleaned again.
    pub(crate) fn map_known(self, f: impl FnOnce(&str) -> String) -> Self {
        match self {
            Version::Unknown => Version::Unknown,
            Version::Known(v) => Version::parse(&f(&v)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a raw version token.
///
/// - parenthesized groups are removed, including an unterminated trailing one;
/// - anything outside `[A-Za-z0-9._ -]` becomes a space;
/// - the result is trimmed and inner runs of spaces collapse to one.
///
/// ```
/// use uaclass::clean_version;
///
/// assert_eq!(clean_version("1.0 (beta)"), "1.0");
/// assert_eq!(clean_version("1.0  final"), "1.0 final");
/// assert_eq!(clean_version("9.80;"), "9.80");
/// ```
pub fn clean_version(raw: &str) -> String {
    let without_groups = regex!(r"\([^)]+\)?").replace_all(raw, "");
    let allowed = regex!(r"[^0-9.a-zA-Z_ -]").replace_all(&without_groups, " ");
    allowed.split(' ').filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

/// Compare two dot-separated version strings numerically.
///
/// ```
/// use std::cmp::Ordering;
/// use uaclass::compare_versions;
///
/// assert_eq!(compare_versions("1.2", "1.2.0"), Ordering::Equal);
/// assert_eq!(compare_versions("2", "1.9.9"), Ordering::Greater);
/// assert_eq!(compare_versions("6.1", "10.0"), Ordering::Less);
/// ```
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    let left: Vec<u64> = left.split('.').map(parse_int).collect();
    let right: Vec<u64> = right.split('.').map(parse_int).collect();
    let len = left.len().max(right.len());

    (0..len)
        .map(|i| {
            let l = left.get(i).copied().unwrap_or(0);
            let r = right.get(i).copied().unwrap_or(0);
            l.cmp(&r)
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Read the leading decimal digits of `part` (after leading whitespace).
/// Non-numeric input yields `0`; very long digit runs saturate.
pub(crate) fn parse_int(part: &str) -> u64 {
    part.trim_start()
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u64, |acc, b| acc.saturating_mul(10).saturating_add(u64::from(b - b'0')))
}
