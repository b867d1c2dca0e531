//! # uaclass
//!
//! A rule-based, deterministic HTTP User-Agent classifier.
//!
//! ```
//! use uaclass::{Browser, Platform, WindowsFlavor, detect};
//!
//! let d = detect("Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko");
//! assert_eq!(d.browser(), Browser::InternetExplorer);
//! assert_eq!(d.version().as_str(), "11.0");
//! assert_eq!(d.platform(), Platform::Windows);
//! assert_eq!(d.platform_version_name(WindowsFlavor::Client).as_deref(), Some("Windows 7"));
//! assert!(d.is_64bit());
//! ```
//!
//! Detection runs three stages over one input: an ordered browser rule chain
//! (first match wins), a platform token scan, and AOL co-branding. See
//! `engine.rs` for how they fit together and `rules/` for the tables.

#[macro_use]
mod macros;
mod api;
mod browser;
mod engine;
mod platform;
mod rules;
mod version;

pub use api::{Detection, DetectionDetails, DetectionVerbose, detect, detect_opt, detect_verbose, rule_names};
pub use browser::Browser;
pub use platform::{Platform, PlatformVersion, WindowsFlavor};
pub use version::{UNKNOWN, Version, clean_version, compare_versions};

use serde::Serialize;

// --- Public value types -----------------------------------------------------

bitflags::bitflags! {
    /// Boolean traits of the client.
    ///
    /// `MOBILE` and `ROBOT` come from the browser rule that matched; the
    /// platform scan may add `MOBILE` (never removes it) and sets `X64`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Traits: u8 {
        const MOBILE = 1 << 0;
        const ROBOT  = 1 << 1;
        const X64    = 1 << 2;
    }
}

/// The browser a host browser is emulating in compatibility view.
///
/// Internet Explorer 8+ can render pages as an older release; the UA then
/// carries both the real Trident signature and an older `MSIE x.y` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityView {
    pub browser: Browser,
    pub version: Version,
}

// --- Internal types ---------------------------------------------------------

/// Case-insensitive view over the raw UA string.
///
/// The lowercased copy is computed once per detection; searches for ASCII
/// needles return byte offsets that are valid in both copies.
#[derive(Debug, Clone)]
pub(crate) struct UaText<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> UaText<'a> {
    pub fn new(raw: &'a str) -> Self {
        UaText { raw, lower: raw.to_ascii_lowercase() }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Byte offset of the first case-insensitive occurrence of `needle`.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.lower.find(&needle.to_ascii_lowercase())
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.find(needle).is_some()
    }

    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.contains(n))
    }

    /// The raw text starting at the first occurrence of `needle`.
    pub fn tail_from(&self, needle: &str) -> Option<&'a str> {
        self.find(needle).map(|start| &self.raw[start..])
    }
}

/// What a browser rule produces when it matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BrowserMatch {
    pub browser: Browser,
    pub version: Version,
    pub traits: Traits,
    pub compatibility_view: Option<CompatibilityView>,
}

impl BrowserMatch {
    pub fn new(browser: Browser, raw_version: &str, traits: Traits) -> Self {
        BrowserMatch { browser, version: Version::parse(raw_version), traits, compatibility_view: None }
    }
}

pub(crate) type Production = Box<dyn Fn(&UaText<'_>) -> Option<BrowserMatch> + Send + Sync>;

/// A browser rule: a name, trigger tokens and a production.
///
/// The detector only calls `production` when at least one trigger appears in
/// the UA (case-insensitive). Triggers must be a necessary condition for the
/// production to match; an empty list means the rule is always evaluated.
pub(crate) struct Rule {
    pub name: &'static str,
    pub triggers: &'static [&'static str],
    pub production: Production,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("triggers", &self.triggers)
            .field("production", &"<function>")
            .finish()
    }
}
