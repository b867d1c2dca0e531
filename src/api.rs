use crate::engine;
use crate::platform::{Platform, PlatformVersion, WindowsFlavor};
use crate::rules::cobrand;
use crate::{Browser, CompatibilityView, Rule, Traits, UaText, Version};
use once_cell::sync::Lazy;
use serde::{Serialize, Serializer};
use std::fmt;
use std::time::Duration;

static DEFAULT_RULES: Lazy<Vec<Rule>> = Lazy::new(crate::rules::browser::rules::get);

/// Everything detected from one User-Agent string.
///
/// Immutable; build one with [`detect`] per input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub(crate) user_agent: String,
    pub(crate) browser: Browser,
    pub(crate) version: Version,
    pub(crate) traits: Traits,
    pub(crate) compatibility_view: Option<CompatibilityView>,
    pub(crate) platform: Platform,
    pub(crate) platform_version: PlatformVersion,
    pub(crate) aol: Option<Version>,
}

impl Detection {
    /// The input, verbatim. Empty when the input was absent or only whitespace.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn browser(&self) -> Browser {
        self.browser
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Raw platform version (`"NT 6.1"`, `"4.10"`, or unknown).
    pub fn platform_version(&self) -> &PlatformVersion {
        &self.platform_version
    }

    /// Release name of the platform version, e.g. `"Windows 7"`.
    ///
    /// `flavor` picks between client and server names for NT versions that
    /// shipped as both.
    pub fn platform_version_name(&self, flavor: WindowsFlavor) -> Option<String> {
        self.platform_version.name(flavor)
    }

    pub fn traits(&self) -> Traits {
        self.traits
    }

    pub fn is_mobile(&self) -> bool {
        self.traits.contains(Traits::MOBILE)
    }

    pub fn is_robot(&self) -> bool {
        self.traits.contains(Traits::ROBOT)
    }

    /// Best effort: only `WOW64` and `Win64` markers are recognized.
    pub fn is_64bit(&self) -> bool {
        self.traits.contains(Traits::X64)
    }

    /// The older release an IE 8+ is emulating, if any.
    pub fn compatibility_view(&self) -> Option<&CompatibilityView> {
        self.compatibility_view.as_ref()
    }

    pub fn is_in_ie_compatibility_view(&self) -> bool {
        self.compatibility_view.is_some()
    }

    pub fn is_aol(&self) -> bool {
        self.aol.is_some()
    }

    /// `Some` for AOL clients; the version itself may be unknown.
    pub fn aol_version(&self) -> Option<&Version> {
        self.aol.as_ref()
    }

    /// Whether the Google Chrome Frame plugin is announced.
    pub fn is_chrome_frame(&self) -> bool {
        cobrand::is_chrome_frame(&UaText::new(&self.user_agent))
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl fmt::Display for Detection {
    /// One `Label: value` line per field; client edition names for Windows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let not_applicable = "Not applicable";
        let emulated = self
            .compatibility_view
            .as_ref()
            .map_or_else(|| not_applicable.to_string(), |cv| format!("{} {}", cv.browser, cv.version));
        let aol = self.aol.as_ref().map_or_else(|| not_applicable.to_string(), |v| v.to_string());
        let platform_name = self.platform_version_name(WindowsFlavor::Client);

        writeln!(f, "User agent: {}", self.user_agent)?;
        writeln!(f, "Browser name: {}", self.browser)?;
        writeln!(f, "Browser version: {}", self.version)?;
        writeln!(f, "Platform family: {}", self.platform)?;
        writeln!(f, "Platform version: {}", self.platform_version)?;
        writeln!(f, "Platform version name: {}", platform_name.as_deref().unwrap_or(crate::UNKNOWN))?;
        writeln!(f, "Platform is 64-bit: {}", yes_no(self.is_64bit()))?;
        writeln!(f, "Is mobile: {}", yes_no(self.is_mobile()))?;
        writeln!(f, "Is robot: {}", yes_no(self.is_robot()))?;
        writeln!(f, "IE is in compatibility view: {}", yes_no(self.is_in_ie_compatibility_view()))?;
        writeln!(f, "Emulated IE version: {emulated}")?;
        writeln!(f, "Is Chrome Frame: {}", yes_no(self.is_chrome_frame()))?;
        writeln!(f, "Is AOL optimized: {}", yes_no(self.is_aol()))?;
        write!(f, "AOL version: {aol}")
    }
}

/// Flat JSON shape of a [`Detection`].
#[derive(Serialize)]
struct DetectionRecord<'a> {
    user_agent: &'a str,
    browser: Browser,
    version: &'a Version,
    platform: Platform,
    platform_version: &'a PlatformVersion,
    platform_version_name: Option<String>,
    is_64bit: bool,
    is_mobile: bool,
    is_robot: bool,
    compatibility_view: Option<&'a CompatibilityView>,
    is_chrome_frame: bool,
    is_aol: bool,
    aol_version: Option<&'a Version>,
}

impl Serialize for Detection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DetectionRecord {
            user_agent: &self.user_agent,
            browser: self.browser,
            version: &self.version,
            platform: self.platform,
            platform_version: &self.platform_version,
            platform_version_name: self.platform_version_name(WindowsFlavor::Client),
            is_64bit: self.is_64bit(),
            is_mobile: self.is_mobile(),
            is_robot: self.is_robot(),
            compatibility_view: self.compatibility_view(),
            is_chrome_frame: self.is_chrome_frame(),
            is_aol: self.is_aol(),
            aol_version: self.aol_version(),
        }
        .serialize(serializer)
    }
}

/// Additional details returned by [`detect_verbose`].
///
/// Meant for debugging rule order and profiling; [`detect`] does not
/// allocate these.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionDetails {
    /// Name of the browser rule that matched, if any.
    pub matched_rule: Option<String>,
    /// Rules whose triggers appear in the input, in chain order.
    pub active_rules: Vec<String>,
    /// Productions called before the chain stopped.
    pub rules_evaluated: usize,
    /// Rules skipped by the trigger gate before the chain stopped.
    pub rules_skipped: usize,
    /// Total elapsed time.
    pub total: Duration,
    /// Time per stage.
    pub browser: Duration,
    pub platform: Duration,
    pub cobrand: Duration,
}

/// Result from [`detect_verbose`].
#[derive(Debug, Clone, Serialize)]
pub struct DetectionVerbose {
    pub detection: Detection,
    pub details: DetectionDetails,
}

/// Classify `user_agent` with the default rule chain.
///
/// # Example
/// ```
/// use uaclass::{Browser, Platform, detect};
///
/// let d = detect("Mozilla/5.0 (X11; Linux x86_64; rv:38.0) Gecko/20100101 Firefox/38.0");
/// assert_eq!(d.browser(), Browser::Firefox);
/// assert_eq!(d.version().as_str(), "38.0");
/// assert_eq!(d.platform(), Platform::Linux);
/// ```
pub fn detect(user_agent: &str) -> Detection {
    engine::Detector::new(user_agent, &DEFAULT_RULES).run()
}

/// Like [`detect`], treating `None` as an empty UA.
pub fn detect_opt(user_agent: Option<&str>) -> Detection {
    detect(user_agent.unwrap_or_default())
}

/// Classify `user_agent` and return extra (compact) debug details.
pub fn detect_verbose(user_agent: &str) -> DetectionVerbose {
    let detector = engine::Detector::new(user_agent, &DEFAULT_RULES);
    let active_rules = detector.active_rule_names().into_iter().map(|s| s.to_string()).collect();

    let run = detector.run_with_metrics();
    let browser = &run.metrics.browser;

    let details = DetectionDetails {
        matched_rule: browser.matched_rule.map(|s| s.to_string()),
        active_rules,
        rules_evaluated: browser.rules_evaluated,
        rules_skipped: browser.rules_skipped,
        total: run.metrics.total,
        browser: browser.duration,
        platform: run.metrics.platform,
        cobrand: run.metrics.cobrand,
    };

    DetectionVerbose { detection: run.detection, details }
}

/// Names of the browser rules in precedence order.
pub fn rule_names() -> Vec<&'static str> {
    DEFAULT_RULES.iter().map(|rule| rule.name).collect()
}
