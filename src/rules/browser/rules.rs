//! The browser rule chain.
//!
//! [`get`] returns the rules in precedence order. Detection stops at the first
//! rule that produces a match, so the order is part of the behavior: many UAs
//! carry tokens of several browsers (every IE claims to be Mozilla, Safari UAs
//! say "like Gecko", Chrome-based Opera also says Chrome). Moving a rule
//! changes what those UAs classify as.

use std::cmp::Ordering;

use crate::rules::browser::build_tables::{safari_build_to_version, webkit_build_to_version};
use crate::rules::browser::helpers::{first_simple_token, simple_rule, simple_token, version_tagged};
use crate::version::{clean_version, compare_versions, parse_int};
use crate::{Browser, BrowserMatch, CompatibilityView, Rule, Traits, UaText, Version};

// --- IE-based pretenders ------------------------------------------------------

fn rule_msn_tv() -> Rule {
    simple_rule("msn tv", &["webtv"], Browser::MsnTv, Traits::empty())
}

// --- Internet Explorer --------------------------------------------------------

/// IE Mobile, IE 1.x, Trident-based IE 8+ and legacy MSIE 2–7.
fn rule_internet_explorer() -> Rule {
    rule! {
        name: "internet explorer",
        triggers: &["IEMobile", "MSPIE", "Microsoft Internet Explorer", "MSIE", "Trident"],
        prod: |ua| {
            if let Some(raw) = first_simple_token(ua, &["IEMobile", "MSPIE"], "/") {
                return Some(BrowserMatch::new(Browser::InternetExplorerMobile, &raw, Traits::MOBILE));
            }

            // These send IE-compatible UAs; only IE Mobile above may claim them.
            if ua.contains_any(&["Opera", "BlackBerry", "Nokia"]) {
                return None;
            }

            if let Some(raw) = simple_token(ua, "Microsoft Internet Explorer", "/") {
                let mut m = BrowserMatch::new(Browser::InternetExplorer, &raw, Traits::empty());
                if m.version.is_unknown() {
                    let version = if regex!(r"(?i)308|425|426|474|0b1").is_match(ua.raw()) { "1.5" } else { "1.0" };
                    m.version = Version::parse(version);
                }
                return Some(m);
            }

            if ua.contains_any(&["MSIE", "Trident"]) { Some(trident_or_msie(ua)) } else { None }
        },
    }
}

fn trident_or_msie(ua: &UaText<'_>) -> BrowserMatch {
    if ua.contains("Trident") {
        // IE 11+ dropped the MSIE token and reports its version after `rv:`.
        if ua.contains("rv:") {
            let raw = simple_token(ua, "Trident", "rv:").unwrap_or_default();
            return BrowserMatch::new(Browser::InternetExplorer, &raw, Traits::empty());
        }

        if let Some(version) = version_from_trident(ua) {
            let mut m = BrowserMatch::new(Browser::InternetExplorer, &version, Traits::empty());
            m.compatibility_view = emulated_msie(ua)
                .filter(|emulated| compare_versions(&version, emulated) != Ordering::Equal)
                .map(|emulated| CompatibilityView { browser: Browser::InternetExplorer, version: Version::parse(&emulated) });
            return m;
        }
    }

    BrowserMatch::new(Browser::InternetExplorer, &highest_msie(ua).unwrap_or_default(), Traits::empty())
}

/// `Trident/N` shipped with IE `N + 4` (Trident 4.0 is IE 8).
fn version_from_trident(ua: &UaText<'_>) -> Option<String> {
    let caps = regex!(r"(?i)Trident/(\d+)").captures(ua.raw())?;
    let ie = parse_int(caps.get(1)?.as_str()).saturating_add(4);
    (ie >= 8).then(|| format!("{ie}.0"))
}

/// Lowest `MSIE x.y` token: the version emulated in compatibility view.
fn emulated_msie(ua: &UaText<'_>) -> Option<String> {
    regex!(r"(?i)MSIE\s*([^\s;$]+)")
        .captures_iter(ua.raw())
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .reduce(|lowest, current| if compare_versions(lowest, current) == Ordering::Greater { current } else { lowest })
        .map(str::to_string)
}

/// Highest `MSIE x.y` token: the real version of a pre-Trident IE.
fn highest_msie(ua: &UaText<'_>) -> Option<String> {
    regex!(r"(?i)MSIE\s+([^\s;$]+)")
        .captures_iter(ua.raw())
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .reduce(|highest, current| if compare_versions(highest, current) == Ordering::Less { current } else { highest })
        .map(str::to_string)
}

// --- Opera ----------------------------------------------------------------------

/// Opera Mobile, Opera Mini, Presto-era Opera and Chrome-based Opera (`OPR/`).
fn rule_opera() -> Rule {
    rule! {
        name: "opera",
        triggers: &["Opera", "OPR/"],
        prod: |ua| {
            if let Some(raw) = version_tagged(ua, &["Opera Mobi"]) {
                return Some(BrowserMatch::new(Browser::OperaMobile, &raw, Traits::MOBILE));
            }
            if let Some(raw) = simple_token(ua, "Opera Mini", "/") {
                return Some(BrowserMatch::new(Browser::OperaMini, &raw, Traits::MOBILE));
            }

            if let Some(raw) = version_tagged(ua, &["Opera"]) {
                let tagged = BrowserMatch::new(Browser::Opera, &raw, Traits::empty());
                if tagged.version.is_known() {
                    return Some(tagged);
                }
                // Opera < 10 has no Version token: "Opera/9.64" or "Opera 9.64".
                return simple_token(ua, "Opera", "/").map(|raw| BrowserMatch::new(Browser::Opera, &raw, Traits::empty()));
            }

            if ua.contains("Chrome") {
                return simple_token(ua, "OPR/", "/").map(|raw| BrowserMatch::new(Browser::Opera, &raw, Traits::empty()));
            }
            None
        },
    }
}

// --- Chromium -------------------------------------------------------------------

fn rule_edge() -> Rule {
    simple_rule("edge", &["Edge"], Browser::Edge, Traits::empty())
}

fn rule_chrome() -> Rule {
    simple_rule("chrome", &["Chrome"], Browser::Chrome, Traits::empty())
}

// --- Browsers with Mozilla-style UAs --------------------------------------------

fn rule_omniweb() -> Rule {
    rule! {
        name: "omniweb",
        triggers: &["OmniWeb"],
        prod: |ua| {
            let mut m = BrowserMatch::new(Browser::OmniWeb, &simple_token(ua, "OmniWeb", "/")?, Traits::empty());
            // Some releases send "OmniWeb/v563.15".
            m.version = m.version.map_known(|v| match v.get(..1) {
                Some(first) if first.eq_ignore_ascii_case("v") => v[1..].to_string(),
                _ => v.to_string(),
            });
            Some(m)
        },
    }
}

fn rule_icab() -> Rule {
    simple_rule("icab", &["iCab"], Browser::ICab, Traits::empty())
}

fn rule_net_positive() -> Rule {
    simple_rule("netpositive", &["NetPositive"], Browser::NetPositive, Traits::empty())
}

/// Netscape 6–9 by name, Netscape 1–4 by a bare `Mozilla/x.y` prefix.
fn rule_netscape() -> Rule {
    rule! {
        name: "netscape",
        triggers: &["Netscape", "Navigator", "Mozilla"],
        prod: |ua| {
            if ua.contains_any(&["BlackBerry", "Nokia"]) {
                return None;
            }
            if let Some(raw) = first_simple_token(ua, &["Netscape", "Navigator", "Netscape6"], "/") {
                return Some(BrowserMatch::new(Browser::Netscape, &raw, Traits::empty()));
            }
            legacy_netscape_version(ua).map(|raw| BrowserMatch::new(Browser::Netscape, &raw, Traits::empty()))
        },
    }
}

/// `Mozilla/4.04 [en] (Win95; I)` style UAs. Gecko browsers (`rv:`) and
/// `Mozilla/5.0` are excluded since Netscape 5 never shipped.
fn legacy_netscape_version(ua: &UaText<'_>) -> Option<String> {
    if ua.contains("rv:") {
        return None;
    }
    let token = ua.tail_from("Mozilla")?.split('/').nth(1)?.split(' ').next().unwrap_or("");

    let major = parse_int(token.split('.').next().unwrap_or(""));
    if !(1..5).contains(&major) {
        return None;
    }

    let lower = token.to_ascii_lowercase();
    let cut = token.len().saturating_sub(4);
    let version = if lower.ends_with("-sgi") {
        token[..cut].to_string()
    } else if lower.ends_with("gold") {
        format!("{} Gold", &token[..cut])
    } else {
        token.to_string()
    };
    Some(version)
}

// --- Firefox and derivatives ----------------------------------------------------

fn rule_icecat() -> Rule {
    simple_rule("icecat", &["IceCat"], Browser::IceCat, Traits::empty())
}

fn rule_iceweasel() -> Rule {
    simple_rule("iceweasel", &["Iceweasel"], Browser::IceWeasel, Traits::empty())
}

fn rule_galeon() -> Rule {
    simple_rule("galeon", &["Galeon"], Browser::Galeon, Traits::empty())
}

fn rule_firefox() -> Rule {
    rule! {
        name: "firefox",
        triggers: &["Firefox"],
        prod: |ua| {
            // Safari UAs can carry Firefox-shaped tokens; Safari wins those.
            if ua.contains("Safari") {
                return None;
            }
            let caps = regex!(r"(?i).*Firefox[ (/]*([a-z0-9.-]*)").captures(ua.raw())?;
            let raw = caps.get(1).map_or("", |m| m.as_str());
            Some(BrowserMatch::new(Browser::Firefox, raw, Traits::empty()))
        },
    }
}

// --- Other desktop browsers -----------------------------------------------------

fn rule_konqueror() -> Rule {
    simple_rule("konqueror", &["Konqueror"], Browser::Konqueror, Traits::empty())
}

fn rule_lynx() -> Rule {
    simple_rule("lynx", &["Lynx"], Browser::Lynx, Traits::empty())
}

fn rule_amaya() -> Rule {
    simple_rule("amaya", &["amaya"], Browser::Amaya, Traits::empty())
}

// --- Mobile -----------------------------------------------------------------------

fn rule_android() -> Rule {
    simple_rule("android", &["Android"], Browser::Android, Traits::MOBILE)
}

/// BlackBerry Tablet OS, BlackBerry 6/7/10 (`Version/` token), BlackBerry
/// 4.2–5.0 (`BlackBerry9000/5.0.0.93`), then a version-less fallback.
fn rule_blackberry() -> Rule {
    rule! {
        name: "blackberry",
        triggers: &["RIM Tablet OS", "BlackBerry", "BB10"],
        prod: |ua| {
            if let Some(raw) = simple_token(ua, "RIM Tablet OS", "/") {
                return Some(BrowserMatch::new(Browser::BlackBerryTabletOs, &raw, Traits::MOBILE));
            }

            let candidates = [version_tagged(ua, &["BlackBerry", "BB10"]), simple_token(ua, "BlackBerry", "/")];
            let mut fallback = None;
            for raw in candidates.into_iter().flatten() {
                let m = BrowserMatch::new(Browser::BlackBerry, &raw, Traits::MOBILE);
                if m.version.is_known() {
                    return Some(m);
                }
                fallback = Some(m);
            }
            fallback
        },
    }
}

/// Nokia browsers. A few S60 5th edition devices only identify by model.
fn rule_nokia() -> Rule {
    rule! {
        name: "nokia",
        triggers: &["Nokia", "BrowserNG", "Series60", "S60", "S40OviBrowser"],
        prod: |ua| {
            if ua.contains_any(&["Nokia5800", "Nokia5530", "Nokia5230"]) {
                return Some(BrowserMatch::new(Browser::Nokia, "7.0", Traits::MOBILE));
            }
            first_simple_token(ua, &["NokiaBrowser", "BrowserNG", "Series60", "S60", "S40OviBrowser"], "/")
                .map(|raw| BrowserMatch::new(Browser::Nokia, &raw, Traits::MOBILE))
        },
    }
}

// --- Robots -----------------------------------------------------------------------

fn rule_googlebot() -> Rule {
    rule! {
        name: "googlebot",
        triggers: &["Googlebot"],
        prod: |ua| {
            let mut m = BrowserMatch::new(Browser::Googlebot, &simple_token(ua, "Googlebot", "/")?, Traits::ROBOT);
            if ua.contains("googlebot-mobile") {
                m.traits |= Traits::MOBILE;
            }
            Some(m)
        },
    }
}

fn rule_bingbot() -> Rule {
    simple_rule("bingbot", &["bingbot"], Browser::Bingbot, Traits::ROBOT)
}

fn rule_msnbot() -> Rule {
    simple_rule("msnbot", &["msnbot"], Browser::MsnBot, Traits::ROBOT)
}

fn rule_slurp() -> Rule {
    simple_rule("yahoo! slurp", &["Yahoo! Slurp"], Browser::Slurp, Traits::ROBOT)
}

fn rule_yahoo_multimedia() -> Rule {
    simple_rule("yahoo! multimedia", &["Yahoo-MMCrawler"], Browser::YahooMultimedia, Traits::ROBOT)
}

/// W3C validators. Each service gets its own version prefix so they can be
/// told apart; the Markup Validator has none.
const W3C_SERVICES: &[(&str, &str)] =
    &[("W3C-checklink", "Link-"), ("Jigsaw", "CSS-"), ("W3C-mobileOK", "mobileOK-"), ("W3C_Validator", "")];

fn rule_w3c_validator() -> Rule {
    rule! {
        name: "w3c validator",
        triggers: &["W3C-checklink", "Jigsaw", "W3C-mobileOK", "W3C_Validator"],
        prod: |ua| {
            W3C_SERVICES.iter().find_map(|(token, prefix)| {
                let mut m = BrowserMatch::new(Browser::W3cValidator, &simple_token(ua, token, "/")?, Traits::ROBOT);
                m.version = m.version.map_known(|v| format!("{prefix}{v}"));
                Some(m)
            })
        },
    }
}

// --- WebKit -----------------------------------------------------------------------

type Extractor = fn(&UaText<'_>) -> Option<String>;

/// Safari version sources, most precise first.
const SAFARI_EXTRACTORS: &[(&str, Extractor)] =
    &[("version token", safari_version_token), ("safari build", safari_build), ("webkit build", webkit_build)];

fn safari_version_token(ua: &UaText<'_>) -> Option<String> {
    version_tagged(ua, &["Safari", "AppleWebKit"]).map(|raw| clean_version(&raw))
}

fn safari_build(ua: &UaText<'_>) -> Option<String> {
    let caps = regex!(r"(?i).*Safari[ (/]*([a-z0-9.-]*)").captures(ua.raw())?;
    safari_build_to_version(caps.get(1)?.as_str()).map(str::to_string)
}

fn webkit_build(ua: &UaText<'_>) -> Option<String> {
    let caps = regex!(r"(?i).*AppleWebKit[ (/]*([a-z0-9.-]*)").captures(ua.raw())?;
    webkit_build_to_version(caps.get(1)?.as_str()).map(str::to_string)
}

/// Safari 3+ (`Version/` token) and Safari 0.8–2.0.4 (build numbers only).
fn rule_safari() -> Rule {
    rule! {
        name: "safari",
        triggers: &["Safari", "AppleWebKit"],
        prod: |ua| {
            if !ua.contains_any(&["Safari", "AppleWebKit"]) {
                return None;
            }
            let version = SAFARI_EXTRACTORS
                .iter()
                .find_map(|(source, extract)| {
                    let version = extract(ua).filter(|v| !v.is_empty())?;
                    tracing::trace!(source, version = %version, "safari version source");
                    Some(version)
                })
                .unwrap_or_default();
            Some(BrowserMatch::new(Browser::Safari, &version, Traits::empty()))
        },
    }
}

// --- Deprecated names and the catch-all -------------------------------------------

fn rule_firebird() -> Rule {
    simple_rule("firebird", &["Firebird"], Browser::Firebird, Traits::empty())
}

fn rule_phoenix() -> Rule {
    simple_rule("phoenix", &["Phoenix"], Browser::Phoenix, Traits::empty())
}

/// Almost every UA starts with `Mozilla/`, so this only runs once everything
/// else has failed. The version is whatever follows `rv:`, if anything.
fn rule_mozilla() -> Rule {
    rule! {
        name: "mozilla",
        triggers: &["Mozilla"],
        prod: |ua| {
            simple_token(ua, "Mozilla", "rv:").map(|raw| BrowserMatch::new(Browser::Mozilla, &raw, Traits::empty()))
        },
    }
}

/// All browser rules, in precedence order.
pub fn get() -> Vec<Rule> {
    vec![
        rule_msn_tv(),
        rule_internet_explorer(),
        rule_opera(),
        rule_edge(),
        rule_chrome(),
        rule_omniweb(),
        rule_icab(),
        rule_net_positive(),
        rule_netscape(),
        rule_icecat(),
        rule_iceweasel(),
        rule_galeon(),
        rule_firefox(),
        rule_konqueror(),
        rule_lynx(),
        rule_amaya(),
        rule_android(),
        rule_blackberry(),
        rule_nokia(),
        rule_googlebot(),
        rule_bingbot(),
        rule_msnbot(),
        rule_slurp(),
        rule_yahoo_multimedia(),
        rule_w3c_validator(),
        rule_safari(),
        rule_firebird(),
        rule_phoenix(),
        rule_mozilla(),
    ]
}
