//! The detector: runs the three stages over one input.
//!
//! ```text
//! Detector::new(input, &rules)
//!        │
//!        ├─ browser stage   walk rules in order, skip gated-out ones,
//!        │                  stop at the first production that returns Some
//!        ├─ platform stage  table scan + x64 + Windows version
//!        └─ cobrand stage   AOL marker
//!        │
//!        v
//!   DetectionBuilder::build -> Detection
//! ```
//!
//! Stage order matters in one place only: the platform stage runs after the
//! browser stage so it can add the mobile flag on top of what the browser
//! rule set.
//!
//! ## Debugging
//!
//! Run with `RUST_LOG=uaclass=trace` to see every rule evaluated and the
//! result of each stage.

use super::builder::DetectionBuilder;
use super::metrics::{BrowserStageMetrics, RunMetrics, RunResult};
use super::trigger;
use crate::api::Detection;
use crate::rules::{cobrand, platform};
use crate::{BrowserMatch, Rule, UaText};
use std::time::Instant;
use tracing::{debug, trace};

/// Detector orchestrates applying `Rule`s to one User-Agent string.
///
/// Usage: create with `Detector::new(input, &rules)` then call `run()`.
#[derive(Debug)]
pub struct Detector<'a> {
    /// Input with its lowercased copy. Empty when the caller passed only
    /// whitespace.
    input: UaText<'a>,
    /// Browser rules, in precedence order.
    rules: &'a [Rule],
}

impl<'a> Detector<'a> {
    pub fn new(input: &'a str, rules: &'a [Rule]) -> Self {
        let input = if input.trim().is_empty() { "" } else { input };
        Detector { input: UaText::new(input), rules }
    }

    /// Names of the rules whose triggers appear in the input.
    pub fn active_rule_names(&self) -> Vec<&'static str> {
        trigger::active_rule_names(self.rules, &self.input)
    }

    pub fn run(&self) -> Detection {
        self.run_with_metrics().detection
    }

    pub fn run_with_metrics(&self) -> RunResult {
        let started = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut builder = DetectionBuilder::new(self.input.raw());

        if self.input.raw().is_empty() {
            debug!("empty user agent");
            metrics.total = started.elapsed();
            return RunResult { detection: builder.build(), metrics };
        }

        // Browser
        let stage = Instant::now();
        if let Some(m) = self.resolve_browser(&mut metrics.browser) {
            debug!(
                rule = metrics.browser.matched_rule.unwrap_or_default(),
                browser = %m.browser,
                version = %m.version,
                "browser stage matched"
            );
            builder.browser(m);
        } else {
            debug!(evaluated = metrics.browser.rules_evaluated, "browser stage found nothing");
        }
        metrics.browser.duration = stage.elapsed();

        // Platform
        let stage = Instant::now();
        let pm = platform::resolve(&self.input);
        debug!(platform = %pm.platform, version = %pm.version, mobile = pm.mobile, x64 = pm.x64, "platform stage");
        builder.platform(pm);
        metrics.platform = stage.elapsed();

        // Co-branding
        let stage = Instant::now();
        let aol = cobrand::resolve_aol(&self.input);
        if let Some(version) = &aol {
            debug!(version = %version, "aol marker");
        }
        builder.aol(aol);
        metrics.cobrand = stage.elapsed();

        metrics.total = started.elapsed();
        RunResult { detection: builder.build(), metrics }
    }

    fn resolve_browser(&self, stats: &mut BrowserStageMetrics) -> Option<BrowserMatch> {
        for rule in self.rules {
            if !trigger::is_active(rule, &self.input) {
                stats.rules_skipped += 1;
                continue;
            }

            stats.rules_evaluated += 1;
            let produced = (rule.production)(&self.input);
            trace!(rule = rule.name, matched = produced.is_some(), "browser rule");

            if produced.is_some() {
                stats.matched_rule = Some(rule.name);
                return produced;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Browser;

    #[test]
    fn first_match_stops_the_chain() {
        let rules = crate::rules::browser::rules::get();
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:38.0) Gecko/20100101 Firefox/38.0";
        let run = Detector::new(ua, &rules).run_with_metrics();

        assert_eq!(run.detection.browser(), Browser::Firefox);
        assert_eq!(run.metrics.browser.matched_rule, Some("firefox"));
        // netscape (rejected: rv:) then firefox
        assert_eq!(run.metrics.browser.rules_evaluated, 2);
        assert_eq!(run.metrics.browser.rules_evaluated + run.metrics.browser.rules_skipped, 13);
    }

    #[test]
    fn whitespace_input_is_empty() {
        let rules = crate::rules::browser::rules::get();
        let run = Detector::new(" \t\n", &rules).run_with_metrics();

        assert_eq!(run.detection.user_agent(), "");
        assert_eq!(run.metrics.browser.rules_evaluated, 0);
        assert_eq!(run.metrics.browser.matched_rule, None);
    }

    #[test]
    fn unknown_input_walks_the_whole_chain() {
        let rules = crate::rules::browser::rules::get();
        let run = Detector::new("curl/7.64.1", &rules).run_with_metrics();

        assert_eq!(run.detection.browser(), Browser::Unknown);
        assert_eq!(run.metrics.browser.rules_evaluated + run.metrics.browser.rules_skipped, rules.len());
    }
}
