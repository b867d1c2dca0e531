//! Trigger gating.
//!
//! Every browser rule lists the tokens it cannot match without. Before a
//! production runs, the detector checks that at least one of them appears in
//! the UA; most UAs name only a handful of products, so most of the chain is
//! skipped with a substring search instead of running extractors and regexes.
//!
//! ```text
//! rule "konqueror"  triggers ["Konqueror"]
//! ua   "Mozilla/5.0 (Windows NT 10.0) ... Chrome/41.0 Safari/537.36"
//!      -> no trigger present -> production never called
//! ```
//!
//! Gating never changes the outcome, only the work done: a rule's triggers
//! must be a necessary condition for its production.

use crate::{Rule, UaText};

/// Whether `rule` may match `ua`. Rules without triggers are always active.
pub fn is_active(rule: &Rule, ua: &UaText<'_>) -> bool {
    rule.triggers.is_empty() || ua.contains_any(rule.triggers)
}

/// Names of every rule in `rules` that passes the gate for `ua`, in chain
/// order.
pub fn active_rule_names(rules: &[Rule], ua: &UaText<'_>) -> Vec<&'static str> {
    rules.iter().filter(|rule| is_active(rule, ua)).map(|rule| rule.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Browser, BrowserMatch, Traits};

    fn rule_with(triggers: &'static [&'static str]) -> Rule {
        rule! {
            name: "test",
            triggers: triggers,
            prod: |_ua| { Some(BrowserMatch::new(Browser::Lynx, "", Traits::empty())) },
        }
    }

    #[test]
    fn any_trigger_activates() {
        let ua = UaText::new("Lynx/2.8.8dev.3 libwww-FM/2.14");
        assert!(is_active(&rule_with(&["Links", "LYNX"]), &ua));
        assert!(!is_active(&rule_with(&["Konqueror"]), &ua));
    }

    #[test]
    fn empty_triggers_always_active() {
        assert!(is_active(&rule_with(&[]), &UaText::new("")));
    }

    #[test]
    fn names_keep_chain_order() {
        let rules = crate::rules::browser::rules::get();
        let ua = UaText::new("Mozilla/5.0 (X11; Linux x86_64; rv:38.0) Gecko/20100101 Firefox/38.0");
        assert_eq!(active_rule_names(&rules, &ua), vec!["netscape", "firefox", "mozilla"]);
    }
}
