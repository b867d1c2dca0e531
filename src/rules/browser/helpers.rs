use std::borrow::Cow;

use crate::{Browser, BrowserMatch, Rule, Traits, UaText};

/// Replace every ASCII-case-insensitive occurrence of `from` in `text` with `to`.
pub fn replace_ignore_ascii_case(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }
    let lower = text.to_ascii_lowercase();
    let needle = from.to_ascii_lowercase();

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in lower.match_indices(&needle) {
        out.push_str(&text[last..start]);
        out.push_str(to);
        last = start + needle.len();
    }
    out.push_str(&text[last..]);
    out
}

/// Raw version for a UA where the name is directly followed by the version:
/// `"Name/1.0"`, or `"Name 1.0;"` in the older dialect.
///
/// Returns `None` when `name` does not appear at all. Otherwise returns the
/// text after the first `separator` that follows the name, up to the next
/// separator or space (possibly empty).
///
/// ```text
/// "Mozilla/5.0 (Linux; U; Android 2.2; en-us)"   name="Android" sep="/"
///                          Android 2.2;            (no "Android/": rewrite)
///                          Android/2.2;            -> "2.2;"
/// ```
pub fn simple_token(ua: &UaText<'_>, name: &str, separator: &str) -> Option<String> {
    if !ua.contains(name) {
        return None;
    }

    let dialect = format!("{name}{separator}");
    let text: Cow<'_, str> = if ua.contains(&dialect) {
        Cow::Borrowed(ua.raw())
    } else {
        Cow::Owned(replace_ignore_ascii_case(ua.raw(), &format!("{name} "), &dialect))
    };

    let start = text.to_ascii_lowercase().find(&name.to_ascii_lowercase())?;
    let version = text[start..].split(separator).nth(1).and_then(|rest| rest.split(' ').next()).unwrap_or("");
    Some(version.to_string())
}

/// First of `names` that matches as a [`simple_token`].
pub fn first_simple_token(ua: &UaText<'_>, names: &[&str], separator: &str) -> Option<String> {
    names.iter().find_map(|name| simple_token(ua, name, separator))
}

/// Raw version for a UA where the version sits in a separate `Version/x.y`
/// token (Safari, Opera, BlackBerry).
///
/// Returns `None` unless one of `names` appears. The version is empty when
/// there is no `Version/` token.
pub fn version_tagged(ua: &UaText<'_>, names: &[&str]) -> Option<String> {
    if !ua.contains_any(names) {
        return None;
    }
    let version = ua
        .tail_from("Version")
        .and_then(|tail| tail.split('/').nth(1))
        .and_then(|rest| rest.split(' ').next())
        .unwrap_or("");
    Some(version.to_string())
}

/// Build a rule that is a plain [`first_simple_token`] check over `names`.
pub fn simple_rule(name: &'static str, names: &'static [&'static str], browser: Browser, traits: Traits) -> Rule {
    rule! {
        name: name,
        triggers: names,
        prod: |ua| {
            first_simple_token(ua, names, "/").map(|raw| BrowserMatch::new(browser, &raw, traits))
        },
    }
}
