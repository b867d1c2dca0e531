macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

macro_rules! rule {
    (
        name: $name:expr,
        triggers: $triggers:expr,
        prod: |$ua:ident| $body:block
        $(,)?
    ) => {{
        $crate::Rule {
            name: $name,
            triggers: $triggers,
            production: Box::new(move |$ua: &$crate::UaText<'_>| -> Option<$crate::BrowserMatch> { $body }),
        }
    }};
}
