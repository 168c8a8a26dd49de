// A tag opens at any `<` not followed by whitespace and runs to the next
// unquoted `>`, or to the end of the text if it never closes.
static TAG_REGEX: once_cell::sync::Lazy<regex::Regex> = once_cell::sync::Lazy::new(|| {
    regex::Regex::new(
        r#"(?s)<!--.*?(?:-->|$)|<(?:(?:[^\s<>"']|"[^"]*(?:"|$)|'[^']*(?:'|$))(?:[^>"']|"[^"]*(?:"|$)|'[^']*(?:'|$))*)?(?:>|$)"#,
    )
    .unwrap()
});

/// Removes HTML tags and comments from `s`, keeping the text between them.
///
/// Only a `<` followed by whitespace is kept as text (`a < b`).
pub fn strip_tags(s: &str) -> String {
    TAG_REGEX.replace_all(s, "").into_owned()
}
