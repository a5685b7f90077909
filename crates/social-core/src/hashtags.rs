//! Hashtag normalization

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Canonicalize raw tags into one space-joined tag string.
///
/// Whitespace inside a tag is removed, a `#` is prepended when missing and
/// empty entries are dropped. Duplicates are compared exactly (case-sensitive)
/// and only the first occurrence is kept.
pub fn normalize_hashtags<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut deduped: Vec<String> = Vec::new();

    for raw in tags {
        let tag = WHITESPACE.replace_all(raw.as_ref(), "");
        if tag.is_empty() || tag == "#" {
            continue;
        }

        let tag = if tag.starts_with('#') {
            tag.into_owned()
        } else {
            format!("#{}", tag)
        };

        if !deduped.contains(&tag) {
            deduped.push(tag);
        }
    }

    deduped.join(" ")
}

/// Normalize a comma-separated hint string such as `"edm, party,#live"`
pub fn normalize_hint(hint: &str) -> String {
    normalize_hashtags(hint.split(','))
}
