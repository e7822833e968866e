//! Case and whitespace canonicalization
//!
//! Every comparison between a user selection and a repository attribute goes
//! through [`normalize`] on both sides, so `" NASA "` and `"nasa"` are the same
//! value everywhere in the crate.

/// Lowercase and trim a single value
#[must_use]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize every value of a sequence, preserving order and length
#[must_use]
pub fn normalize_all<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(|v| normalize(v.as_ref())).collect()
}

/// Split a comma-separated list and normalize each item
///
/// Items that are empty after normalization are dropped, so `"nasa,,GSA "`
/// yields `["nasa", "gsa"]`.
#[must_use]
pub fn normalize_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize)
        .filter(|v| !v.is_empty())
        .collect()
}
