//! Value normalization and validity filtering.
//!
//! Every extractor in the pipeline gates its candidates through these
//! functions before accepting them. They are pure: no side effects, no
//! shared state.

use lazy_static::lazy_static;
use regex::Regex;

/// Known placeholder/junk strings, compared case-insensitively after
/// normalization. A field equal to any of these is treated as missing.
///
/// Includes site names ("indeed"), our own defaulting placeholders (so a
/// previously-defaulted record can be re-extracted), and bare field names
/// that selectors sometimes grab from table headers.
const SENTINEL_VALUES: &[&str] = &[
    "indeed",
    "not specified",
    "not disclosed",
    "n/a",
    "na",
    "unknown",
    "unknown company",
    "job title",
    "company",
    "title",
    "location",
    "salary",
];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // A value that still contains "Company:" / "Location:" etc. is an
    // un-stripped label line, not real content.
    static ref LABEL_LEAKAGE: Regex = Regex::new(
        r"(?i)\b(?:job\s*title|company(?:\s+name)?|employer|location|pay|salary|compensation)\s*:"
    )
    .unwrap();

    static ref LEADING_ARTICLE: Regex = Regex::new(r"(?i)^(?:an?|the)\s+").unwrap();
    static ref LEADING_EXPERIENCED: Regex = Regex::new(r"(?i)^experienced\s+").unwrap();
    static ref TRAILING_CLAUSE: Regex = Regex::new(r"(?i)\s+(?:to|for)\s+.+$").unwrap();
}

/// Collapse whitespace runs to single spaces and trim.
///
/// Returns `None` when nothing is left.
pub fn normalize(value: &str) -> Option<String> {
    let collapsed = WHITESPACE.replace_all(value, " ");
    let trimmed = collapsed.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Normalize a job title candidate.
///
/// On top of [`normalize`], strips a leading article ("a"/"an"/"the") and
/// the word "experienced", and truncates a trailing " to ..."/" for ..."
/// clause ("Backend Engineer to join our team" -> "Backend Engineer").
/// Falls back to the plain normalized value when stripping empties the
/// string.
pub fn normalize_title(value: &str) -> Option<String> {
    let normalized = normalize(value)?;
    let cleaned = LEADING_ARTICLE.replace(&normalized, "");
    let cleaned = LEADING_EXPERIENCED.replace(&cleaned, "");
    let cleaned = TRAILING_CLAUSE.replace(&cleaned, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        Some(normalized)
    } else {
        Some(cleaned.to_string())
    }
}

/// True when a candidate value must be rejected.
///
/// A value is invalid when it normalizes to nothing, lowercase-matches a
/// sentinel, or shows label leakage.
pub fn is_invalid(value: &str) -> bool {
    let Some(normalized) = normalize(value) else {
        return true;
    };
    let lowered = normalized.to_lowercase();
    SENTINEL_VALUES.contains(&lowered.as_str()) || LABEL_LEAKAGE.is_match(&normalized)
}

/// [`is_invalid`] lifted over optional candidates.
pub fn is_invalid_opt(value: Option<&str>) -> bool {
    value.map_or(true, is_invalid)
}
