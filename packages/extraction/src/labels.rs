//! Label-pattern extraction: explicit "Field: value" labels in description
//! text.
//!
//! Two forms per field, tried in order:
//!
//! 1. **Multiline** - the label starts a line (`^Company: Acme`). Least
//!    ambiguous; the capture runs to the next known label or end of line.
//! 2. **Inline** - the label sits mid-line (`Job Title: X Company: Y`). The
//!    capture is lazy and bounded by the alternation of every known label,
//!    so one field's value never swallows the next inline label.
//!
//! "Company Location" is a distinct label from the generic "Location"/"Work
//! Location" pair and belongs to neither extracted field; it is listed as
//! the most specific alternative in the company and location patterns so it
//! wins the match at that position, and matches carrying it are skipped.
//! "Experience" and "Job Description" are boundary-only labels: they bound
//! captures but are never extracted.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::JobField;

/// Every label known to the parser, longest-first. Used as the capture
/// boundary in the inline form.
const BOUNDARY: &str = r"Candidate\s+Work\s+Location|Job\s+Description|Company\s+Location|Company\s+Name|Work\s+Location|Job\s*Title|Experience|Compensation|Company|Employer|Location|Salary|Pay";

/// Field-specific label alternations, most specific first.
const TITLE_LABELS: &str = r"Job\s*Title";
const COMPANY_LABELS: &str = r"Company\s+Location|Company\s+Name|Company|Employer";
const LOCATION_LABELS: &str = r"Company\s+Location|Candidate\s+Work\s+Location|Work\s+Location|Location";
const SALARY_LABELS: &str = r"Pay|Salary|Compensation";

struct LabelPattern {
    multiline: Regex,
    inline: Regex,
}

impl LabelPattern {
    /// Compile both forms for a label alternation.
    ///
    /// `require_colon` tightens the multiline form; bare "Pay 500" lines
    /// are too ambiguous to accept for salary.
    fn compile(labels: &str, require_colon: bool) -> Self {
        let colon = if require_colon { ":" } else { ":?" };
        let multiline = Regex::new(&format!(
            r"(?mi)^\s*({labels})\s*{colon}\s*([^\n]+?)(?:\s+(?:{BOUNDARY})\s*:?|$)"
        ))
        .expect("static multiline label pattern");
        let inline = Regex::new(&format!(
            r"(?i)\b({labels})\s*:?\s*([^\n]+?)(?:\s+(?:{BOUNDARY})\s*:?|$)"
        ))
        .expect("static inline label pattern");
        Self { multiline, inline }
    }
}

lazy_static! {
    static ref TITLE: LabelPattern = LabelPattern::compile(TITLE_LABELS, false);
    static ref COMPANY: LabelPattern = LabelPattern::compile(COMPANY_LABELS, false);
    static ref LOCATION: LabelPattern = LabelPattern::compile(LOCATION_LABELS, false);
    static ref SALARY: LabelPattern = LabelPattern::compile(SALARY_LABELS, true);
}

fn pattern_for(field: JobField) -> &'static LabelPattern {
    match field {
        JobField::Title => &TITLE,
        JobField::Company => &COMPANY,
        JobField::Location => &LOCATION,
        JobField::Salary => &SALARY,
    }
}

/// True when a matched label is the "Company Location" label, which bounds
/// captures but is extracted by no field.
fn is_company_location(label: &str) -> bool {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        == "company location"
}

fn first_accepted(regex: &Regex, description: &str) -> Option<String> {
    let mut at = 0;
    while let Some(caps) = regex.captures_at(description, at) {
        let label = caps.get(1).expect("label group participates in every match");
        if !is_company_location(label.as_str()) {
            if let Some(value) = caps.get(2) {
                let value = value.as_str().trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
        // The capture boundary consumes the next label. Resume right after
        // this match's own label, not after the whole match, so a label
        // consumed as a boundary is still found.
        at = label.end();
    }
    None
}

/// Extract a field from an explicit label, multiline form first.
///
/// Returns the raw matched value; the caller applies validity filtering.
pub fn extract_labeled(description: &str, field: JobField) -> Option<String> {
    extract_multiline(description, field).or_else(|| extract_inline(description, field))
}

/// Start-of-line label form (`^Company: Acme Inc`).
pub fn extract_multiline(description: &str, field: JobField) -> Option<String> {
    first_accepted(&pattern_for(field).multiline, description)
}

/// Mid-line label form, bounded by the next known label.
pub fn extract_inline(description: &str, field: JobField) -> Option<String> {
    first_accepted(&pattern_for(field).inline, description)
}
