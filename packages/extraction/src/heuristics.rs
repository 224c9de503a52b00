//! Heuristic inference from natural-language phrasing.
//!
//! Last-resort signals for descriptions that carry no explicit labels:
//! "we are looking for an X", "join Y as a Z", "$A - $B per year". These
//! are deliberately low precision and rank below label-pattern results in
//! the merge step.

use lazy_static::lazy_static;
use regex::Regex;

use crate::normalize::normalize_title;

lazy_static! {
    // Capture runs to a sentence terminator or a connector word; the
    // connectors usually introduce a second clause ("... to join our team").
    static ref TITLE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bwe\s+are\s+looking\s+for\s+an?\s+([^\n.]+?)\b(?:\.|\n| to | for )").unwrap(),
        Regex::new(r"(?i)\blooking\s+for\s+an?\s+([^\n.]+?)\b(?:\.|\n| to | for )").unwrap(),
        Regex::new(r"(?i)\bseeking\s+an?\s+([^\n.]+?)\b(?:\.|\n| to | for )").unwrap(),
        Regex::new(r"(?i)\bjoin\s+[^\n.]+?\s+as\s+an?\s+([^\n.]+?)\b(?:\.|\n|!| to | for )").unwrap(),
        Regex::new(r"(?i)\bas\s+an?\s+([^\n.]+?)\b(?:\.|\n|!| to | for )").unwrap(),
    ];

    static ref COMPANY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)\bjoin\s+([^\n.]+?)\s+as\s+an?\s+[^\n.]+").unwrap(),
        Regex::new(r"(?i)\bjoin\s+([^\n.]+?)(?:\.|\n|!)").unwrap(),
        // Capitalized phrase after "at" - the weakest signal of the three
        Regex::new(r"\b[Aa]t\s+([A-Z][A-Za-z0-9&.,\- ]{2,})").unwrap(),
    ];

    static ref LOCATION_PATTERN: Regex =
        Regex::new(r"(?i)\b(remote|hybrid|on\s*-?\s*site|onsite|work\s+from\s+home|in\s+person)\b")
            .unwrap();

    static ref SALARY_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"(?i)₹([\d,]+\.?\d*)\s*-\s*₹([\d,]+\.?\d*)\s*(?:a|per)?\s*(month|year)").unwrap(),
        Regex::new(r"(?i)\$([\d,]+\.?\d*)\s*-\s*\$([\d,]+\.?\d*)\s*(?:a|per)?\s*(month|year)").unwrap(),
        Regex::new(r"(?i)([\d,]+\.?\d*)\s*-\s*([\d,]+\.?\d*)\s*(per month|per year|monthly|yearly)").unwrap(),
        Regex::new(r"(?i)\bPay\s*:\s*([₹$]?[\d,.\s\-]+(?:per month|per year|monthly|yearly)?)").unwrap(),
        Regex::new(r"(?i)\bSalary\s*:\s*([₹$]?[\d,.\s\-]+(?:per month|per year|monthly|yearly)?)").unwrap(),
    ];

    static ref SALARY_LABEL_PREFIX: Regex = Regex::new(r"(?i)^(?:Pay|Salary)\s*:\s*").unwrap();
}

/// Infer a job title from phrasing like "we are looking for an X".
///
/// The first pattern whose capture falls in (3, 120) characters wins; the
/// capture is passed through title normalization (article/clause stripping).
pub fn infer_title(description: &str) -> Option<String> {
    for pattern in TITLE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(description) {
            if let Some(candidate) = caps.get(1) {
                let candidate = candidate.as_str().trim();
                if candidate.len() > 3 && candidate.len() < 120 {
                    return normalize_title(candidate);
                }
            }
        }
    }
    None
}

/// Infer a company from "join X as a Y", "join X.", or "at CapitalizedPhrase".
pub fn infer_company(description: &str) -> Option<String> {
    for pattern in COMPANY_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(description) {
            if let Some(candidate) = caps.get(1) {
                let candidate = candidate.as_str().trim();
                if candidate.len() > 2 && candidate.len() < 120 {
                    return Some(candidate.to_string());
                }
            }
        }
    }
    None
}

/// Infer a work arrangement, mapped onto exactly five canonical labels.
///
/// Any "onsite"/"on-site" variant lands in the "On-site" bucket.
pub fn infer_location(description: &str) -> Option<String> {
    let matched = LOCATION_PATTERN
        .captures(description)?
        .get(1)?
        .as_str()
        .to_lowercase();
    let canonical = if matched.contains("remote") {
        "Remote"
    } else if matched.contains("hybrid") {
        "Hybrid"
    } else if matched.starts_with("work") {
        "Work from home"
    } else if matched.starts_with("in") {
        "In person"
    } else {
        "On-site"
    };
    Some(canonical.to_string())
}

/// Extract a salary from currency/range phrasing.
///
/// Returns the full matched text with any leading `Pay:`/`Salary:` label
/// stripped.
pub fn extract_salary(description: &str) -> Option<String> {
    for pattern in SALARY_PATTERNS.iter() {
        if let Some(m) = pattern.find(description) {
            let stripped = SALARY_LABEL_PREFIX.replace(m.as_str(), "");
            let stripped = stripped.trim();
            if !stripped.is_empty() {
                return Some(stripped.to_string());
            }
        }
    }
    None
}
