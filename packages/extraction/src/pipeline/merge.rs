//! Merge/resolution policy.
//!
//! Per field, candidates are taken in a fixed precedence, first valid wins:
//!
//! 1. Label-pattern result (multiline form, then inline form)
//! 2. Heuristic inference result
//! 3. The incoming raw scraped value
//! 4. LLM fallback, filling only fields still invalid after 1-3
//!
//! followed by the company/location split heuristic and per-field
//! defaulting. Validity at every step is [`crate::normalize::is_invalid`].

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::ai::LlmJobFields;
use crate::heuristics;
use crate::labels;
use crate::normalize::{is_invalid, is_invalid_opt, normalize, normalize_title};
use crate::types::{JobField, RawScrapedFields};

lazy_static! {
    // A line that is purely a recognized field label (with or without its
    // value). Stripped from stored descriptions so they do not duplicate
    // the structured fields.
    static ref LABEL_LINE: Regex = Regex::new(
        r"(?mi)^\s*(?:Job\s*Title|Company\s+Name|Company\s+Location|Company|Employer|Candidate\s+Work\s+Location|Work\s+Location|Location|Pay|Salary|Compensation)\s*:?\s*.*$"
    )
    .unwrap();
}

/// Fields resolved so far; `None` means no valid candidate yet.
#[derive(Debug, Clone, Default)]
pub(crate) struct ResolvedFields {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
}

impl ResolvedFields {
    pub fn get(&self, field: JobField) -> Option<&str> {
        match field {
            JobField::Title => self.title.as_deref(),
            JobField::Company => self.company.as_deref(),
            JobField::Location => self.location.as_deref(),
            JobField::Salary => self.salary.as_deref(),
        }
    }

    fn set(&mut self, field: JobField, value: String) {
        match field {
            JobField::Title => self.title = Some(value),
            JobField::Company => self.company = Some(value),
            JobField::Location => self.location = Some(value),
            JobField::Salary => self.salary = Some(value),
        }
    }
}

/// Run stages 1-3: label patterns, heuristics, then the raw baseline.
pub(crate) fn resolve(raw: &RawScrapedFields) -> ResolvedFields {
    let description = raw.description.as_str();

    let title = labels::extract_labeled(description, JobField::Title)
        .or_else(|| heuristics::infer_title(description))
        .and_then(|v| normalize_title(&v))
        .filter(|v| !is_invalid(v))
        .or_else(|| normalize_title(&raw.title).filter(|v| !is_invalid(v)));

    // The raw company keeps its line structure: a selector that grabbed a
    // multi-line header block feeds the split heuristic downstream.
    let company = labels::extract_labeled(description, JobField::Company)
        .or_else(|| heuristics::infer_company(description))
        .and_then(|v| normalize(&v))
        .filter(|v| !is_invalid(v))
        .or_else(|| {
            let trimmed = raw.company.trim();
            if is_invalid(trimmed) {
                None
            } else {
                Some(trimmed.to_string())
            }
        });

    let location = labels::extract_labeled(description, JobField::Location)
        .or_else(|| heuristics::infer_location(description))
        .and_then(|v| normalize(&v))
        .filter(|v| !is_invalid(v))
        .or_else(|| normalize(&raw.location).filter(|v| !is_invalid(v)));

    let salary = labels::extract_labeled(description, JobField::Salary)
        .or_else(|| heuristics::extract_salary(description))
        .and_then(|v| normalize(&v))
        .filter(|v| !is_invalid(v))
        .or_else(|| normalize(&raw.salary).filter(|v| !is_invalid(v)));

    ResolvedFields {
        title,
        company,
        location,
        salary,
    }
}

/// True when any field still lacks a valid value.
pub(crate) fn has_gaps(resolved: &ResolvedFields) -> bool {
    JobField::ALL
        .iter()
        .any(|field| is_invalid_opt(resolved.get(*field)))
}

/// Stage 4: fill fields still invalid after 1-3 from the LLM response.
///
/// Fill-gaps-only by design: a confident structural match is never
/// downgraded by the model.
pub(crate) fn fill_gaps(resolved: &mut ResolvedFields, llm: &LlmJobFields) {
    for field in JobField::ALL {
        if !is_invalid_opt(resolved.get(field)) {
            continue;
        }
        let Some(value) = llm.get(field) else {
            continue;
        };
        let candidate = match field {
            JobField::Title => normalize_title(value),
            _ => normalize(value),
        };
        if let Some(candidate) = candidate {
            if !is_invalid(&candidate) {
                debug!(field = field.name(), "LLM fallback filled field");
                resolved.set(field, candidate);
            }
        }
    }
}

/// Split a multi-line company block into company + location.
///
/// The first line becomes the company; the remaining lines, joined by
/// ", ", become the location only when location is still invalid.
pub(crate) fn split_company_location(resolved: &mut ResolvedFields) {
    let Some(company) = resolved.company.as_deref() else {
        return;
    };
    if !company.contains('\n') {
        return;
    }
    let parts: Vec<&str> = company
        .split('\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() >= 2 {
        if is_invalid_opt(resolved.location.as_deref()) {
            resolved.location = normalize(&parts[1..].join(", "));
        }
        resolved.company = Some(parts[0].to_string());
    } else {
        // A lone stray newline; just collapse it
        resolved.company = normalize(company);
    }
}

/// Strip lines that are purely a recognized field label, then collapse
/// whitespace. The stored description must not duplicate the structured
/// fields.
pub fn clean_description(description: &str) -> String {
    let without_labels = LABEL_LINE.replace_all(description, "");
    normalize(&without_labels).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_description_over_raw() {
        let raw = RawScrapedFields::new("https://x.com/job/1")
            .with_company("Indeed")
            .with_description("Company: Acme Inc\nLocation: Remote");
        let resolved = resolve(&raw);
        assert_eq!(resolved.company.as_deref(), Some("Acme Inc"));
        assert_eq!(resolved.location.as_deref(), Some("Remote"));
    }

    #[test]
    fn test_resolve_falls_back_to_raw_when_description_silent() {
        let raw = RawScrapedFields::new("https://x.com/job/1")
            .with_title("Backend Engineer")
            .with_company("Acme Inc")
            .with_description("We build developer tools.");
        let resolved = resolve(&raw);
        assert_eq!(resolved.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(resolved.company.as_deref(), Some("Acme Inc"));
        assert_eq!(resolved.location, None);
    }

    #[test]
    fn test_resolve_labeled_beats_heuristic() {
        let description = "Job Title: Staff Engineer\nWe are looking for a Junior Developer to help.";
        let raw = RawScrapedFields::new("https://x.com/job/1").with_description(description);
        let resolved = resolve(&raw);
        assert_eq!(resolved.title.as_deref(), Some("Staff Engineer"));
    }

    #[test]
    fn test_resolve_heuristic_beats_raw() {
        let raw = RawScrapedFields::new("https://x.com/job/1")
            .with_title("Jobs at Acme - Careers Page")
            .with_description("We are looking for an experienced Backend Engineer to join our growing team.");
        let resolved = resolve(&raw);
        assert_eq!(resolved.title.as_deref(), Some("Backend Engineer"));
    }

    #[test]
    fn test_fill_gaps_only_touches_invalid_fields() {
        let mut resolved = ResolvedFields {
            title: Some("Backend Engineer".to_string()),
            ..Default::default()
        };
        let llm = LlmJobFields {
            title: Some("Software Developer".to_string()),
            company: Some("Acme Inc".to_string()),
            location: None,
            salary: Some("n/a".to_string()),
        };
        fill_gaps(&mut resolved, &llm);
        // valid local result kept
        assert_eq!(resolved.title.as_deref(), Some("Backend Engineer"));
        // gap filled
        assert_eq!(resolved.company.as_deref(), Some("Acme Inc"));
        // null stays missing
        assert_eq!(resolved.location, None);
        // sentinel from the model rejected
        assert_eq!(resolved.salary, None);
    }

    #[test]
    fn test_split_company_location() {
        let mut resolved = ResolvedFields {
            company: Some("Acme Inc\nAustin, TX\nUnited States".to_string()),
            ..Default::default()
        };
        split_company_location(&mut resolved);
        assert_eq!(resolved.company.as_deref(), Some("Acme Inc"));
        assert_eq!(
            resolved.location.as_deref(),
            Some("Austin, TX, United States")
        );
    }

    #[test]
    fn test_split_keeps_existing_valid_location() {
        let mut resolved = ResolvedFields {
            company: Some("Acme Inc\nAustin, TX".to_string()),
            location: Some("Remote".to_string()),
            ..Default::default()
        };
        split_company_location(&mut resolved);
        assert_eq!(resolved.company.as_deref(), Some("Acme Inc"));
        assert_eq!(resolved.location.as_deref(), Some("Remote"));
    }

    #[test]
    fn test_split_noop_for_single_line() {
        let mut resolved = ResolvedFields {
            company: Some("Acme Inc".to_string()),
            ..Default::default()
        };
        split_company_location(&mut resolved);
        assert_eq!(resolved.company.as_deref(), Some("Acme Inc"));
        assert_eq!(resolved.location, None);
    }

    #[test]
    fn test_clean_description_strips_label_lines() {
        assert_eq!(
            clean_description("Company: Acme\nWe build tools."),
            "We build tools."
        );
        assert_eq!(
            clean_description("Job Title: Backend Engineer\nLocation: Remote\nShip software."),
            "Ship software."
        );
        assert_eq!(clean_description(""), "");
    }

    #[test]
    fn test_clean_description_preserves_mid_line_prose() {
        let description = "Our company builds tools.\nSalary: $100k\nApply today.";
        assert_eq!(
            clean_description(description),
            "Our company builds tools. Apply today."
        );
    }
}
