//! The extraction pipeline: layered extractors plus the merge policy.
//!
//! One [`Extractor`] serves many requests; it holds only immutable
//! configuration (the rule table and the optional AI client), so concurrent
//! extractions share nothing mutable. Each call is synchronous apart from
//! the single awaited LLM request, which is attempted at most once and
//! never propagates failure.

mod merge;

pub use merge::clean_description;

use tracing::{debug, warn};

use crate::ai::{OpenAI, AI};
use crate::selectors::SiteRuleRegistry;
use crate::types::{CanonicalJobRecord, ExtractionConfig, JobField, RawScrapedFields};

/// The job-detail extraction pipeline.
pub struct Extractor<A: AI> {
    registry: SiteRuleRegistry,
    ai: Option<A>,
}

impl Extractor<OpenAI> {
    /// Build a production extractor; the LLM fallback is enabled only when
    /// the config carries credentials.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            registry: SiteRuleRegistry::new(),
            ai: OpenAI::from_config(config),
        }
    }
}

impl<A: AI> Extractor<A> {
    /// Create an extractor with the built-in rule table.
    pub fn new(ai: Option<A>) -> Self {
        Self {
            registry: SiteRuleRegistry::new(),
            ai,
        }
    }

    /// Replace the site rule registry.
    pub fn with_registry(mut self, registry: SiteRuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Scrape raw fields from a page the caller already fetched.
    ///
    /// This is the server-side twin of the extension's content script; it
    /// produces the tentative baseline that [`Extractor::extract`] refines.
    pub fn scrape_page(&self, html: &str, url: &str) -> RawScrapedFields {
        self.registry.extract(html, url)
    }

    /// Run the full pipeline: label patterns, heuristics, the raw baseline,
    /// the LLM gap fill, the company/location split, and defaulting.
    ///
    /// Infallible by design - every extractor miss degrades to a
    /// placeholder, and an LLM failure falls through to the local result.
    pub async fn extract(&self, raw: &RawScrapedFields) -> CanonicalJobRecord {
        let mut resolved = merge::resolve(raw);

        if let Some(ai) = &self.ai {
            if !merge::has_gaps(&resolved) {
                debug!(url = %raw.url, "all fields resolved locally; skipping LLM fallback");
            } else if raw.description.trim().is_empty() {
                debug!(url = %raw.url, "no description text; skipping LLM fallback");
            } else {
                match ai.extract_job_fields(&raw.description).await {
                    Ok(fields) => merge::fill_gaps(&mut resolved, &fields),
                    Err(error) => {
                        // Best-effort: a failed completion never blocks a save
                        warn!(
                            url = %raw.url,
                            error = %error,
                            "LLM fallback failed, continuing with local extraction"
                        );
                    }
                }
            }
        }

        finish(raw, resolved)
    }

    /// The synchronous subset of [`Extractor::extract`]: everything except
    /// the LLM gap fill.
    pub fn extract_local(&self, raw: &RawScrapedFields) -> CanonicalJobRecord {
        finish(raw, merge::resolve(raw))
    }
}

fn finish(raw: &RawScrapedFields, mut resolved: merge::ResolvedFields) -> CanonicalJobRecord {
    merge::split_company_location(&mut resolved);

    let field = |value: Option<String>, field: JobField| {
        value.unwrap_or_else(|| field.placeholder().to_string())
    };

    CanonicalJobRecord {
        title: field(resolved.title.take(), JobField::Title),
        company: field(resolved.company.take(), JobField::Company),
        location: field(resolved.location.take(), JobField::Location),
        salary: field(resolved.salary.take(), JobField::Salary),
        description: clean_description(&raw.description),
        url: raw.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAI;

    #[tokio::test]
    async fn test_extract_resolves_from_description() {
        let extractor = Extractor::new(None::<MockAI>);
        let raw = RawScrapedFields::new("https://x.com/job/1")
            .with_company("Indeed")
            .with_description(
                "Job Title: Backend Engineer\nCompany: Acme Inc\nLocation: Remote\nSalary: $100,000 per year\nShip software.",
            );

        let record = extractor.extract(&raw).await;
        assert_eq!(record.title, "Backend Engineer");
        assert_eq!(record.company, "Acme Inc");
        assert_eq!(record.location, "Remote");
        assert_eq!(record.salary, "$100,000 per year");
        assert_eq!(record.description, "Ship software.");
        assert_eq!(record.url, "https://x.com/job/1");
    }

    #[tokio::test]
    async fn test_defaulting_when_everything_misses() {
        let extractor = Extractor::new(None::<MockAI>);
        let raw = RawScrapedFields::new("https://x.com/job/1");

        let record = extractor.extract(&raw).await;
        assert_eq!(record.title, "Job Title");
        assert_eq!(record.company, "Unknown Company");
        assert_eq!(record.location, "Not specified");
        assert_eq!(record.salary, "Not disclosed");
        assert_eq!(record.description, "");
    }

    #[tokio::test]
    async fn test_extract_local_matches_extract_without_ai() {
        let extractor = Extractor::new(None::<MockAI>);
        let raw = RawScrapedFields::new("https://x.com/job/1")
            .with_description("Join Acme as a Backend Engineer! Fully remote.");

        assert_eq!(extractor.extract(&raw).await, extractor.extract_local(&raw));
    }
}
