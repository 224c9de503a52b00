//! Per-site selector rules: DOM regions to raw field strings.
//!
//! The registry is data, not logic: each [`SiteRule`] pairs a URL substring
//! with prioritized CSS selector candidates per field, evaluated
//! first-match-wins over the parsed document. Sites are added by extending
//! the registry, never by touching extraction code.
//!
//! Extraction here never fails: unparsable selectors and absent nodes
//! silently yield empty strings. Output is a best-effort partial record
//! that the pipeline treats as a tentative baseline.

mod sites;

use scraper::{Html, Selector};
use tracing::debug;

use crate::normalize::{is_invalid, normalize};
use crate::types::{JobField, RawScrapedFields};

/// Prioritized selector candidates for each field of a job page.
#[derive(Debug, Clone, Default)]
pub struct FieldSelectors {
    pub title: Vec<String>,
    pub company: Vec<String>,
    pub location: Vec<String>,
    pub salary: Vec<String>,
    pub description: Vec<String>,
}

impl FieldSelectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, selectors: &[&str]) -> Self {
        self.title = owned(selectors);
        self
    }

    pub fn company(mut self, selectors: &[&str]) -> Self {
        self.company = owned(selectors);
        self
    }

    pub fn location(mut self, selectors: &[&str]) -> Self {
        self.location = owned(selectors);
        self
    }

    pub fn salary(mut self, selectors: &[&str]) -> Self {
        self.salary = owned(selectors);
        self
    }

    pub fn description(mut self, selectors: &[&str]) -> Self {
        self.description = owned(selectors);
        self
    }

    fn for_field(&self, field: JobField) -> &[String] {
        match field {
            JobField::Title => &self.title,
            JobField::Company => &self.company,
            JobField::Location => &self.location,
            JobField::Salary => &self.salary,
        }
    }
}

fn owned(selectors: &[&str]) -> Vec<String> {
    selectors.iter().map(|s| s.to_string()).collect()
}

/// Selector rules for one site, keyed by URL substring.
#[derive(Debug, Clone)]
pub struct SiteRule {
    /// Substring matched against the page URL (e.g. "linkedin.com/jobs").
    pub host_pattern: String,

    /// First-stage selectors, read from the job detail pane.
    pub selectors: FieldSelectors,

    /// Subtitle block holding a newline-separated company/location pair,
    /// read when the detail pane lacks them.
    pub subtitle: Vec<String>,

    /// Second-stage selectors read from the selected list card. These only
    /// override fields whose first-stage value is invalid.
    pub selected_card: Option<FieldSelectors>,
}

impl SiteRule {
    pub fn new(host_pattern: impl Into<String>) -> Self {
        Self {
            host_pattern: host_pattern.into(),
            selectors: FieldSelectors::default(),
            subtitle: Vec::new(),
            selected_card: None,
        }
    }

    pub fn with_selectors(mut self, selectors: FieldSelectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_subtitle(mut self, selectors: &[&str]) -> Self {
        self.subtitle = owned(selectors);
        self
    }

    pub fn with_selected_card(mut self, selectors: FieldSelectors) -> Self {
        self.selected_card = Some(selectors);
        self
    }

    pub fn matches(&self, url: &str) -> bool {
        url.contains(&self.host_pattern)
    }
}

/// Ordered registry of site rules, first match wins.
///
/// Ambiguity between overlapping host patterns is resolved by ordering:
/// more specific patterns come first. Exactly one rule applies per request;
/// unmatched URLs fall back to the generic rule.
#[derive(Debug, Clone)]
pub struct SiteRuleRegistry {
    rules: Vec<SiteRule>,
    generic: SiteRule,
}

impl Default for SiteRuleRegistry {
    fn default() -> Self {
        Self {
            rules: sites::default_rules(),
            generic: sites::generic_rule(),
        }
    }
}

impl SiteRuleRegistry {
    /// The built-in rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry (generic rule only).
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            generic: sites::generic_rule(),
        }
    }

    /// Add a rule at the front so it wins over built-in patterns.
    pub fn with_rule(mut self, rule: SiteRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// Find the rule for a URL; unmatched URLs get the generic rule.
    pub fn find(&self, url: &str) -> &SiteRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(url))
            .unwrap_or(&self.generic)
    }

    /// Scrape raw fields from a page.
    ///
    /// Two stages: the detail pane first, then - only for fields the first
    /// stage left invalid - the subtitle block and the selected list card.
    pub fn extract(&self, html: &str, url: &str) -> RawScrapedFields {
        let document = Html::parse_document(html);
        let rule = self.find(url);
        debug!(url = %url, pattern = %rule.host_pattern, "matched site rule");

        let mut raw = RawScrapedFields::new(url);
        raw.title = first_text(&document, &rule.selectors.title);
        raw.company = first_text(&document, &rule.selectors.company);
        raw.location = first_text(&document, &rule.selectors.location);
        raw.salary = first_text(&document, &rule.selectors.salary);
        raw.description = first_block_text(&document, &rule.selectors.description);

        apply_subtitle(&document, rule, &mut raw);
        apply_selected_card(&document, rule, &mut raw);
        raw
    }
}

/// Fill company/location from a newline-separated subtitle block.
fn apply_subtitle(document: &Html, rule: &SiteRule, raw: &mut RawScrapedFields) {
    if rule.subtitle.is_empty() || (!is_invalid(&raw.company) && !is_invalid(&raw.location)) {
        return;
    }
    let lines = first_text_lines(document, &rule.subtitle);
    if lines.len() < 2 {
        return;
    }
    if is_invalid(&raw.company) {
        raw.company = lines[0].clone();
    }
    if is_invalid(&raw.location) {
        raw.location = lines[1..].join(", ");
    }
}

/// Patch invalid fields from the selected list card, when one is rendered.
fn apply_selected_card(document: &Html, rule: &SiteRule, raw: &mut RawScrapedFields) {
    let Some(card) = &rule.selected_card else {
        return;
    };
    for field in JobField::ALL {
        if !is_invalid(raw.get(field)) {
            continue;
        }
        let value = first_text(document, card.for_field(field));
        if !is_invalid(&value) {
            match field {
                JobField::Title => raw.title = value,
                JobField::Company => raw.company = value,
                JobField::Location => raw.location = value,
                JobField::Salary => raw.salary = value,
            }
        }
    }
}

/// First selector that yields non-empty text, as a single normalized line.
fn first_text(document: &Html, selectors: &[String]) -> String {
    for selector_str in selectors {
        // Unparsable selectors are a rule-table typo, not a request error
        let Ok(selector) = Selector::parse(selector_str) else {
            debug!(selector = %selector_str, "skipping unparsable selector");
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element.text().collect::<Vec<_>>().join(" ");
            if let Some(text) = normalize(&text) {
                return text;
            }
        }
    }
    String::new()
}

/// Like [`first_text`] but preserves line structure, for description blocks
/// whose label lines the downstream parsers need intact.
fn first_block_text(document: &Html, selectors: &[String]) -> String {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element
                .text()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            if !text.is_empty() {
                return text;
            }
        }
    }
    String::new()
}

/// Non-empty trimmed text lines of the first matching element.
fn first_text_lines(document: &Html, selectors: &[String]) -> Vec<String> {
    for selector_str in selectors {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let lines: Vec<String> = element
                .text()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect();
            if !lines.is_empty() {
                return lines;
            }
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_rule_wins() {
        let registry = SiteRuleRegistry::new();
        let rule = registry.find("https://www.linkedin.com/jobs/view/123");
        assert_eq!(rule.host_pattern, "linkedin.com/jobs");

        let rule = registry.find("https://in.naukri.com/job-listings/456");
        assert_eq!(rule.host_pattern, "naukri.com");
    }

    #[test]
    fn test_unmatched_url_gets_generic_rule() {
        let registry = SiteRuleRegistry::new();
        let rule = registry.find("https://careers.example.com/roles/1");
        assert_eq!(rule.host_pattern, "");
        assert_eq!(rule.selectors.title, vec!["h1".to_string()]);
    }

    #[test]
    fn test_custom_rule_overrides_builtin() {
        let registry = SiteRuleRegistry::new().with_rule(
            SiteRule::new("linkedin.com/jobs/collections")
                .with_selectors(FieldSelectors::new().title(&[".collection-title"])),
        );
        let rule = registry.find("https://www.linkedin.com/jobs/collections/42");
        assert_eq!(rule.host_pattern, "linkedin.com/jobs/collections");
    }

    #[test]
    fn test_generic_extraction_from_h1() {
        let html = r#"
            <html><body>
              <h1>Backend Engineer</h1>
              <main><p>Company: Acme Inc</p><p>Build services.</p></main>
            </body></html>
        "#;
        let raw = SiteRuleRegistry::new().extract(html, "https://careers.example.com/1");
        assert_eq!(raw.title, "Backend Engineer");
        assert!(raw.description.contains("Company: Acme Inc"));
        assert!(raw.description.contains("Build services."));
        assert_eq!(raw.company, "");
    }

    #[test]
    fn test_selector_candidates_first_match_wins() {
        let html = r#"
            <html><body>
              <h1 data-testid="svx-job-title">Data Engineer</h1>
              <h1 class="title">Wrong Title</h1>
              <div data-testid="svx-jobview-company-name">Globex</div>
            </body></html>
        "#;
        let raw = SiteRuleRegistry::new().extract(html, "https://www.monster.com/job/9");
        assert_eq!(raw.title, "Data Engineer");
        assert_eq!(raw.company, "Globex");
    }

    #[test]
    fn test_subtitle_split_fills_missing_company_and_location() {
        let html = r#"
            <html><body>
              <h1>Backend Engineer</h1>
              <div data-testid="jobsearch-JobInfoHeader-subtitle">
                <div>Acme Inc</div>
                <div>Austin, TX 78701</div>
              </div>
            </body></html>
        "#;
        let raw = SiteRuleRegistry::new().extract(html, "https://www.indeed.com/viewjob?jk=1");
        assert_eq!(raw.company, "Acme Inc");
        assert_eq!(raw.location, "Austin, TX 78701");
    }

    #[test]
    fn test_subtitle_does_not_override_valid_pane_values() {
        let html = r#"
            <html><body>
              <h1>Backend Engineer</h1>
              <div class="css-87uc0g">Acme Inc</div>
              <div data-testid="jobsearch-JobInfoHeader-subtitle">
                <div>Wrong Co</div>
                <div>Remote</div>
              </div>
            </body></html>
        "#;
        let raw = SiteRuleRegistry::new().extract(html, "https://www.indeed.com/viewjob?jk=1");
        assert_eq!(raw.company, "Acme Inc");
        // location was missing from the pane, so the subtitle still fills it
        assert_eq!(raw.location, "Remote");
    }

    #[test]
    fn test_selected_card_overrides_only_invalid_fields() {
        let html = r#"
            <html><body>
              <h1>Backend Engineer</h1>
              <div class="css-87uc0g">Indeed</div>
              <ul>
                <li class="vjs-highlight">
                  <span class="companyName">Acme Inc</span>
                  <span class="companyLocation">Remote</span>
                </li>
                <li><span class="companyName">Other Co</span></li>
              </ul>
            </body></html>
        "#;
        let raw = SiteRuleRegistry::new().extract(html, "https://www.indeed.com/viewjob?jk=1");
        // pane company was the site-name sentinel, card wins
        assert_eq!(raw.company, "Acme Inc");
        assert_eq!(raw.location, "Remote");
        // pane title was valid, card does not touch it
        assert_eq!(raw.title, "Backend Engineer");
    }

    #[test]
    fn test_unparsable_selector_fails_open() {
        let registry = SiteRuleRegistry::empty().with_rule(
            SiteRule::new("example.com")
                .with_selectors(FieldSelectors::new().title(&["h1:::bogus", "h1"])),
        );
        let html = "<html><body><h1>Platform Engineer</h1></body></html>";
        let raw = registry.extract(html, "https://example.com/job/1");
        assert_eq!(raw.title, "Platform Engineer");
    }

    #[test]
    fn test_missing_fields_are_empty_strings() {
        let html = "<html><body><p>nothing useful</p></body></html>";
        let raw = SiteRuleRegistry::new().extract(html, "https://www.dice.com/job/1");
        assert_eq!(raw.title, "");
        assert_eq!(raw.company, "");
        assert_eq!(raw.location, "");
        assert_eq!(raw.salary, "");
        assert_eq!(raw.description, "");
    }
}
