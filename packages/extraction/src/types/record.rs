//! Record types: raw scraped input and the canonical output.
//!
//! Both types are created fresh per extraction request and carry no state
//! across requests. `RawScrapedFields` is the contract with the scraping
//! side (browser extension content script or server-side HTML scrape);
//! `CanonicalJobRecord` is the only output type and the only thing the
//! persistence layer ever sees.

use serde::{Deserialize, Serialize};

/// Raw per-field strings scraped from a job page, plus the description text.
///
/// All fields except `url` are best-effort: a selector that matched nothing
/// yields an empty string, never an error. Values here are tentative - the
/// pipeline re-extracts from the description and only falls back to these
/// when the description yields nothing better.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawScrapedFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

impl RawScrapedFields {
    /// Create an empty record for the given page URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the raw title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the raw company.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = company.into();
        self
    }

    /// Set the raw location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the raw salary.
    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = salary.into();
        self
    }

    /// Set the description text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Get the raw value for a core field.
    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::Title => &self.title,
            JobField::Company => &self.company,
            JobField::Location => &self.location,
            JobField::Salary => &self.salary,
        }
    }
}

/// The final, fully-defaulted job summary.
///
/// All four core fields are guaranteed non-empty: any field that survived
/// no extractor is replaced by its per-field placeholder. The description
/// has been cleaned of bare label lines so it does not duplicate the
/// structured fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalJobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub url: String,
}

/// The four core fields the pipeline resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobField {
    Title,
    Company,
    Location,
    Salary,
}

impl JobField {
    /// All core fields, in resolution order.
    pub const ALL: [JobField; 4] = [
        JobField::Title,
        JobField::Company,
        JobField::Location,
        JobField::Salary,
    ];

    /// Lowercase field name, used as a structured log field.
    pub fn name(&self) -> &'static str {
        match self {
            JobField::Title => "title",
            JobField::Company => "company",
            JobField::Location => "location",
            JobField::Salary => "salary",
        }
    }

    /// Placeholder substituted when every extractor came up empty.
    pub fn placeholder(&self) -> &'static str {
        match self {
            JobField::Title => "Job Title",
            JobField::Company => "Unknown Company",
            JobField::Location => "Not specified",
            JobField::Salary => "Not disclosed",
        }
    }
}
