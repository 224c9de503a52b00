//! Job-Posting Detail Extraction Library
//!
//! Turns messy, heterogeneous job-page scrapes and free-text descriptions
//! into a canonical `{title, company, location, salary}` record.
//!
//! # Design Philosophy
//!
//! **"Cheap signals first, expensive signals last, a record always."**
//!
//! - Layered extraction: selector rules, label patterns, heuristics, LLM
//! - Explicit labels outrank fuzzy inference; the LLM only fills gaps
//! - Every candidate is gated by one validity filter (sentinels, leakage)
//! - The pipeline never fails - worst case is a fully-placeholder record
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{ExtractionConfig, Extractor, LlmCredentials, RawScrapedFields};
//!
//! let config = ExtractionConfig::new()
//!     .with_credentials(LlmCredentials::new("sk-..."));
//! let extractor = Extractor::from_config(&config);
//!
//! // Fields as scraped by the extension, plus the description text
//! let raw = RawScrapedFields::new("https://www.indeed.com/viewjob?jk=123")
//!     .with_company("Indeed") // junk - the pipeline rejects sentinels
//!     .with_description("Company: Acme Inc\nLocation: Remote\nShip software.");
//!
//! let record = extractor.extract(&raw).await;
//! assert_eq!(record.company, "Acme Inc");
//! ```
//!
//! # Modules
//!
//! - [`types`] - Record and configuration types
//! - [`normalize`] - Whitespace normalization and validity filtering
//! - [`selectors`] - Per-site CSS selector rule registry
//! - [`labels`] - "Field: value" label-pattern extraction
//! - [`heuristics`] - Natural-language phrasing inference
//! - [`ai`] - LLM fallback trait and OpenAI implementation
//! - [`pipeline`] - The merge policy and the [`Extractor`] entry point
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod heuristics;
pub mod labels;
pub mod normalize;
pub mod pipeline;
pub mod security;
pub mod selectors;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use ai::{LlmJobFields, OpenAI, AI};
pub use error::{ExtractionError, Result};
pub use normalize::{is_invalid, normalize, normalize_title};
pub use pipeline::{clean_description, Extractor};
pub use security::{LlmCredentials, SecretString};
pub use selectors::{FieldSelectors, SiteRule, SiteRuleRegistry};
pub use types::{
    config::ExtractionConfig,
    record::{CanonicalJobRecord, JobField, RawScrapedFields},
};

// Re-export testing utilities
pub use testing::MockAI;
