//! Data types for job-detail extraction.

pub mod config;
pub mod record;

pub use config::ExtractionConfig;
pub use record::{CanonicalJobRecord, JobField, RawScrapedFields};
