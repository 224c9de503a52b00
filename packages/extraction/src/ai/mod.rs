//! LLM fallback for fields the structural extractors missed.
//!
//! The trait is the seam: the pipeline depends on [`AI`], production wires
//! in [`OpenAI`], tests wire in `testing::MockAI`. The fallback is strictly
//! best-effort - the pipeline catches every error from this module and
//! proceeds without it.

mod openai;

pub use openai::OpenAI;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The 4-key JSON object the model is asked to produce.
///
/// Each value is string-or-null; null means the description does not state
/// that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmJobFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
}

impl LlmJobFields {
    /// Get a field by name.
    pub fn get(&self, field: crate::types::JobField) -> Option<&str> {
        use crate::types::JobField;
        match field {
            JobField::Title => self.title.as_deref(),
            JobField::Company => self.company.as_deref(),
            JobField::Location => self.location.as_deref(),
            JobField::Salary => self.salary.as_deref(),
        }
    }
}

/// AI trait for the LLM fallback extractor.
///
/// Implementations wrap a specific LLM provider and handle the specifics
/// of prompting and response parsing.
#[async_trait]
pub trait AI: Send + Sync {
    /// Extract the four core fields from a job description.
    ///
    /// The implementation must restrict the model to information present in
    /// the text; absent fields come back as null, never invented.
    async fn extract_job_fields(&self, description: &str) -> Result<LlmJobFields>;
}
