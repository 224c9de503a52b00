//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the extraction library without
//! making real LLM calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::ai::{LlmJobFields, AI};
use crate::error::{ExtractionError, Result};

/// A mock AI implementation for testing.
///
/// Returns a configurable canned response, or a configurable failure, and
/// records every call for assertions.
#[derive(Clone, Default)]
pub struct MockAI {
    fields: LlmJobFields,
    fail: bool,
    /// Descriptions passed to `extract_job_fields`, in call order
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockAI {
    /// Create a mock that returns all-null fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canned response.
    pub fn with_fields(mut self, fields: LlmJobFields) -> Self {
        self.fields = fields;
        self
    }

    /// Make every call fail, for exercising the fail-open path.
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Descriptions passed so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl AI for MockAI {
    async fn extract_job_fields(&self, description: &str) -> Result<LlmJobFields> {
        self.calls.write().unwrap().push(description.to_string());
        if self.fail {
            return Err(ExtractionError::AI("mock AI failure".into()));
        }
        Ok(self.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_canned_fields() {
        let mock = MockAI::new().with_fields(LlmJobFields {
            title: Some("Backend Engineer".to_string()),
            ..Default::default()
        });

        let fields = mock.extract_job_fields("some description").await.unwrap();
        assert_eq!(fields.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls(), vec!["some description".to_string()]);
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockAI::new().with_failure();
        let result = mock.extract_job_fields("text").await;
        assert!(result.is_err());
        assert_eq!(mock.call_count(), 1);
    }
}
