//! Configuration for the extraction pipeline.

use crate::security::LlmCredentials;

/// Configuration for the extraction pipeline.
///
/// The only tunables at this layer belong to the LLM fallback; the regex
/// and heuristic extractors are compiled from static tables. When
/// `credentials` is `None` the LLM stage is skipped entirely and the
/// pipeline runs fully offline.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// LLM credentials. `None` disables the fallback.
    pub credentials: Option<LlmCredentials>,

    /// Sampling temperature for the completion request.
    ///
    /// Kept low - the task is extraction, not generation. Default: 0.3.
    pub temperature: f32,

    /// Cap on completion output tokens.
    ///
    /// The response is a 4-key JSON object, so a small cap suffices.
    /// Default: 200.
    pub max_output_tokens: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            temperature: 0.3,
            max_output_tokens: 200,
        }
    }
}

impl ExtractionConfig {
    /// Create a new config with default values (LLM fallback disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the LLM fallback with the given credentials.
    pub fn with_credentials(mut self, credentials: LlmCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token cap.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractionConfig::new();
        assert!(config.credentials.is_none());
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.max_output_tokens, 200);
    }

    #[test]
    fn test_builder() {
        let config = ExtractionConfig::new()
            .with_credentials(LlmCredentials::new("sk-test"))
            .with_temperature(0.0)
            .with_max_output_tokens(400);

        assert!(config.credentials.is_some());
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.max_output_tokens, 400);
    }
}
