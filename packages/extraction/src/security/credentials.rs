//! Credential handling with secure memory.
//!
//! Uses the `secrecy` crate to prevent accidental logging of API keys.
//! The credential is injected at construction time; nothing in this crate
//! reads process environment behind the caller's back (`from_env` is an
//! explicit opt-in helper).

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::{ExtractionError, Result};

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    /// Create a new secret string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value for use.
    ///
    /// Only call this when actually using the secret (e.g., in the
    /// Authorization header of an API request).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Credentials and endpoint selection for the LLM fallback extractor.
#[derive(Clone)]
pub struct LlmCredentials {
    /// API key (secret)
    pub api_key: SecretString,

    /// Chat model identifier (default: gpt-4o-mini)
    pub model: String,

    /// API base URL (default: OpenAI)
    pub base_url: String,
}

impl LlmCredentials {
    /// Create new credentials with the default model and endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Create from the `OPENAI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ExtractionError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl fmt::Debug for LlmCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmCredentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_not_in_debug() {
        let secret = SecretString::new("sk-super-secret-key");
        let debug = format!("{:?}", secret);
        assert!(!debug.contains("sk-super"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_works() {
        let secret = SecretString::new("sk-super-secret-key");
        assert_eq!(secret.expose(), "sk-super-secret-key");
    }

    #[test]
    fn test_credentials_debug_redacts_key() {
        let creds = LlmCredentials::new("sk-secret").with_model("gpt-4o");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("gpt-4o"));
    }

    #[test]
    fn test_credentials_defaults() {
        let creds = LlmCredentials::new("sk-test");
        assert_eq!(creds.model, "gpt-4o-mini");
        assert!(creds.base_url.contains("api.openai.com"));
    }
}
