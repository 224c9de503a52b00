//! Credential handling for the LLM fallback.

mod credentials;

pub use credentials::{LlmCredentials, SecretString};
