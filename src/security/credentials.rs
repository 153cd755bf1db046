//! Credential handling with secure memory.
//!
//! Uses the `secrecy` crate to prevent accidental logging of sensitive
//! values. Inference providers hold their API key in an [`ApiKey`] so it
//! can never leak through debug output or error messages.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

use crate::error::{ExtractionError, Result};

/// An inference-provider API key that won't be logged or displayed.
pub struct ApiKey(SecretBox<str>);

impl ApiKey {
    /// Wrap a key value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(value.into().into_boxed_str()))
    }

    /// Read a key from an environment variable.
    pub fn from_env(var: &str) -> Result<Self> {
        std::env::var(var)
            .map(Self::new)
            .map_err(|_| ExtractionError::Config(format!("{var} not set")))
    }

    /// Expose the key for use in a request.
    ///
    /// Only call this at the point the key is actually sent.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for ApiKey {
    fn clone(&self) -> Self {
        Self::new(self.expose().to_string())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_not_in_debug_or_display() {
        let key = ApiKey::new("sk-super-secret-key");
        assert_eq!(format!("{key:?}"), "[REDACTED]");
        assert_eq!(format!("{key}"), "[REDACTED]");
    }

    #[test]
    fn test_expose_works() {
        let key = ApiKey::new("sk-super-secret-key");
        assert_eq!(key.expose(), "sk-super-secret-key");
    }

    #[test]
    fn test_missing_env_var_is_config_error() {
        let err = ApiKey::from_env("TAXDOC_DEFINITELY_UNSET_KEY").unwrap_err();
        assert!(matches!(err, ExtractionError::Config(_)));
    }
}
