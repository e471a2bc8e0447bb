//! Secret API key handling.

use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

/// A secret API key.
///
/// The key is held in a [`SecretString`] and is redacted from `Debug`
/// output.
///
/// # Example
///
/// ```
/// use stripe_rs::ApiKey;
///
/// let key = ApiKey::new("sk_test_123");
/// assert!(key.is_test_mode());
/// assert_eq!(format!("{:?}", key), "ApiKey(\"[REDACTED]\")");
/// ```
#[derive(Clone)]
pub struct ApiKey(SecretString);

impl ApiKey {
    /// Wrap a secret key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(SecretString::from(key.into()))
    }

    /// Read the key from an environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the variable is unset or empty.
    pub fn from_env(var: &str) -> Result<Self> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(Error::Config(format!("{var} must be set to an API key"))),
        }
    }

    /// Returns `true` for test-mode secret or restricted keys.
    pub fn is_test_mode(&self) -> bool {
        let key = self.0.expose_secret();
        key.starts_with("sk_test_") || key.starts_with("rk_test_")
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_detection() {
        assert!(ApiKey::new("rk_test_abc").is_test_mode());
        assert!(!ApiKey::new("sk_live_abc").is_test_mode());
    }

    #[test]
    fn test_missing_env_var() {
        let err = ApiKey::from_env("STRIPE_RS_SURELY_UNSET_VARIABLE").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_expose() {
        assert_eq!(ApiKey::new("sk_test_123").expose(), "sk_test_123");
    }
}
