//! API-key authentication configuration

use serde::Deserialize;
use subtle::ConstantTimeEq;

use super::error::ValidationError;
use super::server::Environment;

const MIN_PRODUCTION_KEY_LENGTH: usize = 16;

/// API-key settings for the HTTP adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Shared secret clients present in the `X-Api-Key` header
    pub api_key: String,
}

impl AuthConfig {
    /// Compare a presented key against the configured one in constant time.
    pub fn verify(&self, presented: &str) -> bool {
        let expected = self.api_key.as_bytes();
        let presented = presented.as_bytes();
        // ct_eq requires equal lengths; the length check leaks only the
        // key length, not its contents.
        expected.len() == presented.len() && expected.ct_eq(presented).into()
    }

    /// Validate the key against the deployment environment.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::MissingRequired("auth.api_key"));
        }
        if *environment == Environment::Production
            && self.api_key.len() < MIN_PRODUCTION_KEY_LENGTH
        {
            return Err(ValidationError::ApiKeyTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str) -> AuthConfig {
        AuthConfig {
            api_key: key.to_string(),
        }
    }

    #[test]
    fn matching_key_verifies() {
        assert!(config("secret-key").verify("secret-key"));
    }

    #[test]
    fn wrong_key_is_rejected() {
        let auth = config("secret-key");
        assert!(!auth.verify("secret-kez"));
        assert!(!auth.verify("secret"));
        assert!(!auth.verify(""));
    }

    #[test]
    fn empty_key_fails_validation() {
        assert!(matches!(
            config("  ").validate(&Environment::Development),
            Err(ValidationError::MissingRequired("auth.api_key"))
        ));
    }

    #[test]
    fn short_key_is_fine_in_development_but_not_production() {
        let auth = config("short-key");
        assert!(auth.validate(&Environment::Development).is_ok());
        assert!(matches!(
            auth.validate(&Environment::Production),
            Err(ValidationError::ApiKeyTooShort)
        ));
    }

    #[test]
    fn long_key_passes_production_validation() {
        let auth = config("a-sufficiently-long-production-key");
        assert!(auth.validate(&Environment::Production).is_ok());
    }
}
