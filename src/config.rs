//! Configuration for the zenlink client.
//!
//! Credentials are supplied programmatically by the embedding application;
//! there is no environment-variable or file-based configuration. Validation
//! catches empty or placeholder values before a client is ever built.

use crate::error::ZenlinkError;

/// Configuration for connecting to a Zendesk account.
///
/// Immutable once constructed; the client takes its own copy. The API
/// token is stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Base URL for the Zendesk account
    /// (e.g., `https://acme.zendesk.com`).
    pub base_url: String,

    /// Agent email address for authentication.
    pub email: String,

    /// API token for authentication.
    /// This value must never be logged or included in error messages.
    pub token: String,

    /// When enabled, caller-supplied store identities are replaced with a
    /// fixed placeholder so integration tests can run against the live
    /// service without creating real customer records.
    pub sandbox: bool,
}

impl Config {
    /// Creates a configuration for the given Zendesk subdomain.
    ///
    /// # Arguments
    ///
    /// * `subdomain` - The account subdomain (the `acme` in `acme.zendesk.com`)
    /// * `email` - Agent email address
    /// * `token` - API token
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::Config` if any value fails validation.
    ///
    /// # Example
    ///
    /// ```
    /// use zenlink::config::Config;
    ///
    /// let config = Config::new("acme", "agent@example.com", "abc123def456").unwrap();
    /// assert_eq!(config.base_url, "https://acme.zendesk.com");
    /// ```
    pub fn new(
        subdomain: impl AsRef<str>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ZenlinkError> {
        let subdomain = subdomain.as_ref().trim();
        if subdomain.is_empty() || !subdomain.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-') {
            return Err(ZenlinkError::invalid_config(
                "subdomain must be a non-empty alphanumeric label",
            ));
        }
        Self::with_base_url(format!("https://{}.zendesk.com", subdomain), email, token)
    }

    /// Creates a configuration with an explicit base URL.
    ///
    /// Intended for pointing the client at a non-production endpoint,
    /// such as a local mock server in integration tests.
    ///
    /// # Errors
    ///
    /// Returns `ZenlinkError::Config` if any value fails validation.
    pub fn with_base_url(
        base_url: impl Into<String>,
        email: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ZenlinkError> {
        let base_url = Self::validate_base_url(base_url.into())?;
        let email = email.into();
        let token = token.into();

        Self::validate_email(&email)?;
        Self::validate_token(&token)?;

        Ok(Config {
            base_url,
            email,
            token,
            sandbox: false,
        })
    }

    /// Enables or disables sandbox mode.
    #[must_use]
    pub fn sandbox(mut self, enabled: bool) -> Self {
        self.sandbox = enabled;
        self
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, ZenlinkError> {
        let url = url.trim().trim_end_matches('/').to_string();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ZenlinkError::invalid_config(
                "base URL must start with http:// or https://",
            ));
        }

        Ok(url)
    }

    /// Validates the agent email address.
    fn validate_email(email: &str) -> Result<(), ZenlinkError> {
        if email.trim().is_empty() || !email.contains('@') {
            return Err(ZenlinkError::invalid_config(
                "email must be a non-empty address containing '@'",
            ));
        }
        Ok(())
    }

    /// Validates the API token is not empty or a placeholder value.
    fn validate_token(token: &str) -> Result<(), ZenlinkError> {
        if token.trim().is_empty() {
            return Err(ZenlinkError::invalid_config("token must not be empty"));
        }

        let token_lower = token.to_lowercase();
        let placeholder_patterns = ["your_token", "your_api_token", "placeholder", "changeme"];

        for pattern in placeholder_patterns {
            if token_lower.contains(pattern) {
                return Err(ZenlinkError::invalid_config(
                    "token appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builds_account_url() {
        let config = Config::new("acme", "agent@example.com", "abc123").unwrap();
        assert_eq!(config.base_url, "https://acme.zendesk.com");
        assert!(!config.sandbox);
    }

    #[test]
    fn test_new_rejects_bad_subdomain() {
        assert!(Config::new("", "agent@example.com", "abc123").is_err());
        assert!(Config::new("acme.zendesk.com", "agent@example.com", "abc123").is_err());
        assert!(Config::new("a/b", "agent@example.com", "abc123").is_err());
    }

    #[test]
    fn test_validate_base_url_removes_trailing_slash() {
        let config =
            Config::with_base_url("https://example.com/", "agent@example.com", "abc123").unwrap();
        assert_eq!(config.base_url, "https://example.com");
    }

    #[test]
    fn test_validate_base_url_requires_scheme() {
        let result = Config::with_base_url("example.com", "agent@example.com", "abc123");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_email_requires_at_sign() {
        let result = Config::new("acme", "not-an-email", "abc123");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_token_rejects_placeholder() {
        let result = Config::new("acme", "agent@example.com", "your_token_here");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_token_rejects_empty() {
        let result = Config::new("acme", "agent@example.com", "  ");
        assert!(result.is_err());
    }

    #[test]
    fn test_sandbox_builder() {
        let config = Config::new("acme", "agent@example.com", "abc123")
            .unwrap()
            .sandbox(true);
        assert!(config.sandbox);
    }
}
