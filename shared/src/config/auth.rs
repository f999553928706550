//! JWT authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "dev-secret-change-in-production";

/// JWT authentication configuration
///
/// Read once at process start; the signing key is injected into the token
/// codec at construction and never read from ambient state afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens (HS256)
    pub secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
            issuer: String::from("techflow"),
            audience: String::from("techflow-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with a secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: std::env::var("JWT_SECRET").unwrap_or(defaults.secret),
            issuer: std::env::var("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or(defaults.audience),
            access_token_expiry_minutes: std::env::var("JWT_ACCESS_EXPIRY_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry_minutes),
            refresh_token_expiry_days: std::env::var("JWT_REFRESH_EXPIRY_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry_days),
        }
    }

    /// Check if using the default secret (security warning at startup)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lifetimes() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry_minutes, 15);
        assert_eq!(config.refresh_token_expiry_days, 7);
        assert!(config.is_using_default_secret());
    }

    #[test]
    fn custom_secret_is_not_default() {
        let config = JwtConfig::new("a-real-secret");
        assert!(!config.is_using_default_secret());
    }
}
