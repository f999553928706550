//! Token service configuration

use tf_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret key for HS256 signing
    pub jwt_secret: String,

    /// Access token lifetime in minutes
    pub access_token_lifetime_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_lifetime_days: i64,

    /// Issuer claim stamped into and required of every access token
    pub issuer: String,

    /// Audience claim stamped into and required of every access token
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_lifetime_minutes: config.access_token_expiry_minutes,
            refresh_token_lifetime_days: config.refresh_token_expiry_days,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_jwt_config() {
        let jwt = JwtConfig::new("secret-key");
        let config = TokenServiceConfig::from(&jwt);

        assert_eq!(config.jwt_secret, "secret-key");
        assert_eq!(config.access_token_lifetime_minutes, 15);
        assert_eq!(config.refresh_token_lifetime_days, 7);
        assert_eq!(config.issuer, "techflow");
        assert_eq!(config.audience, "techflow-api");
    }
}
