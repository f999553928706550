//! Stateless JWT encoding and decoding
//!
//! The codec owns the signing keys and validation rules; it never touches
//! storage. Decoding applies zero leeway so a token is rejected at exactly
//! its expiry instant.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::TokenError;

/// Encodes and decodes access tokens with a symmetric HS256 key
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec from a signing secret and the expected claims
    pub fn new(secret: &str, issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Signs the claims into a compact JWT string
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed)
    }

    /// Decodes and validates a JWT, returning its claims
    ///
    /// Expiry is reported distinctly from the invalid kinds so callers can
    /// surface a different message for it.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::InvalidTokenFormat,
            })?;

        // jsonwebtoken only rejects `exp` strictly in the past; the boundary
        // here is closed, a token is dead at its expiry second.
        if claims.is_expired() {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret", "techflow", "techflow-api")
    }

    #[test]
    fn encode_decode_round_trip() {
        let codec = codec();
        let claims =
            Claims::new_access_token(Uuid::new_v4(), "ada@example.com", "techflow", "techflow-api", 15);

        let token = codec.encode(&claims).unwrap();
        let decoded = codec.decode(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let codec = codec();
        let mut claims =
            Claims::new_access_token(Uuid::new_v4(), "a@b.c", "techflow", "techflow-api", 15);
        claims.iat -= 3600;
        claims.nbf -= 3600;
        claims.exp = chrono::Utc::now().timestamp() - 60;

        let token = codec.encode(&claims).unwrap();
        assert!(matches!(codec.decode(&token), Err(TokenError::TokenExpired)));
    }

    #[test]
    fn token_dies_at_its_exact_expiry_second() {
        let codec = codec();
        let mut claims =
            Claims::new_access_token(Uuid::new_v4(), "a@b.c", "techflow", "techflow-api", 15);
        claims.iat -= 3600;
        claims.nbf -= 3600;
        claims.exp = chrono::Utc::now().timestamp();

        let token = codec.encode(&claims).unwrap();
        assert!(matches!(codec.decode(&token), Err(TokenError::TokenExpired)));
    }

    #[test]
    fn wrong_key_is_invalid_signature() {
        let codec = codec();
        let other = TokenCodec::new("other-secret", "techflow", "techflow-api");
        let claims =
            Claims::new_access_token(Uuid::new_v4(), "a@b.c", "techflow", "techflow-api", 15);

        let token = codec.encode(&claims).unwrap();
        assert!(matches!(
            other.decode(&token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn garbage_is_invalid_format() {
        let codec = codec();
        assert!(matches!(
            codec.decode("not.a.jwt"),
            Err(TokenError::InvalidTokenFormat)
        ));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let codec = codec();
        let claims =
            Claims::new_access_token(Uuid::new_v4(), "a@b.c", "someone-else", "techflow-api", 15);

        let token = codec.encode(&claims).unwrap();
        assert!(codec.decode(&token).is_err());
    }
}
