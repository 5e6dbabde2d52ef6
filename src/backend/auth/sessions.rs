/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the signed, time-limited tokens carried
 * in the session cookie. A token encodes only the user id (`sub`) and its
 * expiry (`exp`); it is never persisted and cannot be revoked.
 */

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Token lifetime: one hour
pub const TOKEN_EXPIRES_IN_SECS: u64 = 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// A freshly signed token and its lifetime in seconds
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: u64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature mismatch, expired, malformed, a `sub` that is not a user id,
    /// or an expiry past the end of the clock
    #[error("invalid token: {0}")]
    InvalidToken(String),
    /// Signing failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens with a single HMAC secret
///
/// Built once from `ServerConfig` at startup and shared through `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expires_in: u64,
}

impl TokenService {
    /// Create a token service for the given secret
    pub fn new(secret: &str) -> Self {
        // Expiry is checked by hand in `verify_at` against the caller's clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expires_in: TOKEN_EXPIRES_IN_SECS,
        }
    }

    /// Lifetime of issued tokens in seconds
    pub fn expires_in(&self) -> u64 {
        self.expires_in
    }

    /// Create a token for a user, valid from now
    pub fn issue(&self, user_id: Uuid) -> Result<IssuedToken, TokenError> {
        self.issue_at(user_id, jsonwebtoken::get_current_timestamp())
    }

    /// Create a token for a user as if issued at `now` (Unix seconds)
    pub fn issue_at(&self, user_id: Uuid, now: u64) -> Result<IssuedToken, TokenError> {
        let exp = now
            .checked_add(self.expires_in)
            .ok_or_else(|| TokenError::InvalidToken("token expiry out of range".to_string()))?;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)?;

        Ok(IssuedToken {
            token,
            expires_in: self.expires_in,
        })
    }

    /// Verify a token and return the user id it carries
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        self.verify_at(token, jsonwebtoken::get_current_timestamp())
    }

    /// Verify a token against the clock value `now` (Unix seconds)
    ///
    /// A token stays valid up to and including its `exp` second.
    pub fn verify_at(&self, token: &str, now: u64) -> Result<Uuid, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?
            .claims;

        if now > claims.exp {
            return Err(TokenError::InvalidToken("token expired".to_string()));
        }

        Uuid::parse_str(&claims.sub)
            .map_err(|e| TokenError::InvalidToken(format!("invalid user id in token: {}", e)))
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}
