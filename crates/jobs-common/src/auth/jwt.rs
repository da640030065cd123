//! JWT access and refresh tokens
//!
//! Both tokens carry the id of the login session that issued them. A refresh
//! token is only honoured while that session is still active in the store.

use chrono::{Duration, Utc};
use jobs_core::UserId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Unique token id
    pub jti: Uuid,
    pub token_type: TokenType,
    /// Login session the token belongs to
    pub session_id: Uuid,
}

impl Claims {
    /// Get the user ID from the subject
    ///
    /// # Errors
    /// Returns `InvalidToken` if the subject is not a user id
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.sub.parse::<UserId>().map_err(|_| AppError::InvalidToken)
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    #[must_use]
    pub fn is_access_token(&self) -> bool {
        self.token_type == TokenType::Access
    }

    #[must_use]
    pub fn is_refresh_token(&self) -> bool {
        self.token_type == TokenType::Refresh
    }
}

/// Access and refresh tokens issued at login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
    /// Access token lifetime in seconds
    pub expires_in: i64,
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
    refresh_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry times in seconds
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64, refresh_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    /// Lifetime of refresh tokens, which is also the session lifetime
    #[must_use]
    pub fn refresh_ttl(&self) -> Duration {
        Duration::seconds(self.refresh_token_expiry)
    }

    /// Issue an access/refresh pair for a session
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_pair(&self, user_id: UserId, session_id: Uuid) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access: self.encode_token(user_id, TokenType::Access, session_id)?,
            refresh: self.encode_token(user_id, TokenType::Refresh, session_id)?,
            expires_in: self.access_token_expiry,
        })
    }

    /// Issue a fresh access token for an existing session
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access(&self, user_id: UserId, session_id: Uuid) -> Result<String, AppError> {
        self.encode_token(user_id, TokenType::Access, session_id)
    }

    fn encode_token(
        &self,
        user_id: UserId,
        token_type: TokenType,
        session_id: Uuid,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiry = match token_type {
            TokenType::Access => self.access_token_expiry,
            TokenType::Refresh => self.refresh_token_expiry,
        };

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            jti: Uuid::new_v4(),
            token_type,
            session_id,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode JWT: {e}")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })
    }

    /// Validate an access token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not an access token
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;
        if !claims.is_access_token() {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }

    /// Validate a refresh token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, or not a refresh token
    pub fn validate_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;
        if !claims.is_refresh_token() {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .field("refresh_token_expiry", &self.refresh_token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 900, 604_800)
    }

    #[test]
    fn test_pair_carries_session_and_user() {
        let service = service();
        let session_id = Uuid::new_v4();
        let pair = service.issue_pair(UserId::new(42), session_id).unwrap();
        assert_eq!(pair.expires_in, 900);

        let access = service.validate_access_token(&pair.access).unwrap();
        assert_eq!(access.user_id().unwrap(), UserId::new(42));
        assert_eq!(access.session_id, session_id);
        assert!(!access.is_expired());

        let refresh = service.validate_refresh_token(&pair.refresh).unwrap();
        assert_eq!(refresh.session_id, session_id);
        assert_ne!(access.jti, refresh.jti);
    }

    #[test]
    fn test_token_types_not_interchangeable() {
        let service = service();
        let pair = service.issue_pair(UserId::new(1), Uuid::new_v4()).unwrap();
        assert!(matches!(
            service.validate_access_token(&pair.refresh),
            Err(AppError::InvalidToken)
        ));
        assert!(matches!(
            service.validate_refresh_token(&pair.access),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token() {
        let service = JwtService::new("test-secret-key-that-is-long-enough", -120, -120);
        let pair = service.issue_pair(UserId::new(1), Uuid::new_v4()).unwrap();
        assert!(matches!(
            service.decode_token(&pair.access),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let pair = service().issue_pair(UserId::new(1), Uuid::new_v4()).unwrap();
        let other = JwtService::new("another-secret-key-of-enough-size", 900, 900);
        assert!(matches!(other.decode_token(&pair.access), Err(AppError::InvalidToken)));
        assert!(matches!(other.decode_token("not.a.jwt"), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_issue_access_for_session() {
        let service = service();
        let session_id = Uuid::new_v4();
        let token = service.issue_access(UserId::new(5), session_id).unwrap();
        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.session_id, session_id);
    }
}
