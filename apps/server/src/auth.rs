//! JWT bearer credential issuing and verification.
//!
//! Protected handlers take an [`AuthUser`] extractor; the services below the
//! HTTP layer only ever see the authenticated user id, never the token.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::main_lib::AppState;
use dompetku_core::users::User;
use dompetku_core::{Error, Result};

/// Token lifetime: 7 days.
const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub username: String,
    pub exp: i64,
}

/// Holds the signing keys derived from the configured secret.
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthManager {
    pub fn new(secret: &str) -> Self {
        AuthManager {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed HS256 token for the user.
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let claims = Claims {
            user_id: user.id.clone(),
            username: user.username.clone(),
            exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| Error::Unexpected(format!("failed to sign token: {e}")))
    }

    /// Verifies a token's signature and expiry.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| Error::Unauthorized("Token tidak valid".to_string()))
    }
}

/// Authenticated user identity, extracted from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub username: String,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> std::result::Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("Authorization header tidak ditemukan"))?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("Format Authorization header tidak valid"))?;

        let claims = state.auth.verify_token(token)?;
        Ok(AuthUser {
            user_id: claims.user_id,
            username: claims.username,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_user() -> User {
        User {
            id: "65f0a1b2c3d4e5f6a7b8c9d0".to_string(),
            username: "budi1234".to_string(),
            password_hash: "hash".to_string(),
            nama: "Budi".to_string(),
            foto: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let auth = AuthManager::new("test-secret");
        let token = auth.issue_token(&test_user()).unwrap();
        let claims = auth.verify_token(&token).unwrap();
        assert_eq!(claims.user_id, "65f0a1b2c3d4e5f6a7b8c9d0");
        assert_eq!(claims.username, "budi1234");
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let auth = AuthManager::new("test-secret");
        let other = AuthManager::new("other-secret");
        let token = auth.issue_token(&test_user()).unwrap();
        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let auth = AuthManager::new("test-secret");
        assert!(auth.verify_token("not-a-token").is_err());
        assert!(auth.verify_token("").is_err());
    }
}
