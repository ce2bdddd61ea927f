use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::auth::jwt::{JwtCodec, TokenError};

pub const GRANT_TYPE: &str = "bearer";

#[derive(Debug, Serialize, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    auth: String,
    iat: i64,
    exp: i64,
    jti: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RefreshTokenClaims {
    sub: String,
    iat: i64,
    exp: i64,
    jti: String,
}

/// Claims as read back from any of our tokens. `auth` is absent on refresh tokens.
#[derive(Debug, Deserialize)]
struct PresentedClaims {
    sub: String,
    #[serde(default)]
    auth: Option<String>,
}

/// Who a token speaks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessIdentity {
    pub username: String,
    pub authority: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    Valid,
    Expired,
    Malformed,
    InvalidSignature,
    Unsupported,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub grant_type: &'static str,
    pub access_token: String,
    /// Access token expiry, epoch millis.
    pub access_token_expires_in: i64,
    pub refresh_token: String,
}

/// Mints and checks access/refresh tokens. Stateless: persistence lives in `RefreshTokenStore`.
#[derive(Clone, Debug)]
pub struct TokenProvider {
    jwt: JwtCodec,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
}

impl TokenProvider {
    pub fn new(jwt: JwtCodec, access_ttl_seconds: u64, refresh_ttl_seconds: u64) -> Self {
        Self {
            jwt,
            access_ttl_seconds: access_ttl_seconds as i64,
            refresh_ttl_seconds: refresh_ttl_seconds as i64,
        }
    }

    pub fn issue(&self, identity: &AccessIdentity) -> Result<TokenPair, TokenError> {
        let now = Utc::now().timestamp();
        let access_exp = now + self.access_ttl_seconds;

        let access_token = self.jwt.sign(&AccessTokenClaims {
            sub: identity.username.clone(),
            auth: identity.authority.clone(),
            iat: now,
            exp: access_exp,
            jti: Uuid::new_v4().to_string(),
        })?;

        let refresh_token = self.jwt.sign(&RefreshTokenClaims {
            sub: identity.username.clone(),
            iat: now,
            exp: now + self.refresh_ttl_seconds,
            jti: Uuid::new_v4().to_string(),
        })?;

        tracing::debug!(
            username = %identity.username,
            access_exp,
            "issued token pair"
        );

        Ok(TokenPair {
            grant_type: GRANT_TYPE,
            access_token,
            access_token_expires_in: access_exp * 1000,
            refresh_token,
        })
    }

    /// Signature + expiry check. Never fails; the reason is logged.
    pub fn validate(&self, token: &str) -> TokenStatus {
        match self.jwt.decode::<PresentedClaims>(token) {
            Ok(_) => TokenStatus::Valid,
            Err(e) => {
                tracing::info!(reason = %e, "jwt rejected");
                match e {
                    TokenError::Expired => TokenStatus::Expired,
                    TokenError::Malformed => TokenStatus::Malformed,
                    TokenError::InvalidSignature => TokenStatus::InvalidSignature,
                    _ => TokenStatus::Unsupported,
                }
            }
        }
    }

    /// Identity carried by an access token. Expiry is not enforced here; the signature is.
    pub fn claims(&self, access_token: &str) -> Result<AccessIdentity, TokenError> {
        let claims = self
            .jwt
            .decode_ignoring_expiry::<PresentedClaims>(access_token)?;

        let authority = claims
            .auth
            .filter(|a| !a.trim().is_empty())
            .ok_or(TokenError::MissingAuthority)?;

        if claims.sub.trim().is_empty() {
            return Err(TokenError::Malformed);
        }

        Ok(AccessIdentity {
            username: claims.sub,
            authority,
        })
    }
}
