/*
 * Responsibility
 * - token 発行 / 再発行の request/response DTO
 */
use serde::{Deserialize, Serialize};

use crate::services::auth::TokenPair;

#[derive(Debug, Deserialize)]
pub struct ReissueRequest {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub grant_type: &'static str,
    pub access_token: String,
    /// epoch millis
    pub access_token_expires_in: i64,
    pub refresh_token: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            grant_type: pair.grant_type,
            access_token: pair.access_token,
            access_token_expires_in: pair.access_token_expires_in,
            refresh_token: pair.refresh_token,
        }
    }
}
