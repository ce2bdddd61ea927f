/*
 * Responsibility
 * - Members の request/response DTO
 * - password は response に含めない
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::member_repo::MemberRow;
use crate::services::password::MAX_PASSWORD_BYTES;

pub const MAX_USERNAME_CHARS: usize = 64;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignupRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        if self.username.trim().chars().count() > MAX_USERNAME_CHARS {
            return Err("username must be <= 64 chars");
        }
        if self.password.trim().is_empty() {
            return Err("password is required");
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err("password must be <= 72 bytes");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err("username and password are required");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub member_id: Uuid,
    pub username: String,
    pub authority: String,
    pub created_at: DateTime<Utc>,
}

impl From<MemberRow> for MemberResponse {
    fn from(row: MemberRow) -> Self {
        Self {
            member_id: row.member_id,
            username: row.username,
            authority: row.authority,
            created_at: row.created_at,
        }
    }
}
