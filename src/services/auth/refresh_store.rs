use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, error};

use crate::error::AppError;
use crate::repos::refresh_token_repo::RefreshTokenRepo;

/// Outcome of comparing a presented refresh token with the stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredRefresh {
    Match,
    Mismatch,
    Missing,
}

/// One refresh token per member, keyed by username. Only the digest is persisted.
#[derive(Clone)]
pub struct RefreshTokenStore {
    repo: Arc<dyn RefreshTokenRepo>,
}

impl std::fmt::Debug for RefreshTokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTokenStore").finish_non_exhaustive()
    }
}

impl RefreshTokenStore {
    pub fn new(repo: Arc<dyn RefreshTokenRepo>) -> Self {
        Self { repo }
    }

    /// Overwrites whatever was stored for `username`.
    pub async fn save(&self, username: &str, refresh_token: &str) -> Result<(), AppError> {
        self.repo
            .upsert(username, hash_refresh_token(refresh_token))
            .await
            .map_err(|e| {
                error!(username, error = %e, "Failed to store refresh token");
                AppError::Internal
            })
    }

    pub async fn check(&self, username: &str, refresh_token: &str) -> Result<StoredRefresh, AppError> {
        let row = self.repo.find_by_key(username).await.map_err(|e| {
            error!(username, error = %e, "Failed to look up refresh token");
            AppError::Internal
        })?;

        let Some(row) = row else {
            debug!(username, "no stored refresh token");
            return Ok(StoredRefresh::Missing);
        };

        if row.token_hash == hash_refresh_token(refresh_token) {
            Ok(StoredRefresh::Match)
        } else {
            Ok(StoredRefresh::Mismatch)
        }
    }

    /// Returns whether a token was stored.
    pub async fn delete(&self, username: &str) -> Result<bool, AppError> {
        self.repo.delete(username).await.map_err(|e| {
            error!(username, error = %e, "Failed to delete refresh token");
            AppError::Internal
        })
    }
}

fn hash_refresh_token(token: &str) -> Vec<u8> {
    // sha256(token) -> raw 32 bytes (stored as BYTEA)
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hasher.finalize().to_vec()
}
