use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::repos::error::RepoResult;

/// DB access for refresh token persistence.
///
/// Notes:
/// - One row per member (`rt_key` = username). Saving overwrites the previous value.
/// - We store only a hash of the refresh token.
#[async_trait]
pub trait RefreshTokenRepo: Send + Sync {
    /// Insert or overwrite the refresh token hash for `key`.
    async fn upsert(&self, key: &str, token_hash: Vec<u8>) -> RepoResult<()>;

    async fn find_by_key(&self, key: &str) -> RepoResult<Option<RefreshTokenRow>>;

    async fn delete(&self, key: &str) -> RepoResult<bool>;
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RefreshTokenRow {
    pub rt_key: String,
    pub token_hash: Vec<u8>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct PgRefreshTokenRepo {
    pool: PgPool,
}

impl PgRefreshTokenRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepo for PgRefreshTokenRepo {
    async fn upsert(&self, key: &str, token_hash: Vec<u8>) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO refresh_tokens (rt_key, token_hash)
            VALUES ($1, $2)
            ON CONFLICT (rt_key)
            DO UPDATE SET token_hash = EXCLUDED.token_hash, updated_at = now()
            "#,
        )
        .bind(key)
        .bind(token_hash)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_key(&self, key: &str) -> RepoResult<Option<RefreshTokenRow>> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT rt_key, token_hash, updated_at
            FROM refresh_tokens
            WHERE rt_key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, key: &str) -> RepoResult<bool> {
        let done = sqlx::query(
            r#"
            DELETE FROM refresh_tokens
            WHERE rt_key = $1
            "#,
        )
        .bind(key)
        .execute(&self.pool)
        .await?;

        Ok(done.rows_affected() > 0)
    }
}
