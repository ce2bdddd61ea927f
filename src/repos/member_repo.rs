/*
 * Responsibility
 * - members テーブル向け SQLx 操作
 * - username は UNIQUE (重複は RepoError::Conflict)
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct MemberRow {
    pub member_id: Uuid,
    pub username: String,
    // bcrypt hash, never serialized
    pub password: String,
    pub authority: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[async_trait]
pub trait MemberRepo: Send + Sync {
    async fn exists_by_username(&self, username: &str) -> RepoResult<bool>;

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        authority: &str,
    ) -> RepoResult<MemberRow>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<MemberRow>>;
}

#[derive(Clone, Debug)]
pub struct PgMemberRepo {
    pool: PgPool,
}

impl PgMemberRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepo for PgMemberRepo {
    async fn exists_by_username(&self, username: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM members WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        authority: &str,
    ) -> RepoResult<MemberRow> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            INSERT INTO members (username, password, authority)
            VALUES ($1, $2, $3)
            RETURNING member_id, username, password, authority, created_at, modified_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(authority)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<MemberRow>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT member_id, username, password, authority, created_at, modified_at
            FROM members
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
