/*
 * Responsibility
 * - comments CRUD
 * - board_id / member_id の FK (CASCADE) 前提
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub comment_id: i64,
    pub board_id: i64,
    pub member_id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[async_trait]
pub trait CommentRepo: Send + Sync {
    async fn create(
        &self,
        board_id: i64,
        member_id: Uuid,
        author: &str,
        content: &str,
    ) -> RepoResult<CommentRow>;

    async fn get(&self, comment_id: i64) -> RepoResult<Option<CommentRow>>;

    async fn update(&self, comment_id: i64, content: &str) -> RepoResult<Option<CommentRow>>;

    async fn delete(&self, comment_id: i64) -> RepoResult<bool>;

    /// Oldest first.
    async fn list_by_board(&self, board_id: i64) -> RepoResult<Vec<CommentRow>>;

    async fn list_by_member(&self, member_id: Uuid) -> RepoResult<Vec<CommentRow>>;
}

#[derive(Clone, Debug)]
pub struct PgCommentRepo {
    pool: PgPool,
}

impl PgCommentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepo for PgCommentRepo {
    async fn create(
        &self,
        board_id: i64,
        member_id: Uuid,
        author: &str,
        content: &str,
    ) -> RepoResult<CommentRow> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            INSERT INTO comments (board_id, member_id, author, content)
            VALUES ($1, $2, $3, $4)
            RETURNING comment_id, board_id, member_id, author, content, created_at, modified_at
            "#,
        )
        .bind(board_id)
        .bind(member_id)
        .bind(author)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn get(&self, comment_id: i64) -> RepoResult<Option<CommentRow>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, board_id, member_id, author, content, created_at, modified_at
            FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(&self, comment_id: i64, content: &str) -> RepoResult<Option<CommentRow>> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            UPDATE comments
            SET content = $2, modified_at = now()
            WHERE comment_id = $1
            RETURNING comment_id, board_id, member_id, author, content, created_at, modified_at
            "#,
        )
        .bind(comment_id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, comment_id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE comment_id = $1
            "#,
        )
        .bind(comment_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_board(&self, board_id: i64) -> RepoResult<Vec<CommentRow>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, board_id, member_id, author, content, created_at, modified_at
            FROM comments
            WHERE board_id = $1
            ORDER BY comment_id ASC
            "#,
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn list_by_member(&self, member_id: Uuid) -> RepoResult<Vec<CommentRow>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comment_id, board_id, member_id, author, content, created_at, modified_at
            FROM comments
            WHERE member_id = $1
            ORDER BY comment_id DESC
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
