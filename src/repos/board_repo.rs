/*
 * Responsibility
 * - boards CRUD + 一覧 / ページング
 * - comment_count / heart_count は SELECT 時に集計して返す
 * - board 削除は comments / hearts へ CASCADE
 */
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoResult;

#[derive(Debug, Clone, FromRow)]
pub struct BoardRow {
    pub board_id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub member_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub comment_count: i64,
    pub heart_count: i64,
}

/// Whitelisted sort keys for the pager. Never interpolate client input into SQL directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardSort {
    Id,
    Title,
    Author,
    CreatedAt,
    ModifiedAt,
}

impl BoardSort {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "author" => Some(Self::Author),
            "createdAt" | "created_at" => Some(Self::CreatedAt),
            "modifiedAt" | "modified_at" => Some(Self::ModifiedAt),
            _ => None,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Id => "board_id",
            Self::Title => "title",
            Self::Author => "author",
            Self::CreatedAt => "created_at",
            Self::ModifiedAt => "modified_at",
        }
    }
}

#[async_trait]
pub trait BoardRepo: Send + Sync {
    async fn list_by_modified_desc(&self) -> RepoResult<Vec<BoardRow>>;

    async fn page(
        &self,
        sort: BoardSort,
        ascending: bool,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<BoardRow>>;

    async fn count(&self) -> RepoResult<i64>;

    async fn get(&self, board_id: i64) -> RepoResult<Option<BoardRow>>;

    async fn create(
        &self,
        title: &str,
        content: &str,
        author: &str,
        member_id: Uuid,
    ) -> RepoResult<BoardRow>;

    async fn update(&self, board_id: i64, title: &str, content: &str)
    -> RepoResult<Option<BoardRow>>;

    async fn delete(&self, board_id: i64) -> RepoResult<bool>;

    async fn list_by_member(&self, member_id: Uuid) -> RepoResult<Vec<BoardRow>>;
}

const BOARD_COLUMNS: &str = r#"
    b.board_id, b.title, b.content, b.author, b.member_id, b.created_at, b.modified_at,
    (SELECT COUNT(*) FROM comments c WHERE c.board_id = b.board_id) AS comment_count,
    (SELECT COUNT(*) FROM hearts h WHERE h.board_id = b.board_id) AS heart_count
"#;

#[derive(Clone, Debug)]
pub struct PgBoardRepo {
    pool: PgPool,
}

impl PgBoardRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepo for PgBoardRepo {
    async fn list_by_modified_desc(&self) -> RepoResult<Vec<BoardRow>> {
        let sql = format!(
            "SELECT {BOARD_COLUMNS} FROM boards b ORDER BY b.modified_at DESC, b.board_id DESC"
        );
        let rows = sqlx::query_as::<_, BoardRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn page(
        &self,
        sort: BoardSort,
        ascending: bool,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<BoardRow>> {
        let direction = if ascending { "ASC" } else { "DESC" };
        // board_id as tie-breaker keeps pages stable
        let sql = format!(
            "SELECT {BOARD_COLUMNS} FROM boards b \
             ORDER BY b.{column} {direction}, b.board_id {direction} \
             LIMIT $1 OFFSET $2",
            column = sort.column(),
        );
        let rows = sqlx::query_as::<_, BoardRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    async fn count(&self) -> RepoResult<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM boards")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    async fn get(&self, board_id: i64) -> RepoResult<Option<BoardRow>> {
        let sql = format!("SELECT {BOARD_COLUMNS} FROM boards b WHERE b.board_id = $1");
        let row = sqlx::query_as::<_, BoardRow>(&sql)
            .bind(board_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn create(
        &self,
        title: &str,
        content: &str,
        author: &str,
        member_id: Uuid,
    ) -> RepoResult<BoardRow> {
        let row = sqlx::query_as::<_, BoardRow>(
            r#"
            INSERT INTO boards (title, content, author, member_id)
            VALUES ($1, $2, $3, $4)
            RETURNING
                board_id, title, content, author, member_id, created_at, modified_at,
                0::BIGINT AS comment_count,
                0::BIGINT AS heart_count
            "#,
        )
        .bind(title)
        .bind(content)
        .bind(author)
        .bind(member_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        board_id: i64,
        title: &str,
        content: &str,
    ) -> RepoResult<Option<BoardRow>> {
        let sql = format!(
            r#"
            WITH b AS (
                UPDATE boards
                SET title = $2, content = $3, modified_at = now()
                WHERE board_id = $1
                RETURNING *
            )
            SELECT {BOARD_COLUMNS} FROM b
            "#
        );
        let row = sqlx::query_as::<_, BoardRow>(&sql)
            .bind(board_id)
            .bind(title)
            .bind(content)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn delete(&self, board_id: i64) -> RepoResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM boards
            WHERE board_id = $1
            "#,
        )
        .bind(board_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_member(&self, member_id: Uuid) -> RepoResult<Vec<BoardRow>> {
        let sql = format!(
            "SELECT {BOARD_COLUMNS} FROM boards b WHERE b.member_id = $1 \
             ORDER BY b.modified_at DESC, b.board_id DESC"
        );
        let rows = sqlx::query_as::<_, BoardRow>(&sql)
            .bind(member_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}
