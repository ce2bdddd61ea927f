/*
 * Responsibility
 * - hearts (member, board) の toggle / 集計
 * - (member_id, board_id) は UNIQUE
 */
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::board_repo::BoardRow;
use crate::repos::error::{RepoError, RepoResult};

#[async_trait]
pub trait HeartRepo: Send + Sync {
    /// Remove the heart if it exists, otherwise add it.
    ///
    /// Returns `true` when the member now hearts the board.
    async fn toggle(&self, member_id: Uuid, board_id: i64) -> RepoResult<bool>;

    async fn count_by_board(&self, board_id: i64) -> RepoResult<i64>;

    /// Boards hearted by the member, most recently hearted first.
    async fn list_boards_by_member(&self, member_id: Uuid) -> RepoResult<Vec<BoardRow>>;
}

#[derive(Clone, Debug)]
pub struct PgHeartRepo {
    pool: PgPool,
}

impl PgHeartRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HeartRepo for PgHeartRepo {
    async fn toggle(&self, member_id: Uuid, board_id: i64) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            r#"
            DELETE FROM hearts
            WHERE member_id = $1 AND board_id = $2
            "#,
        )
        .bind(member_id)
        .bind(board_id)
        .execute(&mut *tx)
        .await?;

        let hearted = if removed.rows_affected() > 0 {
            false
        } else {
            sqlx::query(
                r#"
                INSERT INTO hearts (member_id, board_id)
                VALUES ($1, $2)
                ON CONFLICT (member_id, board_id) DO NOTHING
                "#,
            )
            .bind(member_id)
            .bind(board_id)
            .execute(&mut *tx)
            .await
            .map_err(RepoError::from_sqlx)?;
            true
        };

        tx.commit().await?;
        Ok(hearted)
    }

    async fn count_by_board(&self, board_id: i64) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM hearts WHERE board_id = $1")
                .bind(board_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    async fn list_boards_by_member(&self, member_id: Uuid) -> RepoResult<Vec<BoardRow>> {
        let rows = sqlx::query_as::<_, BoardRow>(
            r#"
            SELECT
                b.board_id, b.title, b.content, b.author, b.member_id, b.created_at, b.modified_at,
                (SELECT COUNT(*) FROM comments c WHERE c.board_id = b.board_id) AS comment_count,
                (SELECT COUNT(*) FROM hearts h2 WHERE h2.board_id = b.board_id) AS heart_count
            FROM hearts h
            JOIN boards b ON b.board_id = h.board_id
            WHERE h.member_id = $1
            ORDER BY h.heart_id DESC
            "#,
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
