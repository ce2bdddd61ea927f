/*
 * Responsibility
 * - comments の作成 / 編集 / 削除
 * - 編集・削除は author == 要求者 username のときのみ許可
 */
use std::sync::Arc;

use tracing::info;

use crate::error::AppError;
use crate::repos::error::RepoError;
use crate::repos::board_repo::BoardRepo;
use crate::repos::comment_repo::{CommentRepo, CommentRow};
use crate::services::auth::AuthenticatedMember;
use crate::services::ownership::ensure_author;

#[derive(Clone)]
pub struct CommentService {
    boards: Arc<dyn BoardRepo>,
    comments: Arc<dyn CommentRepo>,
}

impl CommentService {
    pub fn new(boards: Arc<dyn BoardRepo>, comments: Arc<dyn CommentRepo>) -> Self {
        Self { boards, comments }
    }

    pub async fn create(
        &self,
        board_id: i64,
        content: &str,
        member: &AuthenticatedMember,
    ) -> Result<CommentRow, AppError> {
        if self.boards.get(board_id).await?.is_none() {
            return Err(AppError::not_found("board"));
        }

        // the board can still go away before the insert lands
        let row = self
            .comments
            .create(board_id, member.member_id, &member.username, content)
            .await
            .map_err(|e| match e {
                RepoError::MissingParent => AppError::not_found("board"),
                other => other.into(),
            })?;
        info!(comment_id = row.comment_id, board_id, "comment created");
        Ok(row)
    }

    pub async fn edit(
        &self,
        comment_id: i64,
        content: &str,
        member: &AuthenticatedMember,
    ) -> Result<CommentRow, AppError> {
        let comment = self.find(comment_id).await?;
        ensure_author(&member.username, &comment.author, "only the author can edit this comment")?;

        self.comments
            .update(comment_id, content)
            .await?
            .ok_or(AppError::not_found("comment"))
    }

    pub async fn delete(&self, comment_id: i64, member: &AuthenticatedMember) -> Result<(), AppError> {
        let comment = self.find(comment_id).await?;
        ensure_author(&member.username, &comment.author, "only the author can delete this comment")?;

        if !self.comments.delete(comment_id).await? {
            return Err(AppError::not_found("comment"));
        }
        Ok(())
    }

    async fn find(&self, comment_id: i64) -> Result<CommentRow, AppError> {
        self.comments
            .get(comment_id)
            .await?
            .ok_or(AppError::not_found("comment"))
    }
}
