use std::sync::Arc;

use crate::error::AppError;
use crate::repos::board_repo::{BoardRepo, BoardRow};
use crate::repos::comment_repo::{CommentRepo, CommentRow};
use crate::repos::heart_repo::HeartRepo;
use crate::services::auth::AuthenticatedMember;

/// Read-only views over what a member has written or hearted.
#[derive(Clone)]
pub struct MypageService {
    boards: Arc<dyn BoardRepo>,
    comments: Arc<dyn CommentRepo>,
    hearts: Arc<dyn HeartRepo>,
}

impl MypageService {
    pub fn new(
        boards: Arc<dyn BoardRepo>,
        comments: Arc<dyn CommentRepo>,
        hearts: Arc<dyn HeartRepo>,
    ) -> Self {
        Self {
            boards,
            comments,
            hearts,
        }
    }

    pub async fn boards(&self, member: &AuthenticatedMember) -> Result<Vec<BoardRow>, AppError> {
        Ok(self.boards.list_by_member(member.member_id).await?)
    }

    pub async fn comments(&self, member: &AuthenticatedMember) -> Result<Vec<CommentRow>, AppError> {
        Ok(self.comments.list_by_member(member.member_id).await?)
    }

    pub async fn hearted_boards(&self, member: &AuthenticatedMember) -> Result<Vec<BoardRow>, AppError> {
        Ok(self.hearts.list_boards_by_member(member.member_id).await?)
    }
}
