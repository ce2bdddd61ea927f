use std::sync::Arc;

use tracing::debug;

use crate::error::AppError;
use crate::repos::board_repo::BoardRepo;
use crate::repos::error::RepoError;
use crate::repos::heart_repo::HeartRepo;
use crate::services::auth::AuthenticatedMember;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartToggle {
    pub hearted: bool,
    pub heart_count: i64,
}

#[derive(Clone)]
pub struct HeartService {
    boards: Arc<dyn BoardRepo>,
    hearts: Arc<dyn HeartRepo>,
}

impl HeartService {
    pub fn new(boards: Arc<dyn BoardRepo>, hearts: Arc<dyn HeartRepo>) -> Self {
        Self { boards, hearts }
    }

    /// Heart the board, or take the heart back if the member already gave one.
    pub async fn toggle(&self, board_id: i64, member: &AuthenticatedMember) -> Result<HeartToggle, AppError> {
        if self.boards.get(board_id).await?.is_none() {
            return Err(AppError::not_found("board"));
        }

        let hearted = self
            .hearts
            .toggle(member.member_id, board_id)
            .await
            .map_err(|e| match e {
                RepoError::MissingParent => AppError::not_found("board"),
                other => other.into(),
            })?;
        let heart_count = self.hearts.count_by_board(board_id).await?;
        debug!(board_id, hearted, heart_count, "heart toggled");

        Ok(HeartToggle {
            hearted,
            heart_count,
        })
    }
}
