/*
 * Responsibility
 * - repo の trait と Postgres 実装の公開
 * - Repos: service 層へ渡す repo 一式 (Arc<dyn ...>)
 */
use std::sync::Arc;

use sqlx::PgPool;

pub mod board_repo;
pub mod comment_repo;
pub mod error;
pub mod heart_repo;
pub mod member_repo;
pub mod refresh_token_repo;

use board_repo::{BoardRepo, PgBoardRepo};
use comment_repo::{CommentRepo, PgCommentRepo};
use heart_repo::{HeartRepo, PgHeartRepo};
use member_repo::{MemberRepo, PgMemberRepo};
use refresh_token_repo::{PgRefreshTokenRepo, RefreshTokenRepo};

#[derive(Clone)]
pub struct Repos {
    pub members: Arc<dyn MemberRepo>,
    pub boards: Arc<dyn BoardRepo>,
    pub comments: Arc<dyn CommentRepo>,
    pub hearts: Arc<dyn HeartRepo>,
    pub refresh_tokens: Arc<dyn RefreshTokenRepo>,
}

impl Repos {
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            members: Arc::new(PgMemberRepo::new(pool.clone())),
            boards: Arc::new(PgBoardRepo::new(pool.clone())),
            comments: Arc::new(PgCommentRepo::new(pool.clone())),
            hearts: Arc::new(PgHeartRepo::new(pool.clone())),
            refresh_tokens: Arc::new(PgRefreshTokenRepo::new(pool)),
        }
    }
}
