/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - id_codec: 公開 ID の encode/decode
 *   - tokens: bearer 認証 / token 発行
 *   - 各ユースケース service (repo は trait object 経由)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::repos::Repos;
use crate::services::{
    auth::TokenService, board_service::BoardService, comment_service::CommentService,
    heart_service::HeartService, id_codec::IdCodec, member_service::MemberService,
    mypage_service::MypageService, password::PasswordHasher,
};

#[derive(Clone)]
pub struct AppState {
    pub id_codec: IdCodec,
    pub tokens: Arc<TokenService>,
    pub members: MemberService,
    pub boards: BoardService,
    pub comments: CommentService,
    pub hearts: HeartService,
    pub mypage: MypageService,
}

impl AppState {
    pub fn new(
        repos: Repos,
        id_codec: IdCodec,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            id_codec,
            members: MemberService::new(repos.members.clone(), hasher, tokens.clone()),
            boards: BoardService::new(repos.boards.clone(), repos.comments.clone()),
            comments: CommentService::new(repos.boards.clone(), repos.comments.clone()),
            hearts: HeartService::new(repos.boards.clone(), repos.hearts.clone()),
            mypage: MypageService::new(repos.boards, repos.comments, repos.hearts),
            tokens,
        }
    }
}
