/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が token を検証して request extensions に格納し、handler はこの型だけを受け取る
 */
use crate::services::auth::AuthenticatedMember;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `member.username` が ownership 判定 (author との一致) に使われる
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub member: AuthenticatedMember,
}

impl AuthCtx {
    pub fn new(member: AuthenticatedMember) -> Self {
        Self { member }
    }
}
