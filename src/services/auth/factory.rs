//! Factory: build `TokenService` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::repos::member_repo::MemberRepo;
use crate::repos::refresh_token_repo::RefreshTokenRepo;
use crate::services::auth::{JwtCodec, RefreshTokenStore, TokenProvider, TokenService};

pub fn build_token_service(
    config: &Config,
    members: Arc<dyn MemberRepo>,
    refresh_tokens: Arc<dyn RefreshTokenRepo>,
) -> Arc<TokenService> {
    let provider = TokenProvider::new(
        JwtCodec::new(&config.jwt_secret, config.access_token_leeway_seconds),
        config.access_token_ttl_seconds,
        config.refresh_token_ttl_seconds,
    );

    Arc::new(TokenService::new(
        provider,
        RefreshTokenStore::new(refresh_tokens),
        members,
    ))
}
