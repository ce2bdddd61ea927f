//! Bearer token → AuthCtx.
//!
//! - `authenticate` runs on every API request. A usable token attaches an `AuthCtx`
//!   to the request extensions; anything else lets the request through anonymously.
//! - `require_member` guards the protected sub-router and answers 401 when no
//!   `AuthCtx` was attached.

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

pub const MISSING_TOKEN: &str = "invalid or missing token";

/// Attach the optional bearer filter to `router`.
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, authenticate))
}

fn bearer_token(req: &Request<Body>) -> Option<&str> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then_some(token)
}

async fn authenticate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = bearer_token(&req).map(str::to_owned);
    let member = match token {
        Some(token) => state.tokens.authenticate(&token).await,
        None => None,
    };

    if let Some(member) = member {
        tracing::debug!(username = %member.username, "request authenticated");
        req.extensions_mut().insert(AuthCtx::new(member));
    }

    next.run(req).await
}

pub async fn require_member(req: Request<Body>, next: Next) -> Response {
    if req.extensions().get::<AuthCtx>().is_none() {
        return AppError::unauthorized(MISSING_TOKEN).into_response();
    }

    next.run(req).await
}
