/*
 * Responsibility
 * - POST /signup, /login, /reissue, /auth/logout
 * - login / reissue は token を header (Authorization / Refresh-Token) でも返す
 */
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
};

use crate::{
    api::v1::{
        dto::members::{LoginRequest, MemberResponse, SignupRequest},
        dto::token::{ReissueRequest, TokenResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    middleware::cors::REFRESH_TOKEN_HEADER,
    services::auth::TokenPair,
    state::AppState,
};

fn token_headers(pair: &TokenPair) -> Result<HeaderMap, AppError> {
    let access = HeaderValue::from_str(&format!("Bearer {}", pair.access_token))
        .map_err(|_| AppError::Internal)?;
    let refresh = HeaderValue::from_str(&pair.refresh_token).map_err(|_| AppError::Internal)?;

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, access);
    headers.insert(HeaderName::from_static(REFRESH_TOKEN_HEADER), refresh);
    Ok(headers)
}

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION_ERROR", m))?;

    let member = state
        .members
        .signup(req.username.trim(), &req.password, &req.password_confirm)
        .await?;

    Ok((StatusCode::CREATED, Json(member.into())))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<(HeaderMap, Json<MemberResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION_ERROR", m))?;

    let (member, pair) = state
        .members
        .login(req.username.trim(), &req.password)
        .await?;

    Ok((token_headers(&pair)?, Json(member.into())))
}

pub async fn reissue(
    State(state): State<AppState>,
    Json(req): Json<ReissueRequest>,
) -> Result<(HeaderMap, Json<TokenResponse>), AppError> {
    let pair = state
        .members
        .reissue(&req.access_token, &req.refresh_token)
        .await?;

    Ok((token_headers(&pair)?, Json(pair.into())))
}

pub async fn logout(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<StatusCode, AppError> {
    state.members.logout(&ctx.member.username).await?;
    Ok(StatusCode::NO_CONTENT)
}
