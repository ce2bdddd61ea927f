/*
 * Responsibility
 * - /auth/boards/{board_id}/comments, /auth/comments/{comment_id} handler
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::comments::{CommentRequest, CommentResponse},
        extractors::{AuthCtxExtractor, PublicBoardId, PublicCommentId},
    },
    error::AppError,
    state::AppState,
};

pub async fn create_comment(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    board_id: PublicBoardId,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION_ERROR", m))?;

    let row = state
        .comments
        .create(board_id.id, &req.content, &ctx.member)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse::from_row(&state.id_codec, row)?),
    ))
}

pub async fn update_comment(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    comment_id: PublicCommentId,
    Json(req): Json<CommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION_ERROR", m))?;

    let row = state
        .comments
        .edit(comment_id.id, &req.content, &ctx.member)
        .await?;

    Ok(Json(CommentResponse::from_row(&state.id_codec, row)?))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    comment_id: PublicCommentId,
) -> Result<StatusCode, AppError> {
    state.comments.delete(comment_id.id, &ctx.member).await?;
    Ok(StatusCode::NO_CONTENT)
}
