/*
 * Responsibility
 * - /auth/mypage/{..} (自分の board / comment / heart した board)
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::{boards::BoardResponse, comments::CommentResponse},
        extractors::AuthCtxExtractor,
    },
    error::AppError,
    state::AppState,
};

pub async fn my_boards(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<BoardResponse>>, AppError> {
    let rows = state.mypage.boards(&ctx.member).await?;
    Ok(Json(BoardResponse::from_rows(&state.id_codec, rows)?))
}

pub async fn my_comments(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let rows = state.mypage.comments(&ctx.member).await?;
    Ok(Json(CommentResponse::from_rows(&state.id_codec, rows)?))
}

pub async fn my_hearts(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<BoardResponse>>, AppError> {
    let rows = state.mypage.hearted_boards(&ctx.member).await?;
    Ok(Json(BoardResponse::from_rows(&state.id_codec, rows)?))
}
