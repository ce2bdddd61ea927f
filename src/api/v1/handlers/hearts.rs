use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::hearts::HeartResponse,
        extractors::{AuthCtxExtractor, PublicBoardId},
    },
    error::AppError,
    state::AppState,
};

pub async fn toggle_heart(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    board_id: PublicBoardId,
) -> Result<Json<HeartResponse>, AppError> {
    let toggled = state.hearts.toggle(board_id.id, &ctx.member).await?;
    Ok(Json(toggled.into()))
}
