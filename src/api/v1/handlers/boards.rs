/*
 * Responsibility
 * - /boards 系 handler (一覧 / pager / 詳細 は公開, 作成 / 編集 / 削除 は /auth 配下)
 * - Path の board_id は公開 ID → extractor で内部 ID に変換して受け取る
 * - ownership 判定は service に任せる
 */
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::boards::{BoardDetailResponse, BoardRequest, BoardResponse, PagerQuery},
        dto::page::PageResponse,
        extractors::{AuthCtxExtractor, PublicBoardId},
    },
    error::AppError,
    services::board_service::PageRequest,
    state::AppState,
};

pub async fn list_boards(
    State(state): State<AppState>,
) -> Result<Json<Vec<BoardResponse>>, AppError> {
    let rows = state.boards.list().await?;
    Ok(Json(BoardResponse::from_rows(&state.id_codec, rows)?))
}

pub async fn page_boards(
    State(state): State<AppState>,
    Query(q): Query<PagerQuery>,
) -> Result<Json<PageResponse<BoardResponse>>, AppError> {
    let page = state
        .boards
        .page(&PageRequest {
            page: q.page,
            size: q.size,
            sort_by: q.sort_by,
            is_asc: q.is_asc,
        })
        .await?;

    let page = page.try_map(|row| BoardResponse::from_row(&state.id_codec, row))?;
    Ok(Json(page.into()))
}

pub async fn get_board(
    State(state): State<AppState>,
    board_id: PublicBoardId,
) -> Result<Json<BoardDetailResponse>, AppError> {
    let detail = state.boards.get(board_id.id).await?;
    Ok(Json(BoardDetailResponse::from_detail(&state.id_codec, detail)?))
}

pub async fn create_board(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<BoardRequest>,
) -> Result<(StatusCode, Json<BoardResponse>), AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION_ERROR", m))?;

    let row = state
        .boards
        .create(&req.title, &req.content, &ctx.member)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BoardResponse::from_row(&state.id_codec, row)?),
    ))
}

pub async fn update_board(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    board_id: PublicBoardId,
    Json(req): Json<BoardRequest>,
) -> Result<Json<BoardResponse>, AppError> {
    req.validate()
        .map_err(|m| AppError::bad_request("VALIDATION_ERROR", m))?;

    let row = state
        .boards
        .edit(board_id.id, &req.title, &req.content, &ctx.member)
        .await?;

    Ok(Json(BoardResponse::from_row(&state.id_codec, row)?))
}

pub async fn delete_board(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    board_id: PublicBoardId,
) -> Result<StatusCode, AppError> {
    state.boards.delete(board_id.id, &ctx.member).await?;
    Ok(StatusCode::NO_CONTENT)
}
