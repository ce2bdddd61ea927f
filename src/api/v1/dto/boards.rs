/*
 * Responsibility
 * - Boards の request/response DTO
 * - 公開 ID は encode 済みの値を返す (内部 ID を漏らさない)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::v1::dto::comments::CommentResponse;
use crate::repos::board_repo::BoardRow;
use crate::services::board_service::BoardDetail;
use crate::services::id_codec::{IdCodec, Result as IdResult};

#[derive(Debug, Deserialize)]
pub struct BoardRequest {
    pub title: String,
    pub content: String,
}

impl BoardRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        if self.content.trim().is_empty() {
            return Err("content is required");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct PagerQuery {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default)]
    pub is_asc: bool,
}

fn default_size() -> i64 {
    10
}

fn default_sort_by() -> String {
    "id".to_string()
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub id: String, // encoded
    pub title: String,
    pub content: String,
    pub author: String,
    pub comment_count: i64,
    pub heart_count: i64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl BoardResponse {
    pub fn from_row(codec: &IdCodec, row: BoardRow) -> IdResult<Self> {
        Ok(Self {
            id: codec.encode(row.board_id)?,
            title: row.title,
            content: row.content,
            author: row.author,
            comment_count: row.comment_count,
            heart_count: row.heart_count,
            created_at: row.created_at,
            modified_at: row.modified_at,
        })
    }

    pub fn from_rows(codec: &IdCodec, rows: Vec<BoardRow>) -> IdResult<Vec<Self>> {
        rows.into_iter().map(|row| Self::from_row(codec, row)).collect()
    }
}

#[derive(Debug, Serialize)]
pub struct BoardDetailResponse {
    #[serde(flatten)]
    pub board: BoardResponse,
    pub comments: Vec<CommentResponse>,
}

impl BoardDetailResponse {
    pub fn from_detail(codec: &IdCodec, detail: BoardDetail) -> IdResult<Self> {
        Ok(Self {
            board: BoardResponse::from_row(codec, detail.board)?,
            comments: CommentResponse::from_rows(codec, detail.comments)?,
        })
    }
}
