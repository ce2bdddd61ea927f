/*
 * Responsibility
 * - Comments の request/response DTO
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::repos::comment_repo::CommentRow;
use crate::services::id_codec::{IdCodec, Result as IdResult};

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    pub content: String,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.content.trim().is_empty() {
            return Err("content is required");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: String,       // encoded
    pub board_id: String, // encoded
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn from_row(codec: &IdCodec, row: CommentRow) -> IdResult<Self> {
        Ok(Self {
            id: codec.encode(row.comment_id)?,
            board_id: codec.encode(row.board_id)?,
            author: row.author,
            content: row.content,
            created_at: row.created_at,
            modified_at: row.modified_at,
        })
    }

    pub fn from_rows(codec: &IdCodec, rows: Vec<CommentRow>) -> IdResult<Vec<Self>> {
        rows.into_iter().map(|row| Self::from_row(codec, row)).collect()
    }
}
