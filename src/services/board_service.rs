/*
 * Responsibility
 * - boards の一覧 / ページング / 詳細 / 作成 / 編集 / 削除
 * - 編集・削除は author == 要求者 username のときのみ許可
 */
use std::sync::Arc;

use tracing::info;

use crate::error::AppError;
use crate::repos::board_repo::{BoardRepo, BoardRow, BoardSort};
use crate::repos::comment_repo::{CommentRepo, CommentRow};
use crate::services::auth::AuthenticatedMember;
use crate::services::ownership::ensure_author;

pub const MAX_PAGE_SIZE: i64 = 100;

#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort_by: String,
    pub is_asc: bool,
}

/// One page of results plus the numbers a client needs to navigate.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
    pub first: bool,
    pub last: bool,
}

impl<T> Page<T> {
    fn new(content: Vec<T>, total_elements: i64, number: i64, size: i64) -> Self {
        let total_pages = (total_elements + size - 1) / size;
        Self {
            content,
            total_elements,
            total_pages,
            number,
            size,
            first: number == 0,
            last: number >= total_pages.saturating_sub(1),
        }
    }

    pub fn try_map<U, E>(self, f: impl FnMut(T) -> Result<U, E>) -> Result<Page<U>, E> {
        let content = self.content.into_iter().map(f).collect::<Result<Vec<_>, _>>()?;
        Ok(Page {
            content,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            first: self.first,
            last: self.last,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BoardDetail {
    pub board: BoardRow,
    pub comments: Vec<CommentRow>,
}

#[derive(Clone)]
pub struct BoardService {
    boards: Arc<dyn BoardRepo>,
    comments: Arc<dyn CommentRepo>,
}

impl BoardService {
    pub fn new(boards: Arc<dyn BoardRepo>, comments: Arc<dyn CommentRepo>) -> Self {
        Self { boards, comments }
    }

    pub async fn list(&self) -> Result<Vec<BoardRow>, AppError> {
        Ok(self.boards.list_by_modified_desc().await?)
    }

    pub async fn page(&self, req: &PageRequest) -> Result<Page<BoardRow>, AppError> {
        if req.page < 0 {
            return Err(AppError::bad_request("INVALID_PAGE", "page must be >= 0"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&req.size) {
            return Err(AppError::bad_request(
                "INVALID_PAGE",
                format!("size must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }
        let sort = BoardSort::parse(&req.sort_by).ok_or_else(|| {
            AppError::bad_request("INVALID_SORT", format!("cannot sort by '{}'", req.sort_by))
        })?;

        let total = self.boards.count().await?;
        // an offset past the end (or past i64) is an empty page, not a query
        let rows = match req.page.checked_mul(req.size) {
            Some(offset) if offset < total => {
                self.boards.page(sort, req.is_asc, req.size, offset).await?
            }
            _ => Vec::new(),
        };

        Ok(Page::new(rows, total, req.page, req.size))
    }

    pub async fn get(&self, board_id: i64) -> Result<BoardDetail, AppError> {
        let board = self
            .boards
            .get(board_id)
            .await?
            .ok_or(AppError::not_found("board"))?;
        let comments = self.comments.list_by_board(board_id).await?;

        Ok(BoardDetail { board, comments })
    }

    pub async fn create(
        &self,
        title: &str,
        content: &str,
        member: &AuthenticatedMember,
    ) -> Result<BoardRow, AppError> {
        let row = self
            .boards
            .create(title, content, &member.username, member.member_id)
            .await?;
        info!(board_id = row.board_id, author = %row.author, "board created");
        Ok(row)
    }

    pub async fn edit(
        &self,
        board_id: i64,
        title: &str,
        content: &str,
        member: &AuthenticatedMember,
    ) -> Result<BoardRow, AppError> {
        let board = self
            .boards
            .get(board_id)
            .await?
            .ok_or(AppError::not_found("board"))?;
        ensure_author(&member.username, &board.author, "only the author can edit this board")?;

        self.boards
            .update(board_id, title, content)
            .await?
            .ok_or(AppError::not_found("board"))
    }

    pub async fn delete(&self, board_id: i64, member: &AuthenticatedMember) -> Result<(), AppError> {
        let board = self
            .boards
            .get(board_id)
            .await?
            .ok_or(AppError::not_found("board"))?;
        ensure_author(&member.username, &board.author, "only the author can delete this board")?;

        if !self.boards.delete(board_id).await? {
            return Err(AppError::not_found("board"));
        }
        info!(board_id, "board deleted");
        Ok(())
    }
}
