use serde::Serialize;

use crate::services::board_service::Page;

/// Wire shape of a page of results.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub number: i64,
    pub size: i64,
    pub first: bool,
    pub last: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            content: page.content,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            number: page.number,
            size: page.size,
            first: page.first,
            last: page.last,
        }
    }
}
