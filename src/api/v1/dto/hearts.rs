use serde::Serialize;

use crate::services::heart_service::HeartToggle;

#[derive(Debug, Serialize)]
pub struct HeartResponse {
    pub hearted: bool,
    pub heart_count: i64,
}

impl From<HeartToggle> for HeartResponse {
    fn from(t: HeartToggle) -> Self {
        Self {
            hearted: t.hearted,
            heart_count: t.heart_count,
        }
    }
}
