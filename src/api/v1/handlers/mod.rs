pub mod boards;
pub mod comments;
pub mod health;
pub mod hearts;
pub mod members;
pub mod mypage;
