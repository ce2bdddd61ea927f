pub mod boards;
pub mod comments;
pub mod hearts;
pub mod members;
pub mod page;
pub mod token;
