/*
 * Responsibility
 * - リソースごとの「意味付き ID 型」を宣言する
 * - ./mod.rs 経由で全て公開されるため、ここには tag と alias だけを置く
 */
use super::core::PublicId;

// boards
pub enum BoardTag {}
pub type PublicBoardId = PublicId<BoardTag>;

// comments
pub enum CommentTag {}
pub type PublicCommentId = PublicId<CommentTag>;
