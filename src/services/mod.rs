/*
 * Responsibility
 * - service 層の公開 (handler から呼ばれるユースケース)
 * - repo は trait 経由でのみ参照する
 */
pub mod auth;
pub mod board_service;
pub mod comment_service;
pub mod heart_service;
pub mod id_codec;
pub mod member_service;
pub mod mypage_service;
pub mod ownership;
pub mod password;
