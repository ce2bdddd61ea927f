/*
 * Responsibility
 *  - core と types を束ね、handler へ公開する型を制御する
 */
mod core;
mod types;

pub use types::*;
