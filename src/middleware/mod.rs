/*
 * Responsibility
 * - middleware の公開 (router へ apply する単位で module を分ける)
 * - auth: bearer token → AuthCtx / 保護 route の 401
 * - cors / http / security_headers: transport 横断の関心事
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
