//! CORS policy for browser clients.
//!
//! - development: any origin, no credentials
//! - production: exact-match allowlist from `CORS_ALLOWED_ORIGINS`; an empty list allows none
//!
//! Tokens travel in headers, so `Authorization` / `Refresh-Token` must be both
//! accepted on requests and readable on responses.

use axum::Router;
use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::Config;

pub const REFRESH_TOKEN_HEADER: &str = "refresh-token";

pub fn apply(router: Router, config: &Config) -> Router {
    router.layer(layer(config))
}

fn layer(config: &Config) -> CorsLayer {
    let base = if config.app_env.is_production() {
        let allowed: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        CorsLayer::new().allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _req| allowed.iter().any(|v| v == origin),
        ))
    } else {
        CorsLayer::new().allow_origin(Any)
    };

    let exposed = [
        header::AUTHORIZATION,
        HeaderName::from_static(REFRESH_TOKEN_HEADER),
        HeaderName::from_static("x-request-id"),
    ];

    base.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([
        header::AUTHORIZATION,
        header::CONTENT_TYPE,
        header::ACCEPT,
        HeaderName::from_static(REFRESH_TOKEN_HEADER),
        HeaderName::from_static("x-request-id"),
    ])
    .expose_headers(exposed)
    .max_age(std::time::Duration::from_secs(60 * 10))
}
