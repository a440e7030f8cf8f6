//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Builds the [`CorsLayer`] that lets a browser front-end on another origin
//! fetch previews.
//!
//! If no origins are configured, defaults to allowing `http://localhost:5173`
//! for local frontend development. A single `*` allows any origin, in which
//! case credentials are never advertised.
//!
//! # Example
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use photo_preview::config::web::CorsConfig;
//! use photo_preview::web::cors::build_cors;
//!
//! let cfg = CorsConfig {
//!     env: "http://example.com".into(),
//!     credentials: false,
//! };
//!
//! let app: Router = Router::new()
//!     .route("/api/photo/compressed", get(|| async { "data:..." }))
//!     .layer(build_cors(&cfg));
//! ```

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::config::web::CorsConfig;

const DEV_ORIGIN: &str = "http://localhost:5173";

/// Parses a comma-separated origin list. Empty or invalid entries are skipped.
fn parse_origins(cors_env: &str) -> Vec<HeaderValue> {
    cors_env
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect()
}

/// Builds a [`CorsLayer`] configured from [`CorsConfig`].
///
/// - Allows `GET`, `POST`, and `OPTIONS` methods.
/// - Allows the `Content-Type` request header (form posts).
/// - Enables credentials when `CorsConfig.credentials` is `true` and the
///   origin list is not a wildcard.
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let wildcard = cors.env.trim() == "*";

    let origin_cfg = if wildcard {
        AllowOrigin::any()
    } else {
        let origins = parse_origins(&cors.env);
        if origins.is_empty() {
            AllowOrigin::list([HeaderValue::from_static(DEV_ORIGIN)])
        } else {
            AllowOrigin::list(origins)
        }
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if cors.credentials {
        if wildcard {
            warn!("CORS_CREDENTIALS ignored: credentials cannot be combined with origin \"*\"");
        } else {
            layer = layer.allow_credentials(true);
        }
    }

    layer
}
