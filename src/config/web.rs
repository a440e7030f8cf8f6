//! # CORS Configuration
//!
//! Origins allowed to fetch previews from a browser, and whether credentials
//! are permitted. Used by [`build_cors`](crate::web::cors::build_cors).
//!
//! # Example
//! ```rust
//! use photo_preview::config::web::CorsConfig;
//!
//! let cors = CorsConfig {
//!     env: "http://localhost:5173".into(),
//!     credentials: true,
//! };
//! assert_eq!(cors.env, "http://localhost:5173");
//! ```

use crate::config::env::read_flag_from;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CorsConfig {
    /// Comma-separated origin list as found in `CORS_ORIGINS`.
    pub env: String,
    pub credentials: bool,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_provider(|k| std::env::var(k).ok())
    }

    pub fn from_provider<F>(provider: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            env: provider("CORS_ORIGINS").unwrap_or_default(),
            credentials: read_flag_from(&provider, "CORS_CREDENTIALS", false),
        }
    }
}
