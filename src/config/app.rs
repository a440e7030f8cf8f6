//! # Application Configuration Loader
//!
//! Loads preview and CORS settings from the environment.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `PREVIEW_*` | See [`PreviewConfig`] | |
//! | `CORS_ORIGINS` | Allowed origins for CORS (`*` for any) | `http://localhost:5173` |
//! | `CORS_CREDENTIALS` | Allow cookies/headers in CORS requests | `false` |
//!
//! # Example
//! ```rust,no_run
//! use photo_preview::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("previews capped at {:?}", cfg.preview.bounds());
//! ```

use std::env;

use tracing::debug;

use crate::config::{image::PreviewConfig, web::CorsConfig};

/// Top-level application configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    pub preview: PreviewConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    /// Loads dotenv files (outside production) and reads all settings.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        let cfg = AppConfig {
            preview: PreviewConfig::from_env(),
            cors: CorsConfig::from_env(),
        };
        debug!("loaded config for {app_env}: {cfg:?}");
        cfg
    }
}
