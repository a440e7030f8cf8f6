//! # photo_preview
//!
//! Downscaled, re-encoded previews of photos for inline web display.
//!
//! Given a file path, the preview endpoint returns a
//! `data:image/<format>;base64,...` string whose size fits a bounding box
//! (1024×1024 by default) with the aspect ratio preserved.
//!
//! - Dimension planning and output format selection (`image::planner`, `image::format`)
//! - Pluggable image backend (`image::processor`, `image::image_rs_processor`)
//! - Axum endpoint and composition root (`web::preview`, `web::router`)
//! - Environment-driven configuration (`config`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust,no_run
//! use photo_preview::config::app::AppConfig;
//! use photo_preview::web::router::build_app;
//!
//! let app = build_app(&AppConfig::from_env());
//! ```

// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use base64;
pub use dotenvy;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod image;
pub mod web;
