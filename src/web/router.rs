//! # Router
//!
//! Composition root: wires the `image-rs` backend into [`PreviewService`]
//! and mounts the preview endpoint with CORS and a 404 fallback.
//!
//! # Example
//! ```rust,no_run
//! use photo_preview::config::app::AppConfig;
//! use photo_preview::web::router::build_app;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let app = build_app(&AppConfig::from_env());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tracing::info;

use crate::config::{app::AppConfig, web::CorsConfig};
use crate::image::{image_rs_processor::ImageRsProcessor, processor::ImageProcessor};
use crate::web::{
    cors::build_cors,
    fallback::not_found,
    preview::{
        handler::{compressed_image_form, compressed_image_query},
        service::PreviewService,
    },
};

/// Path of the compressed image endpoint.
pub const PREVIEW_ROUTE: &str = "/api/photo/compressed";

/// Mounts the preview endpoint around an already built service.
pub fn build_router(service: Arc<PreviewService>, cors: &CorsConfig) -> Router {
    Router::new()
        .route(
            PREVIEW_ROUTE,
            get(compressed_image_query).post(compressed_image_form),
        )
        .fallback(not_found)
        .layer(Extension(service))
        .layer(build_cors(cors))
}

/// Builds the full application from configuration.
pub fn build_app(cfg: &AppConfig) -> Router {
    let image: Arc<dyn ImageProcessor> = Arc::new(ImageRsProcessor::new(
        cfg.preview.source(),
        cfg.preview.jpeg_quality,
    ));
    let bounds = cfg.preview.bounds();
    info!(
        "preview endpoint {PREVIEW_ROUTE}: max {}x{} root={:?}",
        bounds.max_w, bounds.max_h, cfg.preview.root
    );

    build_router(Arc::new(PreviewService::new(image, bounds)), &cfg.cors)
}
