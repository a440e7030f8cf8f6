//! # Compressed Image Handler
//!
//! Axum endpoints returning a downscaled data URL preview of an image file.
//!
//! ## Features
//! - `GET` with `?filepath=...` or `POST` with an urlencoded `filepath` field
//! - Delegates to [`PreviewService`] on the blocking thread pool
//! - Success body is the raw data URL as `text/plain`
//! - Failures are JSON `{"error": "..."}`
//!
//! ## Example
//! ```rust,ignore
//! use axum::{routing::get, Extension, Router};
//! use std::sync::Arc;
//! use photo_preview::web::preview::handler::{compressed_image_form, compressed_image_query};
//!
//! let app = Router::new()
//!     .route(
//!         "/api/photo/compressed",
//!         get(compressed_image_query).post(compressed_image_form),
//!     )
//!     .layer(Extension(Arc::new(service)));
//! ```

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Form, Query,
    },
    response::{IntoResponse, Response},
    Extension,
};
use tracing::{error, info, warn};

use crate::error::preview::PreviewError;
use crate::web::preview::service::{ImageRequest, PreviewService};

/// `GET` variant reading `filepath` from the query string.
///
/// A query string that cannot be read as a single `filepath` counts as a
/// missing parameter.
///
/// ## Returns
/// - `200 OK` with `data:image/<format>;base64,...` as plain text
/// - `400 BAD REQUEST` if `filepath` is missing or unreadable
/// - `422 UNPROCESSABLE ENTITY` if the image size cannot be read
/// - `500 INTERNAL SERVER ERROR` if resizing or encoding fails
pub async fn compressed_image_query(
    Extension(svc): Extension<Arc<PreviewService>>,
    query: Result<Query<ImageRequest>, QueryRejection>,
) -> Response {
    let req = match query {
        Ok(Query(req)) => req,
        Err(e) => {
            warn!("unreadable query string: {e}");
            ImageRequest::default()
        }
    };
    respond(svc, req).await
}

/// `POST` variant reading `filepath` from an urlencoded form body.
///
/// Bodies that are not an urlencoded form (wrong or missing
/// `Content-Type`, JSON, malformed fields) count as a missing parameter.
pub async fn compressed_image_form(
    Extension(svc): Extension<Arc<PreviewService>>,
    form: Result<Form<ImageRequest>, FormRejection>,
) -> Response {
    let req = match form {
        Ok(Form(req)) => req,
        Err(e) => {
            warn!("unreadable form body: {e}");
            ImageRequest::default()
        }
    };
    respond(svc, req).await
}

async fn respond(svc: Arc<PreviewService>, req: ImageRequest) -> Response {
    info!("compressed image request: filepath={:?}", req.filepath);

    let result = tokio::task::spawn_blocking(move || svc.compress(&req))
        .await
        .unwrap_or_else(|e| {
            error!("preview task aborted: {e}");
            Err(PreviewError::Encoding(e.to_string()))
        });

    match result {
        Ok(data_url) => data_url.into_response(),
        Err(e) => e.into_response(),
    }
}
