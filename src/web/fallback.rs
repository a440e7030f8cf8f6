use axum::{http::StatusCode, http::Uri, response::IntoResponse};
use tracing::debug;

/// Fallback for routes other than the preview endpoint.
///
/// Returns a plain `404 Not Found` without a body.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    debug!("no route for {uri}");
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_404_not_found() {
        let response = not_found(Uri::from_static("/nope")).await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
