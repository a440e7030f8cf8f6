use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure kinds of a preview request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingParameter,
    UnreadableImage,
    ResizeFailed,
    EncodingException,
}

/// Error returned by the preview service.
///
/// `Display` yields the exact message sent to clients in the `error` field.
///
/// # Example
/// ```
/// use photo_preview::error::preview::{ErrorKind, PreviewError};
///
/// let err = PreviewError::Encoding("disk read error".into());
/// assert_eq!(err.kind(), ErrorKind::EncodingException);
/// assert_eq!(err.to_string(), "Failed to compress image: disk read error");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("filepath parameter is required")]
    MissingParameter,

    #[error("Cannot read image dimensions")]
    UnreadableImage,

    #[error("Failed to resize image")]
    ResizeFailed,

    #[error("Failed to compress image: {0}")]
    Encoding(String),
}

impl PreviewError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PreviewError::MissingParameter => ErrorKind::MissingParameter,
            PreviewError::UnreadableImage => ErrorKind::UnreadableImage,
            PreviewError::ResizeFailed => ErrorKind::ResizeFailed,
            PreviewError::Encoding(_) => ErrorKind::EncodingException,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::MissingParameter => StatusCode::BAD_REQUEST,
            ErrorKind::UnreadableImage => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::ResizeFailed | ErrorKind::EncodingException => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// Wire shape of an error response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for PreviewError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
