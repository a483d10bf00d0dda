use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::AppError;

/// `Json` body extractor whose rejections render through [`AppError`],
/// so malformed bodies get the same `{"error": ...}` shape as other failures.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(status = %rejection.status(), "Request body rejected");
        AppError::BadRequest(rejection.body_text())
    }
}
