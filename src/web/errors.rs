//! Error responses for the interactive page

use crate::error::ResumeRankerError;
use crate::web::pages::{self, MessagePage};
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::error;
use thiserror::Error;

/// Request-level error for the interactive page.
/// Implements `IntoResponse` so handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Upload error: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Internal(#[from] ResumeRankerError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Multipart(e) => e.status(),
            AppError::Internal(ResumeRankerError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Internal(e) if status.is_server_error() => {
                error!("Request failed: {}", e);
                "An internal error occurred while analysing the resumes".to_string()
            }
            AppError::Multipart(e) => e.body_text(),
            other => other.to_string(),
        };

        match pages::render(&MessagePage::new(message.clone())) {
            Ok(html) => (status, html).into_response(),
            Err(e) => {
                error!("Failed to render error page: {}", e);
                (status, message).into_response()
            }
        }
    }
}
