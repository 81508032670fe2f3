//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::error_body;

#[derive(Error, Debug)]
pub enum AppError {
    /// Request body missing or not a JSON object.
    #[error("bad payload")]
    BadPayload,
    #[error("{0}")]
    Validation(String),
    /// Referenced entity not found where the contract answers 400.
    #[error("{0}")]
    Missing(String),
    /// Empty-read cases on list routes answer 404.
    #[error("{0}")]
    NotFound(String),
    /// Status-only response with no body.
    #[error("aborted with status {0}")]
    Abort(StatusCode),
    #[error("database error")]
    Store(#[from] mongodb::error::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadPayload | AppError::Validation(_) | AppError::Missing(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Abort(status) => return (*status).into_response(),
            AppError::Store(e) => {
                tracing::error!(error = %e, "store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(error_body(self.to_string()))).into_response()
    }
}
