use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

// Convert AppError to an HTTP response
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::UserNotFound => {
                tracing::warn!("{}", self);
                StatusCode::NOT_FOUND
            }
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(?self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let detail = match self {
            AppError::UserNotFound => self.to_string(),
            _ => "Internal Server Error".into(),
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

pub type Result<T> = std::result::Result<T, AppError>;
