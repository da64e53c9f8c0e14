use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Player not found with id: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

pub type PlayerResult<T> = Result<T, PlayerError>;

/// Convert PlayerError to AppError for standardized error responses
impl From<PlayerError> for AppError {
    fn from(err: PlayerError) -> Self {
        match err {
            PlayerError::NotFound(_) => AppError::NotFound(err.to_string()),
            PlayerError::Validation(msg) => AppError::BadRequest(msg),
            PlayerError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
