use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use portfolio_contact::{ContactError, ContactResponse, VALIDATION_FAILED};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Body is not JSON or does not have the submission's shape
    #[error("{}", VALIDATION_FAILED)]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Contact(#[from] ContactError),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::InvalidBody(err) => {
                tracing::warn!(error = %err, "Invalid contact payload");
                StatusCode::BAD_REQUEST
            }
            AppError::Contact(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            AppError::Contact(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        (status_code, Json(ContactResponse::error(self.to_string()))).into_response()
    }
}
