// Custom error types and conversions.
// This keeps error responses consistent across Axum handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::compare::CompareError;
use crate::loan::LoanError;

#[derive(Debug)]
pub enum AppError {
    InternalServerError(anyhow::Error),
    /// Catalog miss: unknown id or slug. Rendered as a 404, not a failure.
    NotFound(String),
    /// Rejected domain input (comparison rules, loan parameter policy).
    UnprocessableEntity(String),
}

// Conversion from anyhow::Error for easier error propagation with `?`.
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::InternalServerError(error)
    }
}

impl From<CompareError> for AppError {
    fn from(error: CompareError) -> Self {
        AppError::UnprocessableEntity(error.to_string())
    }
}

impl From<LoanError> for AppError {
    fn from(error: LoanError) -> Self {
        AppError::UnprocessableEntity(error.to_string())
    }
}

// Convert errors into HTTP responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InternalServerError(e) => {
                // Log the detailed error here
                tracing::error!("Internal server error: {:?}", e);
                // Don't expose internal details to the client
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            AppError::NotFound(message) => {
                tracing::debug!("Not found: {}", message);
                (StatusCode::NOT_FOUND, message)
            }
            AppError::UnprocessableEntity(message) => {
                tracing::debug!("Rejected request: {}", message);
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
        };

        (status, error_message).into_response()
    }
}

// Define a custom Result type using our AppError
pub type AppResult<T> = Result<T, AppError>;
