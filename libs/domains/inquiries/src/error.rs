use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::mongodb::MongoError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    /// No live storage handle
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage write failed: {0}")]
    StorageWriteFailed(String),
}

pub type InquiryResult<T> = Result<T, InquiryError>;

/// Convert InquiryError to AppError for standardized error responses
impl From<InquiryError> for AppError {
    fn from(err: InquiryError) -> Self {
        match err {
            InquiryError::Validation(errors) => AppError::ValidationError(errors),
            InquiryError::StorageUnavailable(msg) => AppError::DatabaseUnavailable(msg),
            InquiryError::StorageWriteFailed(msg) => AppError::DatabaseWriteFailed(msg),
        }
    }
}

impl IntoResponse for InquiryError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Any driver failure once a handle exists counts as a failed write
impl From<MongoError> for InquiryError {
    fn from(err: MongoError) -> Self {
        InquiryError::StorageWriteFailed(err.to_string())
    }
}
