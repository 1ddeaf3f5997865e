use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::{dao::storage::StorageError, dto::forms::FormId};

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend is unavailable.
    #[error("storage unavailable")]
    Unavailable(#[source] StorageError),
    /// Application is running in degraded mode without storage.
    #[error("storage unavailable (degraded mode)")]
    Degraded,
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Message safe to surface to the person filling in the form.
    fn user_message(&self) -> String {
        match self {
            ServiceError::Unavailable(_) | ServiceError::Degraded => {
                "the board is temporarily unavailable, try again in a moment".into()
            }
            ServiceError::InvalidInput(message) | ServiceError::NotFound(message) => {
                message.clone()
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServiceError::Unavailable(_) | ServiceError::Degraded => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::Unavailable(err)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::ServiceUnavailable(source.to_string()),
            ServiceError::Degraded => AppError::ServiceUnavailable("degraded mode".into()),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

/// Failure payload returned by the form-action routes, tagged with the form
/// it originated from so the page can attach the message to the right modal.
#[derive(Debug)]
pub struct ActionRejection {
    form: FormId,
    error: ServiceError,
}

impl ActionRejection {
    /// Tag a service failure with the form identifier it belongs to.
    pub fn new(form: FormId, error: ServiceError) -> Self {
        Self { form, error }
    }
}

#[derive(Serialize)]
struct ActionErrorBody {
    message: String,
    form: FormId,
}

impl IntoResponse for ActionRejection {
    fn into_response(self) -> axum::response::Response {
        let status = self.error.status();
        let payload = Json(ActionErrorBody {
            message: self.error.user_message(),
            form: self.form,
        });

        (status, payload).into_response()
    }
}
