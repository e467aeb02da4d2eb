use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::contact::{ContactError, ERROR_MESSAGE};
use crate::events::LoadError;
use crate::models::{ContactResponse, ContactStatus};

#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    /// Upstream refused or never answered; rendered as a `ContactResponse`.
    BadGateway(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg).into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::BadGateway(message) => (
                StatusCode::BAD_GATEWAY,
                Json(ContactResponse {
                    status: ContactStatus::Error,
                    message,
                }),
            )
                .into_response(),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(value: ContactError) -> Self {
        match value {
            ContactError::Invalid(_) => ApiError::BadRequest(value.to_string()),
            ContactError::Duplicate => ApiError::Conflict(value.to_string()),
            ContactError::Rejected(status) => {
                error!(%status, "contact service rejected message");
                ApiError::BadGateway(ERROR_MESSAGE.into())
            }
            ContactError::Http(err) => {
                error!("HTTP error: {err}");
                ApiError::BadGateway(ERROR_MESSAGE.into())
            }
        }
    }
}

impl From<LoadError> for ApiError {
    fn from(value: LoadError) -> Self {
        match value {
            LoadError::InProgress => ApiError::Conflict(value.to_string()),
            LoadError::Task(err) => {
                error!("calendar load task failed: {err}");
                ApiError::Internal("Calendar load failed".into())
            }
        }
    }
}
