//! Mapping of service failures onto HTTP responses.

use crate::{
    analytics::services::AnalyticsError,
    identity::ports::DirectoryError,
    notification::services::NotificationServiceError,
    ticket::{
        domain::TicketDomainError,
        ports::TicketRepositoryError,
        services::TicketServiceError,
    },
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Error returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request or failed validation (400).
    #[error("{0}")]
    BadRequest(String),
    /// Missing or unknown bearer token (401).
    #[error("{0}")]
    Unauthorized(String),
    /// Authenticated caller lacks the required role (403).
    #[error("{0}")]
    Forbidden(String),
    /// Ticket missing or outside the caller's scope (404).
    #[error("{0}")]
    NotFound(String),
    /// Lifecycle rules refused the change (409).
    #[error("{0}")]
    Conflict(String),
    /// Unexpected failure; details are logged, not returned (500).
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn internal(err: &dyn std::error::Error) -> Self {
        error!(error = %err, "request failed");
        Self::Internal
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<TicketServiceError> for ApiError {
    fn from(err: TicketServiceError) -> Self {
        match err {
            TicketServiceError::Domain(domain) if domain.is_validation() => {
                Self::BadRequest(domain.to_string())
            }
            TicketServiceError::Domain(domain @ TicketDomainError::InvalidStateTransition { .. }) => {
                Self::Conflict(domain.to_string())
            }
            TicketServiceError::Domain(domain) => Self::internal(&domain),
            TicketServiceError::InvalidState(parse) => Self::BadRequest(parse.to_string()),
            TicketServiceError::NotFound(number) => {
                Self::NotFound(format!("complaint {number} not found"))
            }
            TicketServiceError::AccessDenied { action, .. } => {
                Self::Forbidden(format!("not permitted to {action}"))
            }
            TicketServiceError::Repository(TicketRepositoryError::DuplicateTicket(number)) => {
                Self::Conflict(format!("complaint {number} already exists"))
            }
            TicketServiceError::Repository(repository) => Self::internal(&repository),
        }
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        match err {
            AnalyticsError::AccessDenied(_) => {
                Self::Forbidden("analytics are restricted to officers and administrators".to_owned())
            }
            AnalyticsError::Repository(repository) => Self::internal(&repository),
        }
    }
}

impl From<NotificationServiceError> for ApiError {
    fn from(err: NotificationServiceError) -> Self {
        match err {
            NotificationServiceError::NotFound(id) => {
                Self::NotFound(format!("notification {id} not found"))
            }
            NotificationServiceError::Repository(repository) => Self::internal(&repository),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        Self::internal(&err)
    }
}
