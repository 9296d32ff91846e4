//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. Errors are rendered as
//! `{"error": "<message>"}` with the matching status code. For server-side
//! failures the underlying cause is logged and only the message is returned.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected by the chirp validation pipeline (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Malformed request outside the chirp pipeline, e.g. a bad path id (400).
    #[error("{0}")]
    BadRequest(String),

    /// 401 Unauthorized.
    #[error("{0}")]
    Unauthorized(String),

    /// 403 Forbidden.
    #[error("{0}")]
    Forbidden(String),

    /// 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// 500 Internal Server Error. `source` is logged, never returned.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<sqlx::Error>,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Replaces the client-facing message of an internal error.
    ///
    /// Other variants already carry a meaningful message and are returned
    /// unchanged.
    pub fn context(self, message: impl Into<String>) -> Self {
        match self {
            Self::Internal { source, .. } => Self::Internal {
                message: message.into(),
                source,
            },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Internal {
            message: "Database error".to_string(),
            source: Some(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let Self::Internal { message, source } = &self {
            match source {
                Some(e) => tracing::error!(error = %e, "Responding with 5XX error: {message}"),
                None => tracing::error!("Responding with 5XX error: {message}"),
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
