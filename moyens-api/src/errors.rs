//! # Error Handling
//!
//! Every failure a request can hit is an [`ApiError`]. Each variant maps to
//! one HTTP status and carries a fixed, human-readable message; database
//! details are logged server-side and never sent to the client.
//!
//! ```rust,ignore
//! let category = category::Entity::find_by_id(id)
//!     .one(db)
//!     .await
//!     .map_err(|err| ApiError::database("Erreur lors de la récupération de la catégorie", Some(id), err))?
//!     .ok_or_else(|| ApiError::not_found("Catégorie non trouvée", id))?;
//! ```
//!
//! Errors are logged exactly once, when they are turned into a response.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use std::fmt;

use crate::models::ErrorBody;

/// API error type with automatic logging and sanitized responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request - path identifier is not a non-negative integer
    BadRequest {
        /// User-facing error message
        message: String,
        /// Raw path segment as received
        raw: String,
    },

    /// 404 Not Found - no row matches the identifier
    NotFound {
        /// User-facing error message
        message: String,
        /// Identifier that was looked up
        id: i32,
    },

    /// 408 Request Timeout - the request deadline elapsed before a response
    Timeout {
        /// User-facing error message
        message: String,
    },

    /// 500 Internal Server Error - database error (details logged, not exposed)
    Database {
        /// User-facing generic message
        message: String,
        /// Identifier involved in the failing query, if any
        id: Option<i32>,
        /// Internal error (logged, not sent to user)
        internal: DbErr,
    },

    /// 500 Internal Server Error - anything else, including caught panics
    Internal {
        /// User-facing generic message
        message: String,
        /// Internal error details (logged, not sent to user)
        internal: Option<String>,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            raw: raw.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, id: i32) -> Self {
        Self::NotFound {
            message: message.into(),
            id,
        }
    }

    /// Create a 500 error from a database error.
    ///
    /// The database error is logged but NOT sent to the user.
    pub fn database(message: impl Into<String>, id: Option<i32>, err: DbErr) -> Self {
        Self::Database {
            message: message.into(),
            id,
            internal: err,
        }
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, internal: Option<String>) -> Self {
        Self::Internal {
            message: message.into(),
            internal,
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            Self::Database { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing error message (sanitized)
    pub fn user_message(&self) -> &str {
        match self {
            Self::BadRequest { message, .. }
            | Self::NotFound { message, .. }
            | Self::Timeout { message }
            | Self::Database { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    fn log(&self) {
        match self {
            Self::BadRequest { message, raw } => {
                tracing::warn!(raw_id = %raw, "{message}");
            }
            Self::NotFound { message, id } => {
                tracing::warn!(id, "{message}");
            }
            Self::Timeout { message } => {
                tracing::warn!("{message}");
            }
            Self::Database {
                message,
                id,
                internal,
            } => {
                tracing::error!(id, error = %internal, "{message}");
            }
            Self::Internal { message, internal } => {
                tracing::error!(details = internal.as_deref(), "{message}");
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let body = ErrorBody {
            error: self.user_message().to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database { internal, .. } => Some(internal),
            _ => None,
        }
    }
}

/// Failures that stop the process before (or while) it serves traffic.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot install log subscriber: {0}")]
    Logging(String),

    #[error("invalid database url: {0}")]
    DatabaseUrl(#[from] url::ParseError),

    #[error("cannot connect to the database: {0}")]
    Connect(#[source] DbErr),

    #[error("database did not answer ping: {0}")]
    Ping(#[source] DbErr),

    #[error("cannot bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped with an error: {0}")]
    Serve(#[source] std::io::Error),
}
