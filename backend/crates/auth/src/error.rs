//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. The `Display` text of every
//! variant is safe to show to a client; database detail only travels
//! through `source` chains and server-side logs.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input field; the message is field-specific
    #[error("{0}")]
    Validation(String),

    /// Login rejected. Deliberately the same for "no such account" and
    /// "wrong password" so the response carries no enumeration signal.
    #[error("Invalid credential")]
    InvalidCredentials,

    /// Username already registered
    #[error("Username already taken")]
    UsernameTaken,

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// No session, expired session, or unverifiable token
    #[error("Cannot access, unauthorised")]
    SessionInvalid,

    /// Database error
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            // The original behavior: bad credentials are a 400, only a
            // missing session is a 401
            AuthError::InvalidCredentials => ErrorKind::BadRequest,
            AuthError::UsernameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // Database errors borrow the kernel's finer-grained mapping
            AuthError::Database(_) => ErrorKind::InternalServerError.status_code(),
            other => other.kind().status_code(),
        }
    }

    /// Convert to AppError, consuming self so the source chain survives
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::Validation("x".into()).status_code(), 400);
        assert_eq!(AuthError::InvalidCredentials.status_code(), 400);
        assert_eq!(AuthError::UsernameTaken.status_code(), 409);
        assert_eq!(AuthError::SessionInvalid.status_code(), 401);
        assert_eq!(AuthError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_internal_message_not_exposed() {
        let err = AuthError::Internal("pool handle 0x7f deadlocked".into());
        let app_err = err.into_app_error();
        assert!(!app_err.message().contains("0x7f"));
    }
}
