//! Posts Error Types
//!
//! Mirrors the auth error layering: variant display text is safe for
//! clients, database detail stays in logs and source chains. `NotFound`
//! covers both "no such post" and "someone else's post" so a response
//! never reveals whether a foreign post id exists.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Posts-specific result type alias
pub type PostResult<T> = Result<T, PostError>;

/// Posts-specific error variants
#[derive(Debug, Error)]
pub enum PostError {
    /// Missing or malformed input field
    #[error("{0}")]
    Validation(String),

    /// Post absent, or owned by a different user
    #[error("Post not found")]
    PostNotFound,

    /// Like already recorded for this user and post
    #[error("Already liked")]
    AlreadyLiked,

    /// No like to remove for this user and post
    #[error("Like not found")]
    LikeNotFound,

    /// Database error
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error")]
    Internal(String),
}

impl PostError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::PostNotFound | PostError::LikeNotFound => ErrorKind::NotFound,
            PostError::AlreadyLiked => ErrorKind::Conflict,
            PostError::Database(_) | PostError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            // Database errors borrow the kernel's finer-grained mapping
            PostError::Database(_) => ErrorKind::InternalServerError.status_code(),
            other => other.kind().status_code(),
        }
    }

    /// Convert to AppError, consuming self so the source chain survives
    pub fn into_app_error(self) -> AppError {
        match self {
            PostError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PostError::Database(e) => {
                tracing::error!(error = %e, "Posts database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Posts internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Posts error");
            }
        }
    }
}

impl IntoResponse for PostError {
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
        assert_eq!(PostError::Validation("x".into()).status_code(), 400);
        assert_eq!(PostError::PostNotFound.status_code(), 404);
        assert_eq!(PostError::AlreadyLiked.status_code(), 409);
        assert_eq!(PostError::LikeNotFound.status_code(), 404);
        assert_eq!(PostError::Internal("x".into()).status_code(), 500);
    }

    #[test]
    fn test_internal_message_not_exposed() {
        let err = PostError::Internal("statement cache poisoned".into());
        let app_err = err.into_app_error();
        assert!(!app_err.message().contains("poisoned"));
    }
}
