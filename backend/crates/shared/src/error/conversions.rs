//! Error conversions - From implementations for common error types
//!
//! The single place where lower-level failures are translated into the
//! uniform [`AppError`] shape. Database errors in particular must never
//! leak statement text or driver detail to the client.

use super::app_error::AppError;
use super::kind::ErrorKind;

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes:
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        // Class 23 - Integrity Constraint Violation
                        "23502" => AppError::bad_request("Required field is null"),
                        "23503" => AppError::conflict("Referenced record does not exist"),
                        "23505" => AppError::conflict("Duplicate key value"),
                        "23514" => AppError::bad_request("Check constraint violation"),
                        // Class 53 - Insufficient Resources
                        "53000" | "53100" | "53200" | "53300" => {
                            AppError::service_unavailable("Database resource exhausted")
                        }
                        // Class 57 - Operator Intervention
                        "57000" | "57014" | "57P01" | "57P02" | "57P03" => {
                            AppError::service_unavailable("Database unavailable")
                        }
                        _ => AppError::internal("Database error"),
                    }
                } else {
                    AppError::internal("Database error")
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = serde_json::json!({
            "message": self.message(),
            "status": self.status_code(),
            "kind": self.kind(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "sqlx"))]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_conversion() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_pool_timeout_conversion() {
        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }
}
