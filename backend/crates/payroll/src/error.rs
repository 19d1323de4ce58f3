//! Payroll Error Types
//!
//! Payroll-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Every variant renders as
//! `{"error": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Payroll-specific result type alias
pub type PayrollResult<T> = Result<T, PayrollError>;

/// Result of a single call to the backend service
pub type BackendResult<T> = Result<T, BackendError>;

/// Failure of a call to the external backend service
#[derive(Debug, Error)]
pub enum BackendError {
    /// The service answered with a non-2xx status; message is its own
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("Backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response did not have the expected shape
    #[error("Unexpected backend response: {0}")]
    Decode(String),
}

impl BackendError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        BackendError::Api {
            status,
            message: message.into(),
        }
    }
}

/// Payroll-specific error variants
#[derive(Debug, Error)]
pub enum PayrollError {
    /// No valid session on a route that needs one
    #[error("Authentication required")]
    Unauthenticated,

    /// Session role is not allowed to perform the action
    #[error("Admin access required")]
    Forbidden,

    /// Request body or query failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Backend rejected the credentials (login)
    #[error("{0}")]
    LoginFailed(String),

    /// Backend rejected an account operation (signup, password routes)
    #[error("{0}")]
    Rejected(String),

    /// Any other backend failure
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Unmatched route
    #[error("Not found")]
    NotFound,

    /// Known path, unsupported method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PayrollError {
    /// Re-classify a backend failure as a failed login (401)
    pub fn login_failed(self) -> Self {
        match self {
            PayrollError::Backend(e) => PayrollError::LoginFailed(e.to_string()),
            other => other,
        }
    }

    /// Re-classify a backend failure as a rejected account operation (400)
    pub fn rejected(self) -> Self {
        match self {
            PayrollError::Backend(e) => PayrollError::Rejected(e.to_string()),
            other => other,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PayrollError::Unauthenticated | PayrollError::LoginFailed(_) => {
                ErrorKind::Unauthorized
            }
            PayrollError::Forbidden => ErrorKind::Forbidden,
            PayrollError::InvalidInput(_) | PayrollError::Rejected(_) => ErrorKind::BadRequest,
            PayrollError::NotFound => ErrorKind::NotFound,
            PayrollError::MethodNotAllowed => ErrorKind::MethodNotAllowed,
            PayrollError::Backend(_) | PayrollError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PayrollError::Backend(e) => {
                tracing::error!(error = %e, "Backend call failed");
            }
            PayrollError::Internal(msg) => {
                tracing::error!(message = %msg, "Payroll internal error");
            }
            PayrollError::LoginFailed(msg) => {
                tracing::warn!(reason = %msg, "Login failed");
            }
            PayrollError::Forbidden => {
                tracing::warn!("Admin-only action attempted by non-admin session");
            }
            _ => {
                tracing::debug!(error = %self, "Payroll error");
            }
        }
    }
}

impl IntoResponse for PayrollError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<JsonRejection> for PayrollError {
    fn from(rejection: JsonRejection) -> Self {
        PayrollError::InvalidInput(rejection.body_text())
    }
}

impl From<serde_json::Error> for PayrollError {
    fn from(err: serde_json::Error) -> Self {
        PayrollError::Backend(BackendError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(PayrollError, StatusCode)> = vec![
            (PayrollError::Unauthenticated, StatusCode::UNAUTHORIZED),
            (PayrollError::Forbidden, StatusCode::FORBIDDEN),
            (PayrollError::InvalidInput("bad".into()), StatusCode::BAD_REQUEST),
            (PayrollError::LoginFailed("nope".into()), StatusCode::UNAUTHORIZED),
            (PayrollError::Rejected("taken".into()), StatusCode::BAD_REQUEST),
            (
                PayrollError::Backend(BackendError::api(503, "down")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (PayrollError::NotFound, StatusCode::NOT_FOUND),
            (PayrollError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (
                PayrollError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_backend_message_passes_through() {
        let err = PayrollError::Backend(BackendError::api(400, "Invalid login credentials"));
        assert_eq!(err.to_string(), "Invalid login credentials");

        let login = err.login_failed();
        assert!(matches!(login, PayrollError::LoginFailed(ref m) if m == "Invalid login credentials"));
        assert_eq!(login.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_reclassification_keeps_non_backend_errors() {
        let err = PayrollError::InvalidInput("Email is required".into()).rejected();
        assert!(matches!(err, PayrollError::InvalidInput(_)));
    }
}
