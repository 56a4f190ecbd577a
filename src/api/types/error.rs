//! API error envelope and status mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::user::AuthError;

/// Error categories exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    NotFoundError,
    ServerError,
    ServiceUnavailableError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ServerError => write!(f, "server_error"),
            Self::ServiceUnavailableError => write!(f, "service_unavailable_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    code: None,
                },
            },
        }
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.error.code = Some(code.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    /// Service unavailable
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ServiceUnavailableError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match &err {
            AuthError::WeakPassword(_) => Self::bad_request(err.to_string()).with_code("weak_password"),
            AuthError::InvalidInput(_) => Self::bad_request(err.to_string()).with_code("invalid_input"),
            AuthError::RegistrationFailed { .. } => {
                Self::bad_request(err.to_string()).with_code("registration_failed")
            }
            AuthError::UserNotFound => Self::not_found(err.to_string()).with_code("user_not_found"),
            AuthError::InvalidCredentials => {
                Self::unauthorized(err.to_string()).with_code("invalid_credentials")
            }
            AuthError::Storage(cause) => {
                error!(cause = %cause, "Storage failure");
                Self::internal("Storage failure").with_code("storage_error")
            }
            AuthError::Unavailable(cause) => {
                error!(cause = %cause, "Storage unavailable");
                Self::unavailable("Storage is temporarily unavailable")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::{PasswordPolicyError, UserValidationError};

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Invalid email");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.response.error.error_type, ApiErrorType::InvalidRequestError);
        assert_eq!(err.response.error.message, "Invalid email");
        assert!(err.response.error.code.is_none());
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AuthError::WeakPassword(PasswordPolicyError::MissingDigit),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::InvalidInput(UserValidationError::EmptyName),
                StatusCode::BAD_REQUEST,
            ),
            (
                AuthError::RegistrationFailed {
                    cause: "duplicate".to_string(),
                },
                StatusCode::BAD_REQUEST,
            ),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                AuthError::Storage("bad row".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AuthError::Unavailable("down".to_string()),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
        ];

        for (auth_err, status) in cases {
            let api_err: ApiError = auth_err.into();
            assert_eq!(api_err.status, status);
        }
    }

    #[test]
    fn test_registration_failure_keeps_cause() {
        let api_err: ApiError = AuthError::RegistrationFailed {
            cause: "Email 'ana@x.com' already exists".to_string(),
        }
        .into();

        assert_eq!(
            api_err.response.error.message,
            "Registration failed: Email 'ana@x.com' already exists"
        );
        assert_eq!(api_err.response.error.code.as_deref(), Some("registration_failed"));
    }

    #[test]
    fn test_unavailable_hides_cause() {
        let api_err: ApiError = AuthError::Unavailable("password authentication failed".to_string()).into();

        assert!(!api_err.response.error.message.contains("password authentication"));
    }

    #[test]
    fn test_storage_failure_hides_cause() {
        let api_err: ApiError =
            AuthError::Storage("invalid byte sequence for encoding".to_string()).into();

        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_err.response.error.error_type, ApiErrorType::ServerError);
        assert_eq!(api_err.response.error.code.as_deref(), Some("storage_error"));
        assert!(!api_err.response.error.message.contains("byte sequence"));
    }

    #[test]
    fn test_error_serialization() {
        let err: ApiError = AuthError::InvalidCredentials.into();
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("authentication_error"));
        assert!(json.contains("Invalid credentials"));
        assert!(json.contains("invalid_credentials"));
    }
}
