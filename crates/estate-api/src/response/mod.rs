//! API response and error types
//!
//! Every error leaving the API goes through [`ApiError`]'s `IntoResponse`
//! implementation, which renders the error envelope
//! `{ "success": false, "status_code": N, "message": "...", "errors": [...] }`.
//! Success bodies are wrapped in `ApiResponse { data }` by the handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use validator::ValidationErrors;

use estate_common::AppError;
use estate_core::DomainError;
use estate_service::ServiceError;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Application error (auth, tokens, config)
    App(AppError),
    /// Service layer error
    Service(ServiceError),
    /// Domain rule violation
    Domain(DomainError),
    /// Request body failed `validator` checks
    Validation(ValidationErrors),
    /// Malformed request body (bad JSON, broken multipart)
    InvalidBody(String),
    /// Internal error
    Internal(String),
}

impl ApiError {
    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else if e.is_conflict() {
                    409
                } else {
                    500
                }
            }
            Self::Validation(_) | Self::InvalidBody(_) => 400,
            Self::Internal(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the human-readable message for the envelope
    pub fn message(&self) -> String {
        match self {
            Self::App(e) => e.to_string(),
            Self::Service(e) => e.to_string(),
            Self::Domain(e) => e.to_string(),
            Self::Validation(_) => "Validation error".to_string(),
            Self::InvalidBody(msg) => msg.clone(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }

    /// Field-level detail for validation failures, empty otherwise
    fn errors(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |e| {
                        let message = e
                            .message
                            .as_deref()
                            .map_or_else(|| e.code.to_string(), ToString::to_string);
                        format!("{field}: {message}")
                    })
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err)
    }
}

/// Error envelope returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = %status, "Request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "Request rejected");
        }

        let envelope = ErrorEnvelope {
            success: false,
            status_code: status.as_u16(),
            message: self.message(),
            errors: self.errors(),
        };

        (status, Json(envelope)).into_response()
    }
}

/// Wrapper that responds with 201 Created
#[derive(Debug)]
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, self.0).into_response()
    }
}

/// Plain message body for operations with no resource to return
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

impl MessageBody {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
