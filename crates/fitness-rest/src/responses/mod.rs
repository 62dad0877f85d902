//! Response envelope and error mapping.
//!
//! Every body is `{ success, data?, error? }`. Failures come either from a
//! service call or from reading the request body; rule violations found
//! while reading the body carry per-field details.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fitness_core::{field_errors, ErrorResponse, FieldError, FitnessError};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use validator::ValidationErrors;

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Wraps a successful payload.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Wraps an error without a payload.
    #[must_use]
    pub fn failure(error: ErrorResponse) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Everything a handler can fail with.
#[derive(Debug)]
pub enum AppError {
    /// A service call failed.
    Service(FitnessError),
    /// The body is not valid JSON for the expected shape.
    MalformedBody(String),
    /// The body parsed but broke field rules.
    InvalidFields(Vec<FieldError>),
}

impl AppError {
    /// HTTP status for this failure.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Service(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::MalformedBody(_) | Self::InvalidFields(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn into_error_response(self) -> ErrorResponse {
        match self {
            Self::Service(err) => ErrorResponse::from_error(&err),
            Self::MalformedBody(reason) => ErrorResponse {
                code: "INVALID_JSON".to_string(),
                message: format!("Invalid JSON: {}", reason),
                details: None,
            },
            Self::InvalidFields(details) => ErrorResponse {
                code: "VALIDATION_ERROR".to_string(),
                message: "Request validation failed".to_string(),
                details: None,
            }
            .with_details(details),
        }
    }
}

impl From<FitnessError> for AppError {
    fn from(err: FitnessError) -> Self {
        Self::Service(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::InvalidFields(field_errors(&errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Service(err) if status.is_server_error() => warn!("Request failed: {}", err),
            Self::Service(err) => debug!("Request rejected: {}", err),
            Self::MalformedBody(reason) => debug!("Malformed request body: {}", reason),
            Self::InvalidFields(details) => debug!("Request body broke {} field rule(s)", details.len()),
        }

        (status, Json(ApiResponse::failure(self.into_error_response()))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Result type for handlers answering 201 Created.
pub type CreatedResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), AppError>;

/// 200 with the payload in the envelope.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

/// 201 with the payload in the envelope.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse<T>>) {
    (StatusCode::CREATED, Json(ApiResponse::success(data)))
}

/// 204, no body.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
