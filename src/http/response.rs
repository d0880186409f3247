//! Error responses
//!
//! The one place where [`DirectoryError`]s become HTTP statuses.
//!
//! ```text
//! EmployeeNotFound           404  EMPLOYEE_NOT_FOUND
//! CompensationNotFound       404  COMPENSATION_NOT_FOUND
//! CompensationAlreadyExists  409  COMPENSATION_ALREADY_EXISTS
//! InvalidRequest             400  INVALID_REQUEST
//! anything else              500  INTERNAL_SERVER_ERROR
//! ```

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DirectoryError;

/// Message returned for every internal failure
pub const INTERNAL_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Error body returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Handler error wrapper implementing `IntoResponse`
#[derive(Debug)]
pub struct ApiError(pub DirectoryError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DirectoryError::EmployeeNotFound(_) | DirectoryError::CompensationNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            DirectoryError::CompensationAlreadyExists(_) => StatusCode::CONFLICT,
            DirectoryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body for this error; internal details are never included
    pub fn body(&self) -> ErrorResponse {
        if self.0.is_domain() {
            ErrorResponse::new(self.0.error_code(), self.0.to_string())
        } else {
            ErrorResponse::new(self.0.error_code(), INTERNAL_MESSAGE)
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(e: DirectoryError) -> Self {
        ApiError(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(DirectoryError::InvalidRequest(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_domain() {
            tracing::warn!(code = self.0.error_code(), "{}", self.0);
        } else {
            tracing::error!(error = %self.0, "unexpected error while handling request");
        }

        (self.status(), Json(self.body())).into_response()
    }
}
