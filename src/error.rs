//! Console error types with HTTP status code mapping.
//!
//! [`ConsoleError`] is the central error type for the console. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "company 7 not found",
///     "details": null
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see [`ConsoleError`] code ranges).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category            | HTTP Status                  |
/// |-----------|---------------------|------------------------------|
/// | 1000–1999 | Validation          | 400 Bad Request              |
/// | 2000–2999 | Not Found/Conflict  | 404 Not Found / 409 Conflict |
/// | 4000–4999 | Business rule       | 422 Unprocessable Entity     |
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// No record with the given id exists in the named collection.
    #[error("{collection} {id} not found")]
    NotFound {
        /// Collection name, e.g. `"company"`.
        collection: &'static str,
        /// Numeric record identifier.
        id: u32,
    },

    /// Request validation failed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The operation would leave records in an inconsistent state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A business rule of the event workflow rejects the operation.
    #[error("rule violation: {0}")]
    RuleViolation(String),

    /// No schedule has been generated for the event yet.
    #[error("no schedule generated for event {0}")]
    ScheduleNotGenerated(u32),
}

impl ConsoleError {
    /// Shorthand for a [`ConsoleError::NotFound`] on `collection`.
    #[must_use]
    pub const fn not_found(collection: &'static str, id: u32) -> Self {
        Self::NotFound { collection, id }
    }

    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidRequest(_) => 1001,
            Self::NotFound { .. } => 2001,
            Self::ScheduleNotGenerated(_) => 2002,
            Self::Conflict(_) => 2003,
            Self::RuleViolation(_) => 4001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::ScheduleNotGenerated(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::RuleViolation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            tracing::debug!(code = self.error_code(), error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ConsoleError::not_found("company", 7);
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), 2001);
        assert_eq!(err.to_string(), "company 7 not found");
    }

    #[test]
    fn rule_violation_maps_to_422() {
        let err = ConsoleError::RuleViolation("too late".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.error_code(), 4001);
    }

    #[test]
    fn into_response_carries_status() {
        let response = ConsoleError::Conflict("duplicate".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
