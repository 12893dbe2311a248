//! Application error type and its HTTP translation.
//!
//! Every failure surfaced by a handler is an [`AppError`]. The variant decides
//! the status code; the body is always the same envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value, json};
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::utils::db_error::{IntegrityViolation, classify};

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorInfo {
    /// Stable code, e.g. `not_found`.
    #[schema(value_type = String, example = "not_found")]
    pub code: &'static str,
    #[schema(example = "Airplane not found with id: 7")]
    pub message: String,
    #[schema(value_type = Object)]
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Unauthorized { message: String, details: Value },
    #[error("{message}")]
    Forbidden { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Unauthorized { message, details } => ("unauthorized", message, details),
            AppError::Forbidden { message, details } => ("forbidden", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message,
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_error_info(),
        };

        if status == StatusCode::UNAUTHORIZED {
            // RFC 6750
            return (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(body),
            )
                .into_response();
        }

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match classify(&e) {
            Some(IntegrityViolation::ForeignKey { constraint }) => AppError::conflict(
                "Data integrity violation",
                json!({
                    "constraint": constraint,
                    "hint": "Delete referenced object first, or reference an existing object",
                }),
            ),
            Some(IntegrityViolation::Unique { constraint }) => AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": constraint }),
            ),
            Some(IntegrityViolation::Check { constraint }) => AppError::bad_request(
                "Check constraint violation",
                json!({ "constraint": constraint }),
            ),
            None => {
                tracing::error!(error = %e, "Database error");
                AppError::internal("Database error", json!({}))
            }
        }
    }
}

/// Collects one message per violated rule, keyed by field name.
///
/// Nested structs are merged into the same map; request bodies only nest
/// through `#[serde(flatten)]`, so their fields sit at the top level of the
/// JSON document too.
fn collect_field_errors(errors: &ValidationErrors, fields: &mut Map<String, Value>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages = field_errors.iter().map(|e| match &e.message {
                    Some(message) => Value::String(message.to_string()),
                    None => Value::String(e.code.to_string()),
                });
                fields.insert(field.to_string(), Value::Array(messages.collect()));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, fields),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_field_errors(nested, fields);
                }
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();
        collect_field_errors(&errors, &mut fields);

        AppError::bad_request(
            "Validation failed for the following fields",
            Value::Object(fields),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameter",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
