pub mod codes;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{ConnAcquireErr, DbErr};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Error body for everything except validation failures.
///
/// ```json
/// { "error": "Producto No Encontrado" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Where a rejected input came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLocation {
    Body,
    Params,
}

/// One rejected input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Human-readable reason
    pub msg: String,
    /// Field or path parameter name
    pub param: String,
    pub location: ErrorLocation,
    /// The offending value, when one was supplied
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

impl FieldError {
    pub fn body(param: impl Into<String>, msg: impl Into<String>, value: Value) -> Self {
        Self {
            msg: msg.into(),
            param: param.into(),
            location: ErrorLocation::Body,
            value,
        }
    }

    pub fn params(param: impl Into<String>, msg: impl Into<String>, value: Value) -> Self {
        Self {
            msg: msg.into(),
            param: param.into(),
            location: ErrorLocation::Params,
            value,
        }
    }
}

/// Error body for requests rejected before reaching a handler.
///
/// ```json
/// { "errors": [ { "msg": "...", "param": "price", "location": "body", "value": -5 } ] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Domain errors convert into this type; it owns the mapping to status
/// codes, bodies and log levels.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Invalid request: {0:?}")]
    InvalidInput(Vec<FieldError>),

    #[error("Not Found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(e) => {
                let (status, code) = map_db_error(&e);
                error_response(status, code.default_message(), code)
            }
            AppError::JsonExtractorRejection(rejection) => map_json_rejection(rejection),
            AppError::ValidationError(e) => {
                tracing::info!(
                    error_code = ErrorCode::ValidationError.code(),
                    "Validation error: {:?}",
                    e
                );
                validation_response(field_errors_from_validation(&e))
            }
            AppError::InvalidInput(errors) => {
                tracing::info!(
                    error_code = ErrorCode::InvalidId.code(),
                    "Invalid request input: {:?}",
                    errors
                );
                validation_response(errors)
            }
            AppError::NotFound(msg) => {
                tracing::info!(
                    error_code = ErrorCode::NotFound.code(),
                    "Not found: {}",
                    msg
                );
                error_response(StatusCode::NOT_FOUND, msg, ErrorCode::NotFound)
            }
        }
    }
}

/// Maps a SeaORM error to a status code and logs it.
///
/// Clients never see driver messages; only the code's default message.
fn map_db_error(error: &DbErr) -> (StatusCode, ErrorCode) {
    let (status, code) = match error {
        DbErr::ConnectionAcquire(ConnAcquireErr::Timeout) => (
            StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::DatabasePoolTimeout,
        ),
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::DatabaseConnection,
        ),
        DbErr::RecordNotFound(_) => (StatusCode::NOT_FOUND, ErrorCode::DatabaseNotFound),
        DbErr::Exec(_) | DbErr::Query(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::DatabaseError,
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::DatabaseUnhandled,
        ),
    };

    if status.is_server_error() {
        tracing::error!(error_code = code.code(), "Database error: {:?}", error);
    } else {
        tracing::info!(error_code = code.code(), "Database lookup failed: {:?}", error);
    }

    (status, code)
}

/// Body parse failures become validation errors; everything else keeps the
/// rejection's own status (415 for a missing content type, 413 for oversize).
fn map_json_rejection(rejection: JsonRejection) -> Response {
    let text = rejection.body_text();

    match rejection {
        JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
            tracing::info!(
                error_code = ErrorCode::JsonExtraction.code(),
                "JSON extraction error: {}",
                text
            );
            let param = field_from_serde_message(&text).unwrap_or_default();
            validation_response(vec![FieldError::body(param, text, Value::Null)])
        }
        other => {
            tracing::warn!(
                error_code = ErrorCode::JsonExtraction.code(),
                "JSON extraction error: {}",
                text
            );
            error_response(other.status(), text, ErrorCode::JsonExtraction)
        }
    }
}

/// Recovers the offending field from a serde message: either named in
/// backticks ("missing field `price`") or as a path prefix
/// ("price: invalid type: string \"abc\", expected f64").
fn field_from_serde_message(message: &str) -> Option<String> {
    if let Some(start) = message.find('`').map(|i| i + 1) {
        let len = message[start..].find('`')?;
        return Some(message[start..start + len].to_string());
    }

    let detail = message
        .split_once("target type: ")
        .map_or(message, |(_, rest)| rest);
    let (path, _) = detail.split_once(": ")?;
    let is_path = !path.is_empty()
        && path
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '[' || c == ']');
    is_path.then(|| path.to_string())
}

/// Flattens validator output into one [`FieldError`] per failed rule,
/// ordered by field name.
pub fn field_errors_from_validation(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |err| {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                let value = err.params.get("value").cloned().unwrap_or(Value::Null);
                FieldError::body(field.to_string(), msg, value)
            })
        })
        .collect()
}

pub fn validation_response(errors: Vec<FieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorResponse { errors }),
    )
        .into_response()
}

/// Helper function to create error responses.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(
///     StatusCode::NOT_FOUND,
///     "Producto No Encontrado",
///     ErrorCode::NotFound,
/// );
/// ```
pub fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    error_code: ErrorCode,
) -> Response {
    let mut response = (status, Json(ErrorResponse::new(message))).into_response();
    response.extensions_mut().insert(error_code);
    response
}
