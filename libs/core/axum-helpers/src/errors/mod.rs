pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Returned for all error responses:
/// - `code`: Integer error code for logging/monitoring (e.g., 1004)
/// - `error`: Machine-readable error identifier (e.g., "NOT_FOUND")
/// - `message`: Human-readable error message
/// - `details`: Optional additional error details (e.g., validation errors)
///
/// # JSON Example
///
/// ```json
/// {
///   "code": 1004,
///   "error": "NOT_FOUND",
///   "message": "Player not found with id: aaronha01"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Integer error code for logging and monitoring
    pub code: i32,
    /// Machine-readable error identifier for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Application error type that can be converted to HTTP responses.
///
/// Client errors keep their message. Every server-side variant is reduced to
/// the opaque `ErrorCode::default_message` and the cause is only logged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON parsing error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AppError {
    /// The error code this error is reported under.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::SerdeJson(_) => ErrorCode::SerdeJsonError,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::JsonExtractorRejection(_) => ErrorCode::JsonExtraction,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::BadRequest(_) => ErrorCode::InvalidParameter,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalServerError(_) => ErrorCode::InternalError,
            AppError::ServiceUnavailable(_) => ErrorCode::ServiceUnavailable,
        }
    }

    /// The HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::JsonExtractorRejection(_)
            | AppError::ValidationError(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::SerdeJson(_)
            | AppError::Database(_)
            | AppError::Io(_)
            | AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.error_code();

        let (message, details) = match self {
            AppError::SerdeJson(e) => {
                tracing::error!(error_code = code.code(), "JSON parsing error: {:?}", e);
                (code.default_message().to_string(), None)
            }
            AppError::Database(e) => {
                tracing::error!(error_code = code.code(), "Database error: {:?}", e);
                (code.default_message().to_string(), None)
            }
            AppError::Io(e) => {
                tracing::error!(error_code = code.code(), "I/O error: {:?}", e);
                (code.default_message().to_string(), None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = code.code(), "Internal server error: {}", msg);
                (code.default_message().to_string(), None)
            }
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!(
                    error_code = code.code(),
                    "JSON extraction error: {}",
                    e.body_text()
                );
                (code.default_message().to_string(), None)
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = code.code(), "Validation error: {:?}", e);
                (
                    code.default_message().to_string(),
                    Some(validation_details(&e)),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = code.code(), "Bad request: {}", msg);
                (msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = code.code(), "Not found: {}", msg);
                (msg, None)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!(error_code = code.code(), "Service unavailable: {}", msg);
                (msg, None)
            }
        };

        let body = Json(ErrorResponse {
            code: code.code(),
            error: code.as_str().to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// `birth_year` -> `birthYear`, the spelling clients use on the wire
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Validator errors keyed by JSON field name instead of Rust field name
fn validation_details(errors: &ValidationErrors) -> serde_json::Value {
    match serde_json::to_value(errors) {
        Ok(serde_json::Value::Object(fields)) => serde_json::Value::Object(
            fields
                .into_iter()
                .map(|(field, kind)| (camel_case(&field), kind))
                .collect(),
        ),
        Ok(other) => other,
        Err(_) => serde_json::Value::Null,
    }
}

/// Flattens validator errors into a single human-readable line.
///
/// Field errors are emitted in field-name order; each uses its declared
/// message, falling back to `"<field> is invalid"`.
pub fn constraint_messages(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| match &err.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", camel_case(&field)),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::Validate;

    #[derive(Validate)]
    struct Params {
        #[validate(length(min = 1, max = 5, message = "Name is too long"))]
        name: String,
        #[validate(range(min = 1))]
        count: i32,
    }

    #[derive(Validate)]
    struct Renamed {
        #[validate(length(min = 3))]
        player_id: String,
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response = AppError::NotFound("Player not found with id: abc".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["code"], 1004);
        assert_eq!(json["error"], "NOT_FOUND");
        assert_eq!(json["message"], "Player not found with id: abc");
        assert!(json.get("details").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_is_opaque() {
        let response =
            AppError::InternalServerError("connection reset by peer".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["message"], "An unexpected error occurred");
        assert!(!json.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_database_error_is_opaque() {
        let response = AppError::from(DbErr::Custom("relation does not exist".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["error"], "DATABASE_ERROR");
        assert_eq!(json["message"], "An unexpected error occurred");
    }

    #[tokio::test]
    async fn test_validation_error_includes_details() {
        let params = Params {
            name: "too long".into(),
            count: 0,
        };
        let errors = params.validate().unwrap_err();
        let response = AppError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["message"], "Request body validation failed");
        assert!(json["details"]["name"].is_array());
        assert!(json["details"]["count"].is_array());
    }

    #[tokio::test]
    async fn test_validation_details_use_json_field_names() {
        let errors = Renamed {
            player_id: "ab".into(),
        }
        .validate()
        .unwrap_err();

        let json = body_json(AppError::from(errors).into_response()).await;
        assert_eq!(json["details"]["playerId"][0]["code"], "length");
        assert!(json["details"].get("player_id").is_none());
    }

    #[test]
    fn test_constraint_messages_fallback_uses_json_field_name() {
        let errors = Renamed {
            player_id: "ab".into(),
        }
        .validate()
        .unwrap_err();
        assert_eq!(constraint_messages(&errors), "playerId is invalid");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("throw_stats"), "throwStats");
        assert_eq!(camel_case("name"), "name");
    }

    #[test]
    fn test_constraint_messages_sorted_with_fallback() {
        let params = Params {
            name: "too long".into(),
            count: 0,
        };
        let errors = params.validate().unwrap_err();
        assert_eq!(
            constraint_messages(&errors),
            "count is invalid; Name is too long"
        );
    }
}
