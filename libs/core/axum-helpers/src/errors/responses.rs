//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "code": 1005,
        "error": "INTERNAL_ERROR",
        "message": "An unexpected error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Body Validation Error",
    content_type = "application/json",
    example = json!({
        "code": 1001,
        "error": "VALIDATION_ERROR",
        "message": "Request body validation failed",
        "details": {
            "player_id": [{
                "code": "length",
                "message": "Player id must be between 3 and 32 characters",
                "params": {"min": 3, "max": 32, "value": "ab"}
            }]
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid Parameter",
    content_type = "application/json",
    example = json!({
        "code": 1002,
        "error": "INVALID_PARAMETER",
        "message": "Birth year must be a 4-digit number"
    })
)]
pub struct BadRequestParameterResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "code": 1004,
        "error": "NOT_FOUND",
        "message": "Player not found with id: aaronha01"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
