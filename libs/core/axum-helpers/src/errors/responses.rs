//! Reusable OpenAPI response types for consistent API documentation.

use super::{ErrorResponse, ValidationErrorResponse};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "An unexpected error occurred."
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "msg": "El precio no puede ser menor a 0",
            "param": "price",
            "location": "body",
            "value": -5
        }]
    })
)]
pub struct BadRequestValidationResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "msg": "ID No valido",
            "param": "id",
            "location": "params",
            "value": "abc"
        }]
    })
)]
pub struct BadRequestIdResponse(pub ValidationErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Producto No Encontrado"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
