//! Standard client-facing error messages.

pub const VALIDATION_FAILED: &str = "Validation failed for the provided input.";
pub const INVALID_ID: &str = "ID No valido";
pub const INVALID_JSON: &str = "Invalid JSON format.";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found.";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource.";
pub const SERVICE_UNAVAILABLE: &str = "Service is temporarily unavailable.";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred.";
