use serde::Serialize;

/// Standard error response body.
#[derive(Debug, Serialize)]
pub struct ErrorDto {
    pub error: String,
}
