use serde::{Deserialize, Serialize};

/// Standard error response body.
///
/// `code` is a stable machine-readable identifier present on authorization and
/// business-rule rejections so clients can branch without parsing messages.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: None,
        }
    }

    pub fn with_code(code: &str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code.to_string()),
        }
    }
}

/// Error response body for failed request validation (422).
#[derive(Serialize)]
pub struct ValidationErrorDto {
    pub error: String,
    pub errors: validator::ValidationErrors,
}
