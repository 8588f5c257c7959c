//! Standard response envelope.

use serde::Serialize;

/// Uniform wrapper around every CRUD payload: the payload itself, a success
/// flag, and a human-readable message (empty on success).
#[derive(Debug, Serialize)]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        ServiceResponse {
            data: Some(data),
            success: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        ServiceResponse {
            data: None,
            success: false,
            message: message.into(),
        }
    }
}
