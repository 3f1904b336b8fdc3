//! JSON message bodies used for error and fallback responses.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
