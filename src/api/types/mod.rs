//! Request extractors and response types shared by the HTTP handlers

pub mod error;
pub mod form;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use form::Form;

use serde::{Deserialize, Serialize};

/// Plain message body returned by successful requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
