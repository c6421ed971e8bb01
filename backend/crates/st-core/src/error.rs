use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid seller status: {value} {location}")]
    InvalidSellerStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid product status: {value} {location}")]
    InvalidProductStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid product condition: {value} {location}")]
    InvalidProductCondition {
        value: String,
        location: ErrorLocation,
    },
}


impl CoreError {
    /// Message without the source location, safe to return to clients
    pub fn client_message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidRole { value, .. } => format!("Invalid role: {}", value),
            CoreError::InvalidSellerStatus { value, .. } => {
                format!("Invalid seller status: {}", value)
            }
            CoreError::InvalidProductStatus { value, .. } => {
                format!("Invalid product status: {}", value)
            }
            CoreError::InvalidProductCondition { value, .. } => {
                format!("Invalid product condition: {}", value)
            }
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
