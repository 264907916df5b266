//! Error Types

use thiserror::Error;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, StorefrontError>;

/// Storefront error types
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Transport failure talking to the backend
    #[error("HTTP error: {0}")]
    Http(String),

    /// Backend answered with a non-success status
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: String, status: u16 },

    /// Response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Response decoded but matched none (or more than one) of the expected shapes
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Required query parameter absent or empty
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Payment discriminator was neither `btc` nor `stripe`
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    /// Push channel failure
    #[error("Event channel error: {0}")]
    Channel(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorefrontError {
    /// Check if the user can reasonably resubmit
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::Status { .. } | Self::Channel(_)
        )
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::Http(_) | Self::Status { .. } => {
                "We couldn't reach the order service. Please try again.".into()
            }
            Self::Decode(_) | Self::UnexpectedResponse(_) | Self::Json(_) => {
                "There was an error processing your order.".into()
            }
            Self::MissingParameter(name) => format!("The link is missing its {name}."),
            Self::InvalidPaymentMethod(method) => {
                format!("'{method}' is not a supported payment method.")
            }
            Self::Channel(_) => "Lost connection to the order status feed.".into(),
            Self::Config(_) => "Service configuration error.".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(StorefrontError::Http("reset".into()).is_retryable());
        assert!(
            StorefrontError::Status { endpoint: "/checkout".into(), status: 502 }.is_retryable()
        );
        assert!(!StorefrontError::MissingParameter("order_id").is_retryable());
    }

    #[test]
    fn test_user_message_names_parameter() {
        let msg = StorefrontError::MissingParameter("session_id").user_message();
        assert!(msg.contains("session_id"));
    }
}
