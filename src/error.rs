//! Error types and handling for the weather advisor

use thiserror::Error;

/// Main error type for the weather advisor
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Configuration-related errors, including a missing API credential
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The weather provider could not be reached or timed out
    #[error("Network error: {message}")]
    Network { message: String },

    /// The weather provider answered with a non-success status
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The weather provider answered, but the body made no sense
    #[error("Invalid provider response: {message}")]
    InvalidResponse { message: String },

    /// The requested place is unknown to the provider
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Request payloads that could not be parsed
    #[error("Invalid input: {message}")]
    MalformedInput { message: String },
}

impl AdvisorError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new provider error for the given HTTP status
    pub fn provider<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// Create a new invalid-response error
    pub fn invalid_response<S: Into<String>>(message: S) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new malformed-input error
    pub fn malformed_input<S: Into<String>>(message: S) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to on the API surface
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            AdvisorError::MalformedInput { .. } => 400,
            _ => 500,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            AdvisorError::Network { .. } => {
                "Unable to reach the weather service. Please check your internet connection."
                    .to_string()
            }
            AdvisorError::Provider { status, .. } => {
                format!("The weather service rejected the request (HTTP {status}).")
            }
            AdvisorError::InvalidResponse { .. } => {
                "The weather service returned data that could not be read.".to_string()
            }
            AdvisorError::NotFound { message } => format!("Not found: {message}"),
            AdvisorError::MalformedInput { message } => format!("Invalid input: {message}"),
        }
    }
}
