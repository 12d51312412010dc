//! Error types for the GTE SDK

use thiserror::Error;

use crate::types::operator::RoleRejection;

/// Result type alias for GTE operations
pub type Result<T> = std::result::Result<T, GteError>;

/// Main error type for GTE SDK operations
#[derive(Error, Debug)]
pub enum GteError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// REST payload did not match the expected schema
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// API errors returned from the GTE REST service
    #[error("API error {code}: {message}")]
    Api {
        /// HTTP status code
        code: i32,
        /// Response body or error message
        message: String,
    },

    /// Invalid parameter errors
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operator role request rejected by the local role policy
    #[error("Invalid parameter: {0}")]
    RolePolicy(#[from] RoleRejection),

    /// Address validation errors
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A collaborator was used before it was initialized
    #[error("Not initialized: {0}")]
    NotInitialized(String),

    /// JSON-RPC provider errors
    #[error("Provider error: {0}")]
    Provider(String),

    /// Contract call construction or submission errors
    #[error("Contract error: {0}")]
    Contract(String),

    /// Transaction was mined but reverted
    #[error("Transaction reverted: {0}")]
    Reverted(String),

    /// Transaction was dropped before a receipt was produced
    #[error("No receipt for transaction: {0}")]
    MissingReceipt(String),

    /// Generic errors
    #[error("GTE error: {0}")]
    Generic(String),
}

impl GteError {
    /// Create a new API error
    pub fn api(code: i32, message: impl Into<String>) -> Self {
        Self::Api {
            code,
            message: message.into(),
        }
    }

    /// Create a new malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a new invalid parameter error
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Create a new invalid address error
    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress(message.into())
    }

    /// Create a new not-initialized error
    pub fn not_initialized(message: impl Into<String>) -> Self {
        Self::NotInitialized(message.into())
    }

    /// Create a new provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Create a new contract error
    pub fn contract(message: impl Into<String>) -> Self {
        Self::Contract(message.into())
    }

    /// Create a new generic error
    pub fn generic(message: impl Into<String>) -> Self {
        Self::Generic(message.into())
    }

    /// Whether the error was caused by caller input and raised before any network access
    pub fn is_caller_input(&self) -> bool {
        matches!(
            self,
            GteError::InvalidParameter(_) | GteError::RolePolicy(_) | GteError::InvalidAddress(_)
        )
    }
}
