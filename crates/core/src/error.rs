//! Lookup error model.

use thiserror::Error;

/// Result type used across the lookup flow.
pub type LookupResult<T> = Result<T, LookupError>;

/// Why a product lookup produced no product.
///
/// Every variant is terminal for the action that triggered it. Callers log the
/// error and move on; nothing here is fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The API base URL is not configured. No request is made.
    #[error("API base URL is not configured")]
    Config,

    /// The product code is empty. No request is made.
    #[error("product code is empty")]
    Input,

    /// The endpoint answered with a non-success status.
    #[error("remote error: HTTP {status}")]
    Remote { status: u16 },

    /// The response body is missing fields or carries malformed values.
    #[error("invalid product data: {0}")]
    Validation(String),

    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

impl LookupError {
    pub fn remote(status: u16) -> Self {
        Self::Remote { status }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Whether the lookup was rejected before any request went out.
    ///
    /// Precondition failures leave register state untouched; every other
    /// failure clears the pending product.
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Config | Self::Input)
    }
}
