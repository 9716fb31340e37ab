use serde_json::Value;
use thiserror::Error;
use validator::ValidationErrors;

use crate::gateway::ApiResponse;

/// Failure raised by the HTTP gateway while talking to the remote API.
///
/// Every variant maps to an HTTP-like status code via [`ApiError::status`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The deadline fired before the remote call resolved.
    #[error("Request timeout")]
    Timeout,

    /// The remote answered, but with a non-success status or envelope.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        /// Raw envelope as reported by the remote, kept for diagnostics.
        envelope: ApiResponse<Value>,
    },

    /// The transport failed outright (connect, TLS, body read, invalid JSON).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The envelope was well-formed but its payload did not match the
    /// expected domain type.
    #[error("Unexpected payload shape: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP-like status code for this failure.
    pub fn status(&self) -> u16 {
        match self {
            Self::Timeout => 408,
            Self::Api { status, .. } => *status,
            Self::Transport(_) | Self::Decode(_) => 500,
        }
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Domain-level failure surfaced by the product operations.
///
/// Remote failures keep the originating [`ApiError`] as their source, so the
/// caller gets both a contextual top-level message and the full cause chain.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product ID is required")]
    MissingId,

    #[error("Validation failed")]
    Validation(#[source] ValidationErrors),

    #[error("Failed to fetch products: {source}")]
    List {
        #[source]
        source: ApiError,
    },

    #[error("Failed to fetch product {id}: {source}")]
    Fetch {
        id: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to create product: {source}")]
    Create {
        #[source]
        source: ApiError,
    },

    #[error("Failed to update product {id}: {source}")]
    Update {
        id: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to delete product {id}: {source}")]
    Delete {
        id: String,
        #[source]
        source: ApiError,
    },
}

impl ProductError {
    /// HTTP-like status code: 400 for local pre-flight failures, otherwise
    /// whatever the underlying API failure reported.
    pub fn status(&self) -> u16 {
        match self {
            Self::MissingId | Self::Validation(_) => 400,
            Self::List { source }
            | Self::Fetch { source, .. }
            | Self::Create { source }
            | Self::Update { source, .. }
            | Self::Delete { source, .. } => source.status(),
        }
    }

    /// Field-level violations, when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
