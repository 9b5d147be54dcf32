//! Contract error types for shop service
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Shop service errors
///
/// Domain validation failures get their own variants. Storage failures are not
/// translated and travel unchanged inside [`ShopError::Storage`].
#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    /// Product, category or page not found
    #[error("{resource} {id} not found")]
    NotFound {
        /// Resource type (product, category, page)
        resource: &'static str,
        /// Resource identifier
        id: String,
    },

    /// Semantically invalid request (e.g. empty variation name)
    #[error("Invalid action: {message}")]
    InvalidAction { message: String },

    /// Malformed input model
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Persistence layer failure
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ShopError {
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn invalid_action(message: impl Into<String>) -> Self {
        Self::InvalidAction {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
