//! Error types for chromaq operations.

use thiserror::Error;

/// Result type alias using chromaq's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building requests or reading results.
///
/// Structured errors returned by the database are not represented here:
/// they arrive as a [`Response::Failure`](crate::Response::Failure).
#[derive(Debug, Error)]
pub enum Error {
    /// The request shape is invalid. Raised before any transport call.
    #[error("{0}")]
    Validation(String),

    /// Embeddings had to be computed but no embedding function was given.
    #[error("embeddings were not specified, therefore an embedding function is required")]
    MissingEmbeddingFunction,

    /// Ids had to be generated but no id generator was configured.
    #[error("ids cannot be empty when no id generator is configured")]
    MissingIdGenerator,

    /// The embedding function failed.
    #[error("embedding function error: {0}")]
    Embedding(String),

    /// The transport failed before producing an outcome.
    #[error("transport error: {0}")]
    Transport(String),

    /// The collection is in a state the operation cannot act on.
    #[error("{0}")]
    Collection(String),

    /// A raw payload could not be read as the expected result type.
    #[error("deserialize error: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl Error {
    /// Creates a validation error with the given message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Returns true if this is a request validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_message() {
        let err = Error::validation("ids cannot be empty for update");
        assert_eq!(err.to_string(), "ids cannot be empty for update");
        assert!(err.is_validation());
    }

    #[test]
    fn test_deserialize_from_serde() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, Error::Deserialize(_)));
        assert!(!err.is_validation());
    }
}
