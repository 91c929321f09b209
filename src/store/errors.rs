//! # Store Errors

use thiserror::Error;

use crate::schema::SchemaError;
use crate::storage::StorageError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the mutation path
#[derive(Debug, Error)]
pub enum StoreError {
    /// Candidate failed the structural check; nothing was stored
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Mirror write failed; the in-memory append was rolled back
    #[error("Persistence failed: {0}")]
    Persistence(#[from] StorageError),
}

impl StoreError {
    /// Whether the caller is at fault
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValidationDetails;

    #[test]
    fn test_client_error_classification() {
        let validation =
            StoreError::from(SchemaError::validation_failed(ValidationDetails::missing_field("name")));
        assert!(validation.is_client_error());

        let persistence = StoreError::from(StorageError::write_failed_no_source("disk full"));
        assert!(!persistence.is_client_error());
        assert!(persistence.to_string().contains("disk full"));
    }
}
