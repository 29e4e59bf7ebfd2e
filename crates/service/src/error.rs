//! Typed error enum for the service layer.

use mfr_recon_storage::StorageError;
use thiserror::Error;

/// Service-layer error: either the caller left out required input, or
/// storage failed.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, foreign key, duplicate, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Required request fields were absent, null or empty.
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl ServiceError {
    /// Whether this error is likely transient (worth resubmitting).
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Storage(e) => e.is_transient(),
            Self::MissingFields(_) => false,
        }
    }

    /// Whether the caller is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingFields(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_names() {
        let err = ServiceError::MissingFields(vec!["supplier_manufacturer_id", "name"]);
        assert_eq!(err.to_string(), "missing required field(s): supplier_manufacturer_id, name");
        assert!(err.is_client_error());
        assert!(!err.is_transient());
    }

    #[test]
    fn test_storage_error_is_not_client_error() {
        let err = ServiceError::from(StorageError::Migration("boom".to_owned()));
        assert!(!err.is_client_error());
    }
}
