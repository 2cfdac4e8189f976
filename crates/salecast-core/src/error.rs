//! Error types for ledger and forecasting operations.

use thiserror::Error;

/// Result type alias for salecast-core operations
pub type Result<T> = std::result::Result<T, SalesError>;

/// Errors that can occur in the sales domain layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SalesError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Owner-scoped lookup was given an empty identity
    #[error("Owner identity must not be empty")]
    MissingIdentity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = SalesError::InsufficientData {
            required: 2,
            actual: 1,
        };
        assert_eq!(
            format!("{}", error),
            "Insufficient data: need at least 2 points, got 1"
        );
    }

    #[test]
    fn test_missing_identity_display() {
        let error = SalesError::MissingIdentity;
        assert_eq!(format!("{}", error), "Owner identity must not be empty");
    }

    #[test]
    fn test_error_is_clone_and_eq() {
        let error = SalesError::InsufficientData {
            required: 2,
            actual: 0,
        };
        assert_eq!(error.clone(), error);
        assert_ne!(error, SalesError::MissingIdentity);
    }

    #[test]
    fn test_error_propagation() {
        fn inner() -> Result<()> {
            Err(SalesError::MissingIdentity)
        }

        fn outer() -> Result<i32> {
            inner()?;
            Ok(42)
        }

        assert_eq!(outer().unwrap_err(), SalesError::MissingIdentity);
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: &dyn std::error::Error = &SalesError::MissingIdentity;
        let _ = error.to_string();
    }
}
