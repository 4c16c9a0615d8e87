// src/errors.rs

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Failures the registration and ranking services report to callers.
///
/// Storage variants keep the underlying error for logging only. Their
/// `Display` is a fixed message that is safe to hand to a client.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Could not fetch facility list")]
    Retrieval(anyhow::Error),

    #[error("Something went wrong while adding facility")]
    Insertion(anyhow::Error),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }

    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            ServiceError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_storage_errors_hide_their_cause() {
        let err = ServiceError::Retrieval(anyhow!("connection refused: 10.0.0.5:5432"));
        assert_eq!(err.to_string(), "Could not fetch facility list");
        assert!(!err.is_validation());

        let err = ServiceError::Insertion(anyhow!("duplicate key value violates constraint"));
        assert_eq!(err.to_string(), "Something went wrong while adding facility");
        assert!(err.validation_errors().is_none());
    }
}
