use thiserror::Error;

/// Errors that can occur when validating a submitted item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Both id and data are required.")]
    MissingFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Both id and data are required."
        );
    }
}
