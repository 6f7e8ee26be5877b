//! Validation error types

use std::fmt;

/// Validation error for query parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Parameter absent from the request
    Missing { field: &'static str },

    /// Parameter present but empty
    Empty { field: &'static str },

    /// Parameter doesn't parse into the expected type
    InvalidFormat { field: &'static str, reason: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::InvalidFormat {
            field: "blockNumber",
            reason: "must be a non-negative integer",
        };
        assert_eq!(err.to_string(), "blockNumber: must be a non-negative integer");
        assert_eq!(
            ValidationError::Missing { field: "availChainId" }.to_string(),
            "availChainId is required"
        );
    }
}
