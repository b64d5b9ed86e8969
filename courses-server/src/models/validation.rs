//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is shorter than its minimum length
    TooShort { field: &'static str, min: usize },

    /// String doesn't match required format (e.g., UUID)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Partial update carried no fields
    NoChanges,

    /// Body or query string could not be decoded
    Malformed { reason: String },
}

impl ValidationError {
    /// Field the error refers to, if it is field-specific.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::TooShort { field, .. } | Self::InvalidFormat { field, .. } => Some(field),
            Self::NoChanges | Self::Malformed { .. } => None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::NoChanges => write!(f, "at least one field must be provided for update"),
            Self::Malformed { reason } => write!(f, "malformed request: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooShort {
            field: "title",
            min: 5,
        };
        assert_eq!(err.to_string(), "title must be at least 5 characters");
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn no_changes_has_no_field() {
        assert_eq!(ValidationError::NoChanges.field(), None);
    }
}
