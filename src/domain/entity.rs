//! Domain Layer - Core Entity Trait
//!
//! Basic contract for identifiable records plus the domain error type.

/// Core trait for identifiable domain records
pub trait Entity: Sized + Clone {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync + 'static;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    NotFound(String),
    InvalidInput(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::NotFound("/e4p/9".to_string());
        assert_eq!(err.to_string(), "Not found: /e4p/9");
        let err = DomainError::InvalidInput("empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty");
    }
}
