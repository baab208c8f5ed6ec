//! User source error types
//!
//! # Example
//!
//! ```rust
//! use user_directory::repository::{RepositoryError, RepositoryErrorKind};
//!
//! let error = RepositoryError::duplicate_id(7);
//! assert!(matches!(error.kind, RepositoryErrorKind::DuplicateId));
//! assert!(!error.is_unavailable());
//! ```

use std::fmt;

/// Operation being performed when the error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Building the source from its records
    Load,
    /// Reading the full collection
    ListAll,
    /// Counting records
    Count,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::ListAll => write!(f, "list_all"),
            Self::Count => write!(f, "count"),
        }
    }
}

/// Category of user source error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Two records share an identifier
    DuplicateId,
    /// The backing store cannot be reached
    Unavailable,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId => write!(f, "duplicate_id"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

/// Structured user source error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl RepositoryError {
    /// Create a new error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
        }
    }

    /// A record identifier appeared more than once while loading
    pub fn duplicate_id(id: u32) -> Self {
        Self::new(
            RepositoryOperation::Load,
            RepositoryErrorKind::DuplicateId,
            format!("user id {id} appears more than once"),
        )
    }

    /// The backing store could not be reached
    pub fn unavailable(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::Unavailable, message)
    }

    /// Whether the failure is transient
    pub fn is_unavailable(&self) -> bool {
        self.kind == RepositoryErrorKind::Unavailable
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User source {} error during {}: {}",
            self.kind, self.operation, self.message
        )
    }
}

impl std::error::Error for RepositoryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = RepositoryError::duplicate_id(3);
        assert_eq!(
            error.to_string(),
            "User source duplicate_id error during load: user id 3 appears more than once"
        );
    }

    #[test]
    fn test_unavailable() {
        let error = RepositoryError::unavailable(RepositoryOperation::Count, "timed out");
        assert!(error.is_unavailable());
        assert_eq!(error.operation, RepositoryOperation::Count);
    }

    #[test]
    fn test_kind_display_and_classification() {
        assert_eq!(RepositoryErrorKind::DuplicateId.to_string(), "duplicate_id");
        assert_eq!(RepositoryErrorKind::Unavailable.to_string(), "unavailable");
        assert!(!RepositoryError::duplicate_id(1).is_unavailable());
    }
}
