//! Error types for ticket-desk
//!
//! One error enum covers the whole pipeline: validation failures carry every
//! triggered violation, lookups that miss carry the entity kind and id, and
//! storage failures keep their I/O or JSON cause attached. The API boundary
//! maps these onto status codes; nothing below it retries or recovers.

use crate::core::EntityKind;
use crate::validation::Violation;
use thiserror::Error;

/// Result type alias using `TicketDeskError`
pub type Result<T> = std::result::Result<T, TicketDeskError>;

/// Main error type for ticket-desk operations
#[derive(Debug, Error)]
pub enum TicketDeskError {
    /// One or more field-level violations; the mutation was not applied
    #[error("validation failed with {} violation(s)", violations.len())]
    Validation { violations: Vec<Violation> },

    /// No entity with the requested id in the target collection
    #[error("{kind} not found")]
    NotFound { kind: EntityKind, id: i64 },

    /// The backing file could not be read
    #[error("Error reading data from file")]
    StorageRead {
        #[source]
        source: std::io::Error,
    },

    /// The backing file held something other than a valid document
    #[error("Error reading data from file")]
    StorageParse {
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be written
    #[error("Error writing data to file")]
    StorageWrite {
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Invariant breakage that should not be reachable from the outside
    #[error("internal error: {0}")]
    Internal(String),
}

impl TicketDeskError {
    /// Create a validation error from a set of violations
    #[must_use]
    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::Validation { violations }
    }

    /// Create a not-found error for the given kind and id
    #[must_use]
    pub const fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }

    /// Create an internal error with a custom message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether this error comes from the document store
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageRead { .. } | Self::StorageParse { .. } | Self::StorageWrite { .. }
        )
    }
}
