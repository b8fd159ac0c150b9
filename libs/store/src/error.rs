//! Store error types.

use tagid::{IdError, TypeId};
use thiserror::Error;

/// Errors surfaced by the insert path and row operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Identifier generation failed for the entity about to be inserted.
    ///
    /// Wraps [`IdError::ConfigurationMissing`] when the entity type has no
    /// registered identifier configuration.
    #[error("identifier generation failed for entity type '{entity}'")]
    IdGeneration {
        entity: &'static str,
        #[source]
        source: IdError,
    },

    /// The row key already exists; the storage-layer uniqueness backstop.
    #[error("unique constraint violated on table '{table}': duplicate id '{id}'")]
    UniqueViolation { table: &'static str, id: TypeId },

    /// No row with this key exists.
    #[error("row not found in table '{table}': '{id}'")]
    NotFound { table: &'static str, id: TypeId },
}
