//! Error types for identifier registration and resolution.

use thiserror::Error;

use crate::registry::Scheme;

/// Errors that can occur when registering or resolving identifier
/// configuration, or when wrapping a raw identifier value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// No scheme has a configuration registered for the entity type.
    ///
    /// Fatal for the generation attempt: an entity without a declared
    /// prefix has no valid identity scheme, and no default is substituted.
    #[error("no identifier configuration registered for entity type '{entity}'")]
    ConfigurationMissing { entity: &'static str },

    /// The entity type is already registered under this scheme.
    #[error("entity type '{entity}' is already registered under the {scheme} scheme")]
    AlreadyRegistered { entity: &'static str, scheme: Scheme },

    /// The marker declared an empty prefix.
    #[error("entity type '{entity}' declared an empty prefix")]
    EmptyPrefix { entity: &'static str },

    /// An identifier value cannot be empty.
    #[error("identifier value cannot be empty")]
    Empty,
}

impl IdError {
    /// Returns true if this error indicates a missing configuration.
    pub fn is_configuration_missing(&self) -> bool {
        matches!(self, IdError::ConfigurationMissing { .. })
    }
}
