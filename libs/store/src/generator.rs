//! The identifier-generation extension point.

use std::any::{self, Any};
use std::sync::Arc;

use tagid::{generate, Registry, TypeId};

use crate::error::StoreError;
use crate::session::Session;

/// Type-erased view of an entity instance.
///
/// Blanket-implemented for every `'static` type, so any value a table
/// stores can be handed to an [`IdentifierSource`] without the source
/// knowing its concrete type.
pub trait Entity: Any {
    /// The entity's type name, for diagnostics and error reporting.
    fn entity_name(&self) -> &'static str;

    /// Upcast for runtime type lookups.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> Entity for T {
    fn entity_name(&self) -> &'static str {
        any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Extension point invoked when a new entity row needs a primary key.
///
/// Implementations receive the opaque session context and an erased
/// reference to the entity about to be inserted, and must either return a
/// fresh identifier or fail the insert. Implementations must be safe to
/// call from concurrent inserters.
pub trait IdentifierSource: Send + Sync {
    /// Produces the identifier for `entity`.
    ///
    /// # Errors
    ///
    /// Fails when no identifier can be produced for the entity type; the
    /// insert is abandoned.
    fn generate(&self, session: &Session, entity: &dyn Entity) -> Result<TypeId, StoreError>;
}

/// The [`IdentifierSource`] backed by a [`Registry`].
///
/// Resolves the entity's registered `(prefix, length)` configuration —
/// consolidated scheme first, legacy second — and generates a prefixed
/// random identifier from it. An unregistered entity type fails the
/// insert; no default prefix is substituted.
#[derive(Clone)]
pub struct TypeIdGenerator {
    registry: Arc<Registry>,
}

impl TypeIdGenerator {
    /// Creates a generator over a shared registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }
}

impl IdentifierSource for TypeIdGenerator {
    fn generate(&self, _session: &Session, entity: &dyn Entity) -> Result<TypeId, StoreError> {
        let config = self
            .registry
            .resolve_entry(entity.as_any().type_id(), entity.entity_name())
            .map_err(|source| StoreError::IdGeneration {
                entity: entity.entity_name(),
                source,
            })?;

        let id = generate(config);
        tracing::debug!(entity = entity.entity_name(), id = %id, "generated identifier");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use tagid::{tag_entity, IdError};

    use super::*;

    struct Article {
        #[allow(dead_code)]
        title: String,
    }

    tag_entity!(Article, "art", 12);

    struct Unmarked;

    fn source() -> TypeIdGenerator {
        let mut registry = Registry::new();
        registry.register::<Article>().unwrap();
        TypeIdGenerator::new(Arc::new(registry))
    }

    #[test]
    fn generates_prefixed_id_for_registered_entity() {
        let source = source();
        let entity = Article {
            title: "hello".into(),
        };

        let id = source.generate(&Session::new(), &entity).unwrap();
        assert!(id.as_str().starts_with("art_"));
        assert_eq!(id.tail().unwrap().len(), 12);
    }

    #[test]
    fn successive_ids_differ() {
        let source = source();
        let entity = Article { title: "a".into() };
        let session = Session::new();

        let first = source.generate(&session, &entity).unwrap();
        let second = source.generate(&session, &entity).unwrap();
        let third = source.generate(&session, &entity).unwrap();
        assert_ne!(first, second);
        assert_ne!(first, third);
        assert_ne!(second, third);
    }

    #[test]
    fn unregistered_entity_fails() {
        let source = source();
        let err = source.generate(&Session::new(), &Unmarked).unwrap_err();
        assert!(matches!(
            err,
            StoreError::IdGeneration {
                source: IdError::ConfigurationMissing { .. },
                ..
            }
        ));
    }
}
