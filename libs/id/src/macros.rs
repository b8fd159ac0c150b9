//! Macro for declaring tagged entity types.

/// Implements [`TaggedEntity`](crate::TaggedEntity) for an entity type.
///
/// The tail length is optional and defaults to
/// [`DEFAULT_LENGTH`](crate::DEFAULT_LENGTH).
///
/// # Example
///
/// ```
/// use tagid::{tag_entity, Registry};
///
/// struct User;
/// struct Invoice;
///
/// tag_entity!(User, "u", 24);
/// tag_entity!(Invoice, "inv");
///
/// let mut registry = Registry::new();
/// registry.register::<User>()?;
/// registry.register::<Invoice>()?;
/// # Ok::<(), tagid::IdError>(())
/// ```
#[macro_export]
macro_rules! tag_entity {
    ($entity:ty, $prefix:literal) => {
        impl $crate::TaggedEntity for $entity {
            const PREFIX: &'static str = $prefix;
        }
    };
    ($entity:ty, $prefix:literal, $length:expr) => {
        impl $crate::TaggedEntity for $entity {
            const PREFIX: &'static str = $prefix;
            const LENGTH: usize = $length;
        }
    };
}
