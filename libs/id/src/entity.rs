//! Declarative markers attaching identifier configuration to entity types.
//!
//! Two declaration schemes exist. [`TaggedEntity`] is the consolidated
//! form; [`LegacyTaggedEntity`] is the superseded one, kept so existing
//! declarations keep resolving. A [`Registry`](crate::Registry) consults
//! the legacy scheme only when a type has no consolidated registration.

use crate::config::DEFAULT_LENGTH;

/// Marks an entity type as carrying prefixed-identifier configuration.
///
/// Implement it directly (or use [`tag_entity!`](crate::tag_entity)) and
/// register the type before any identifier is generated:
///
/// ```
/// use tagid::{Registry, TaggedEntity};
///
/// struct User;
///
/// impl TaggedEntity for User {
///     const PREFIX: &'static str = "u";
///     const LENGTH: usize = 24;
/// }
///
/// let mut registry = Registry::new();
/// registry.register::<User>()?;
/// # Ok::<(), tagid::IdError>(())
/// ```
pub trait TaggedEntity {
    /// Prefix of the entity, e.g. `"u"` for user. Recommendation: at most
    /// 3 characters.
    const PREFIX: &'static str;

    /// Total length of the random tail.
    const LENGTH: usize = DEFAULT_LENGTH;
}

/// The superseded declaration scheme.
#[deprecated(note = "implement `TaggedEntity` instead")]
pub trait LegacyTaggedEntity {
    /// Prefix of the entity, e.g. `"u"` for user.
    const PREFIX: &'static str;

    /// Total length of the random tail.
    const LENGTH: usize = DEFAULT_LENGTH;
}
