//! Entity-type registration and configuration resolution.

use std::any;
use std::collections::HashMap;
use std::fmt;

use crate::config::IdConfig;
use crate::entity::TaggedEntity;
use crate::error::IdError;

/// The declaration scheme a registration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// The consolidated [`TaggedEntity`] marker.
    Tagged,
    /// The superseded [`LegacyTaggedEntity`](crate::LegacyTaggedEntity)
    /// marker.
    Legacy,
}

impl Scheme {
    /// Resolution precedence: the consolidated scheme shadows the legacy
    /// one.
    const ORDER: [Self; 2] = [Self::Tagged, Self::Legacy];

    fn as_str(self) -> &'static str {
        match self {
            Self::Tagged => "tagged",
            Self::Legacy => "legacy",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
struct Registration {
    entity: &'static str,
    config: IdConfig,
}

/// Caller-owned map from entity type to identifier configuration.
///
/// Populated once at startup, then shared immutably (typically behind an
/// `Arc`). Resolution walks the scheme precedence list and short-circuits
/// on the first hit. A type with no registration under either scheme has
/// no valid identity scheme: resolution fails rather than defaulting.
///
/// Registration is keyed by the concrete runtime type only; there is no
/// notion of one type's registration applying to another.
#[derive(Debug, Default)]
pub struct Registry {
    tagged: HashMap<any::TypeId, Registration>,
    legacy: HashMap<any::TypeId, Registration>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `E` under the consolidated scheme.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::AlreadyRegistered`] when `E` is already
    /// registered under this scheme, and [`IdError::EmptyPrefix`] when the
    /// marker declares an empty prefix.
    pub fn register<E: TaggedEntity + 'static>(&mut self) -> Result<(), IdError> {
        self.insert::<E>(Scheme::Tagged, E::PREFIX, E::LENGTH)
    }

    /// Registers `E` under the legacy scheme.
    ///
    /// Consulted only when `E` has no consolidated registration.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`register`](Self::register).
    #[allow(deprecated)]
    pub fn register_legacy<E: crate::LegacyTaggedEntity + 'static>(
        &mut self,
    ) -> Result<(), IdError> {
        self.insert::<E>(Scheme::Legacy, E::PREFIX, E::LENGTH)
    }

    fn insert<E: 'static>(
        &mut self,
        scheme: Scheme,
        prefix: &'static str,
        length: usize,
    ) -> Result<(), IdError> {
        let entity = any::type_name::<E>();
        if prefix.is_empty() {
            return Err(IdError::EmptyPrefix { entity });
        }

        let key = any::TypeId::of::<E>();
        let map = self.map_mut(scheme);
        if map.contains_key(&key) {
            return Err(IdError::AlreadyRegistered { entity, scheme });
        }
        map.insert(
            key,
            Registration {
                entity,
                config: IdConfig::new(prefix).with_length(length),
            },
        );
        Ok(())
    }

    /// Resolves the configuration for `E`.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::ConfigurationMissing`] when no scheme has a
    /// registration for `E`.
    pub fn resolve<E: 'static>(&self) -> Result<&IdConfig, IdError> {
        self.resolve_entry(any::TypeId::of::<E>(), any::type_name::<E>())
    }

    /// Resolves by runtime type key, for callers holding an erased entity
    /// reference. `entity` is used for error reporting only.
    ///
    /// # Errors
    ///
    /// Returns [`IdError::ConfigurationMissing`] when no scheme has a
    /// registration under `key`.
    pub fn resolve_entry(
        &self,
        key: any::TypeId,
        entity: &'static str,
    ) -> Result<&IdConfig, IdError> {
        Scheme::ORDER
            .iter()
            .find_map(|scheme| self.map(*scheme).get(&key))
            .map(|registration| &registration.config)
            .ok_or(IdError::ConfigurationMissing { entity })
    }

    /// Whether `E` is registered under any scheme.
    pub fn is_registered<E: 'static>(&self) -> bool {
        let key = any::TypeId::of::<E>();
        Scheme::ORDER
            .iter()
            .any(|scheme| self.map(*scheme).contains_key(&key))
    }

    /// Number of registrations across both schemes.
    pub fn len(&self) -> usize {
        self.tagged.len() + self.legacy.len()
    }

    /// Whether the registry has no registrations.
    pub fn is_empty(&self) -> bool {
        self.tagged.is_empty() && self.legacy.is_empty()
    }

    fn map(&self, scheme: Scheme) -> &HashMap<any::TypeId, Registration> {
        match scheme {
            Scheme::Tagged => &self.tagged,
            Scheme::Legacy => &self.legacy,
        }
    }

    fn map_mut(&mut self, scheme: Scheme) -> &mut HashMap<any::TypeId, Registration> {
        match scheme {
            Scheme::Tagged => &mut self.tagged,
            Scheme::Legacy => &mut self.legacy,
        }
    }
}
