//! # tagid
//!
//! Prefixed, random entity identifiers for persistence layers.
//!
//! ## Design Principles
//!
//! - Identifiers are generated once, at insert time, and never regenerated
//! - Every identifier carries a short human-readable prefix naming its
//!   entity type
//! - Configuration is declared per entity type and resolved through an
//!   explicit registry, not discovered by runtime introspection
//! - Uniqueness is probabilistic; the storage layer's unique-key constraint
//!   is the authoritative backstop
//!
//! ## ID Format
//!
//! All identifiers use a prefixed format: `{prefix}_{tail}`
//!
//! Examples:
//! - `u_07b2e1a4kq3x9fzm81tw5ncd`
//! - `inv_c94d02f7px`
//!
//! The tail opens with eight hex characters taken from a fresh UUID v4 and
//! is padded to the declared length with characters drawn uniformly from
//! `a-z0-9`. The UUID segment guarantees strong inter-call entropy even
//! under high insert rates; the alphabet segment exists to reach the
//! declared visible length.
//!
//! ## Declaring an entity
//!
//! ```
//! use tagid::{tag_entity, generate, Registry};
//!
//! struct User;
//! tag_entity!(User, "u", 24);
//!
//! let mut registry = Registry::new();
//! registry.register::<User>()?;
//!
//! let id = generate(registry.resolve::<User>()?);
//! assert!(id.as_str().starts_with("u_"));
//! # Ok::<(), tagid::IdError>(())
//! ```

mod config;
mod entity;
mod error;
mod generate;
mod macros;
mod registry;
mod value;

pub use config::{IdConfig, DEFAULT_LENGTH};
pub use entity::TaggedEntity;
#[allow(deprecated)]
pub use entity::LegacyTaggedEntity;
pub use error::IdError;
pub use generate::{generate, ALPHABET, ENTROPY_SEGMENT};
pub use registry::{Registry, Scheme};
pub use value::TypeId;
