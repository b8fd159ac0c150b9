//! # tagid-store
//!
//! Minimal persistence boundary for [`tagid`] identifiers.
//!
//! This crate plays the part of the persistence framework the identifier
//! scheme plugs into: at the moment a new entity row is inserted, an
//! [`IdentifierSource`] is asked for the row's primary key, the key is
//! written back into the entity through [`Identified::set_id`], and the
//! table's key map acts as the unique-key constraint — the authoritative
//! backstop behind the generator's probabilistic uniqueness.
//!
//! Tables are in-memory maps. Relational mapping, transactions, and schema
//! management are intentionally out of scope.
//!
//! ```
//! use std::sync::Arc;
//!
//! use tagid::{tag_entity, Registry, TypeId};
//! use tagid_store::{Identified, Session, Table, TypeIdGenerator};
//!
//! #[derive(Clone)]
//! struct User {
//!     id: Option<TypeId>,
//! }
//!
//! tag_entity!(User, "u", 24);
//!
//! impl Identified for User {
//!     fn id(&self) -> Option<&TypeId> {
//!         self.id.as_ref()
//!     }
//!     fn set_id(&mut self, id: TypeId) {
//!         self.id = Some(id);
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register::<User>()?;
//!
//! let users = Table::new("users", Arc::new(TypeIdGenerator::new(Arc::new(registry))));
//! let id = users.insert(&Session::new(), User { id: None })?;
//! assert!(id.as_str().starts_with("u_"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod generator;
mod session;
mod table;

pub use error::StoreError;
pub use generator::{Entity, IdentifierSource, TypeIdGenerator};
pub use session::Session;
pub use table::{Identified, Table};
