//! In-memory entity tables keyed by generated identifiers.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tagid::TypeId;

use crate::error::StoreError;
use crate::generator::{Entity, IdentifierSource};
use crate::session::Session;

/// Access to the entity's identifier field.
///
/// The table writes the generated identifier back through `set_id` before
/// the row is stored, mirroring how a persistence framework populates the
/// primary-key field on insert.
pub trait Identified {
    /// The current identifier, if one has been assigned.
    fn id(&self) -> Option<&TypeId>;

    /// Writes the assigned identifier.
    fn set_id(&mut self, id: TypeId);
}

/// An in-memory table of rows keyed by their identifier.
///
/// The key map doubles as the unique-key constraint: inserting a duplicate
/// identifier fails. Identifier generation happens outside the row lock,
/// so concurrent inserters only contend on the map itself.
pub struct Table<E> {
    name: &'static str,
    source: Arc<dyn IdentifierSource>,
    rows: RwLock<HashMap<TypeId, E>>,
}

impl<E> Table<E>
where
    E: Entity + Identified + Clone,
{
    /// Creates an empty table.
    pub fn new(name: &'static str, source: Arc<dyn IdentifierSource>) -> Self {
        Self {
            name,
            source,
            rows: RwLock::new(HashMap::new()),
        }
    }

    /// Inserts a new row, assigning an identifier when the entity does not
    /// already carry one.
    ///
    /// Returns the row's identifier.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::IdGeneration`] when the identifier source
    /// cannot produce a key for this entity type, and with
    /// [`StoreError::UniqueViolation`] when the key already exists.
    pub fn insert(&self, session: &Session, mut entity: E) -> Result<TypeId, StoreError> {
        let id = match entity.id() {
            Some(id) => id.clone(),
            None => {
                let id = self.source.generate(session, &entity)?;
                entity.set_id(id.clone());
                id
            }
        };

        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        if rows.contains_key(&id) {
            return Err(StoreError::UniqueViolation {
                table: self.name,
                id,
            });
        }
        rows.insert(id.clone(), entity);
        tracing::debug!(table = self.name, id = %id, "row inserted");
        Ok(id)
    }

    /// Fetches a row by identifier.
    pub fn get(&self, id: &TypeId) -> Option<E> {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Removes a row by identifier.
    ///
    /// # Errors
    ///
    /// Fails with [`StoreError::NotFound`] when the key is absent.
    pub fn remove(&self, id: &TypeId) -> Result<E, StoreError> {
        self.rows
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .ok_or_else(|| StoreError::NotFound {
                table: self.name,
                id: id.clone(),
            })
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The table name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use tagid::{tag_entity, Registry};

    use crate::generator::TypeIdGenerator;

    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Widget {
        id: Option<TypeId>,
        label: String,
    }

    tag_entity!(Widget, "wid");

    impl Identified for Widget {
        fn id(&self) -> Option<&TypeId> {
            self.id.as_ref()
        }

        fn set_id(&mut self, id: TypeId) {
            self.id = Some(id);
        }
    }

    fn widgets() -> Table<Widget> {
        let mut registry = Registry::new();
        registry.register::<Widget>().unwrap();
        Table::new("widgets", Arc::new(TypeIdGenerator::new(Arc::new(registry))))
    }

    #[test]
    fn insert_writes_id_back_into_row() {
        let table = widgets();
        let id = table
            .insert(
                &Session::new(),
                Widget {
                    id: None,
                    label: "a".into(),
                },
            )
            .unwrap();

        let row = table.get(&id).unwrap();
        assert_eq!(row.id.as_ref(), Some(&id));
        assert_eq!(row.label, "a");
    }

    #[test]
    fn preassigned_id_is_honored() {
        let table = widgets();
        let id = TypeId::new("wid_fixed00001").unwrap();
        let assigned = table
            .insert(
                &Session::new(),
                Widget {
                    id: Some(id.clone()),
                    label: "b".into(),
                },
            )
            .unwrap();

        assert_eq!(assigned, id);
        assert!(table.get(&id).is_some());
    }

    #[test]
    fn duplicate_key_violates_unique_constraint() {
        let table = widgets();
        let session = Session::new();
        let id = TypeId::new("wid_fixed00001").unwrap();

        table
            .insert(
                &session,
                Widget {
                    id: Some(id.clone()),
                    label: "first".into(),
                },
            )
            .unwrap();
        let err = table
            .insert(
                &session,
                Widget {
                    id: Some(id),
                    label: "second".into(),
                },
            )
            .unwrap_err();

        assert!(matches!(err, StoreError::UniqueViolation { .. }));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn remove_missing_row_is_not_found() {
        let table = widgets();
        let id = TypeId::new("wid_absent").unwrap();
        let err = table.remove(&id).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
