//! Generic entity repository
//!
//! One repository type serves all entity kinds through the [`Entity`] seam.
//! Every operation is single-shot: load the document, validate against that
//! snapshot, mutate, save. Validation is fully evaluated before any mutation,
//! so a failed validation never leaves the document partially written.

use crate::core::{Document, Entity};
use crate::error::{Result, TicketDeskError};
use crate::validation::{FieldMap, Mode, validate};
use serde_json::Value;
use std::marker::PhantomData;

use super::FileStorage;

/// Repository for one entity kind over the shared document store
pub struct DocumentRepository<'a, E> {
    store: &'a FileStorage,
    _kind: PhantomData<E>,
}

impl<'a, E: Entity> DocumentRepository<'a, E> {
    /// Create a repository view over the given store
    #[must_use]
    pub const fn new(store: &'a FileStorage) -> Self {
        Self {
            store,
            _kind: PhantomData,
        }
    }

    /// Return the full collection in storage order
    pub fn list(&self) -> Result<Vec<E>> {
        let doc = self.store.load()?;
        Ok(E::collection(&doc).to_vec())
    }

    /// Validate and append a new entity, assigning the next id
    ///
    /// The id is `max(existing ids) + 1`, or 1 for an empty collection; the
    /// caller can never supply one (the allowed-fields check rejects `id`).
    pub fn create(&self, fields: FieldMap) -> Result<E> {
        let mut doc = self.store.load()?;

        let violations = validate(E::KIND, &fields, &doc, Mode::Create);
        if !violations.is_empty() {
            return Err(TicketDeskError::validation(violations));
        }

        let next_id = E::collection(&doc)
            .iter()
            .map(Entity::id)
            .max()
            .map_or(1, |max| max + 1);
        let entity = build_entity::<E>(fields, next_id)?;

        E::collection_mut(&mut doc).push(entity.clone());
        self.store.save(&doc)?;

        tracing::debug!(kind = %E::KIND, id = next_id, "created entity");
        Ok(entity)
    }

    /// Validate and shallow-merge fields over the entity with the given id
    ///
    /// Each provided key overwrites the stored one; everything else is left
    /// untouched, and `id` is never overwritten. Validation failures win
    /// over not-found: the body is checked before the entity is located.
    pub fn update(&self, id: i64, fields: FieldMap) -> Result<E> {
        let mut doc = self.store.load()?;

        let violations = validate(E::KIND, &fields, &doc, Mode::Update);
        if !violations.is_empty() {
            return Err(TicketDeskError::validation(violations));
        }

        let index = find_index::<E>(&doc, id)?;
        let merged = merge_entity(&E::collection(&doc)[index], &fields)?;
        E::collection_mut(&mut doc)[index] = merged.clone();
        self.store.save(&doc)?;

        tracing::debug!(kind = %E::KIND, id, "updated entity");
        Ok(merged)
    }

    /// Remove the entity with the given id, returning its last state
    pub fn delete(&self, id: i64) -> Result<E> {
        let mut doc = self.store.load()?;

        let index = find_index::<E>(&doc, id)?;
        let removed = E::collection_mut(&mut doc).remove(index);
        self.store.save(&doc)?;

        tracing::debug!(kind = %E::KIND, id, "deleted entity");
        Ok(removed)
    }
}

fn find_index<E: Entity>(doc: &Document, id: i64) -> Result<usize> {
    E::collection(doc)
        .iter()
        .position(|entity| entity.id() == id)
        .ok_or(TicketDeskError::not_found(E::KIND, id))
}

/// Build a new entity from validated create fields plus the assigned id
fn build_entity<E: Entity>(mut fields: FieldMap, id: i64) -> Result<E> {
    fields.insert("id".to_string(), Value::from(id));
    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        TicketDeskError::internal(format!("validated {} fields failed to decode: {e}", E::KIND))
    })
}

/// Shallow-merge validated update fields over an existing entity
fn merge_entity<E: Entity>(current: &E, fields: &FieldMap) -> Result<E> {
    let mut value = serde_json::to_value(current)
        .map_err(|e| TicketDeskError::internal(format!("failed to encode {}: {e}", E::KIND)))?;
    let Value::Object(object) = &mut value else {
        return Err(TicketDeskError::internal(format!(
            "{} did not serialize to an object",
            E::KIND
        )));
    };
    for (key, val) in fields {
        // The schema already rejects caller-supplied ids; never merge one.
        if key != "id" {
            object.insert(key.clone(), val.clone());
        }
    }
    serde_json::from_value(value).map_err(|e| {
        TicketDeskError::internal(format!("merged {} fields failed to decode: {e}", E::KIND))
    })
}
