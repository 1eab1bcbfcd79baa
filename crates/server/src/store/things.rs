//! The Thing record store.
//!
//! An owned, lock-guarded collection with id-based lookup and a
//! monotonic id generator. Stands in for a real database; the seeded
//! sample records make the server usable out of the box.

use std::sync::{Mutex, MutexGuard};

use thing_server_core::ThingId;

use crate::models::{Thing, ThingDraft};
use crate::store::StoreError;

/// Guarded state: the collection plus the id counter.
struct Inner {
    things: Vec<Thing>,
    /// Next id to assign. Strictly increasing, never reused.
    next_id: u64,
}

/// In-memory store of Thing records.
///
/// All operations take the internal lock for the full
/// validate-then-mutate sequence, so lookups and mutations never
/// interleave between callers.
pub struct ThingStore {
    inner: Mutex<Inner>,
}

impl ThingStore {
    /// Create a store seeded with the fixed sample records (ids 1-3).
    ///
    /// The id counter starts above the seeded records.
    #[must_use]
    pub fn seeded() -> Self {
        let things = vec![
            Thing::new(ThingId::new(1), "foo".into(), "A foo thing".into()),
            Thing::new(ThingId::new(2), "bar".into(), "A bar thing".into()),
            Thing::new(ThingId::new(3), "foo".into(), "A foo thing".into()),
        ];

        Self {
            inner: Mutex::new(Inner { things, next_id: 4 }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        // A poisoned lock means a panic mid-mutation; the collection can
        // no longer be trusted.
        self.inner.lock().map_err(|_| StoreError::Internal)
    }

    /// Return a snapshot of the full collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Internal` only if the store lock is poisoned.
    pub fn list(&self) -> Result<Vec<Thing>, StoreError> {
        Ok(self.lock()?.things.clone())
    }

    /// Look up a record by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has the given id.
    pub fn get(&self, id: ThingId) -> Result<Thing, StoreError> {
        self.lock()?
            .things
            .iter()
            .find(|thing| thing.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Insert a new record, assigning a fresh id.
    ///
    /// The id is drawn before validation, so a rejected draft still
    /// consumes a counter value. Ids stay strictly increasing either
    /// way; they just get sparser when callers submit invalid drafts.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the draft fails validation,
    /// or `StoreError::Internal` if the post-insert check fails.
    pub fn create(&self, draft: ThingDraft) -> Result<Thing, StoreError> {
        let mut inner = self.lock()?;
        let id = ThingId::new(inner.next_id);
        inner.next_id += 1;

        let (kind, description) = draft.into_valid_parts().ok_or(StoreError::InvalidInput)?;

        let thing = Thing::new(id, kind, description);
        inner.things.push(thing.clone());

        // Confirm the insert landed before reporting success.
        if inner.things.iter().any(|stored| stored.id == id) {
            Ok(thing)
        } else {
            Err(StoreError::Internal)
        }
    }

    /// Validate a candidate record and replace the stored record with
    /// the same id.
    ///
    /// Validation is checked before existence, so an invalid draft for a
    /// missing id reports `InvalidInput`, not `NotFound`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the draft fails validation,
    /// `StoreError::NotFound` if no record has the given id, or
    /// `StoreError::Internal` if the post-replace check fails.
    pub fn update(&self, id: ThingId, draft: ThingDraft) -> Result<Thing, StoreError> {
        let (kind, description) = draft.into_valid_parts().ok_or(StoreError::InvalidInput)?;
        let updated = Thing::new(id, kind, description);

        let mut inner = self.lock()?;
        let index = inner
            .things
            .iter()
            .position(|thing| thing.id == id)
            .ok_or(StoreError::NotFound)?;

        inner.things[index] = updated.clone();

        if inner.things.contains(&updated) {
            Ok(updated)
        } else {
            Err(StoreError::Internal)
        }
    }

    /// Remove a record by id, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has the given id, or
    /// `StoreError::Internal` if the post-remove check fails.
    pub fn remove(&self, id: ThingId) -> Result<Thing, StoreError> {
        let mut inner = self.lock()?;
        let index = inner
            .things
            .iter()
            .position(|thing| thing.id == id)
            .ok_or(StoreError::NotFound)?;

        let removed = inner.things.remove(index);

        if inner.things.iter().any(|stored| stored.id == id) {
            Err(StoreError::Internal)
        } else {
            Ok(removed)
        }
    }
}
