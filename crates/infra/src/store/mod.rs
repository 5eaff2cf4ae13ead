//! Record storage abstractions.
//!
//! The store is the sole owner of record state. It performs no validation
//! and no uniqueness checks; callers decide whether a write is allowed.

pub mod in_memory;

pub use in_memory::InMemoryRecordStore;

use stockroom_core::Entity;

/// Key/value store of entities keyed by their identifier.
///
/// Every operation is atomic with respect to every other operation on the
/// same store: concurrent callers observe a single serialized order.
pub trait RecordStore<V: Entity>: Send + Sync {
    /// Every current record, in first-creation order.
    fn list_all(&self) -> Vec<V>;

    fn get(&self, id: &V::Id) -> Option<V>;

    /// Insert at `record.id()`, overwriting any existing record (upsert).
    fn create(&self, record: V);

    /// Overwrite at `id` unconditionally.
    fn update(&self, id: V::Id, record: V);

    /// Remove `id` if present; a no-op otherwise.
    fn delete(&self, id: &V::Id);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
