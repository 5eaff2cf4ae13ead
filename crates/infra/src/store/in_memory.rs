use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::Entity;

use super::RecordStore;

/// In-memory record store for the service process and tests.
///
/// A single `RwLock` guards the whole table, so each operation is one
/// critical section. Records are cloned on read.
#[derive(Debug)]
pub struct InMemoryRecordStore<V: Entity> {
    inner: RwLock<Table<V>>,
}

#[derive(Debug)]
struct Table<V: Entity> {
    rows: HashMap<V::Id, V>,
    // First-creation order of the keys in `rows`.
    order: Vec<V::Id>,
}

impl<V: Entity> Table<V> {
    fn put(&mut self, id: V::Id, record: V) {
        if self.rows.insert(id, record).is_none() {
            self.order.push(id);
        }
    }

    fn remove(&mut self, id: &V::Id) {
        if self.rows.remove(id).is_some() {
            self.order.retain(|k| k != id);
        }
    }
}

impl<V: Entity> InMemoryRecordStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                rows: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }

    // Every mutation is a single insert/remove, so a table behind a poisoned
    // lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Table<V>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Table<V>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Entity> Default for InMemoryRecordStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RecordStore<V> for InMemoryRecordStore<V>
where
    V: Entity + Clone + Send + Sync,
    V::Id: Send + Sync,
{
    fn list_all(&self) -> Vec<V> {
        let table = self.read();
        table
            .order
            .iter()
            .filter_map(|id| table.rows.get(id).cloned())
            .collect()
    }

    fn get(&self, id: &V::Id) -> Option<V> {
        self.read().rows.get(id).cloned()
    }

    fn create(&self, record: V) {
        let id = *record.id();
        self.write().put(id, record);
    }

    fn update(&self, id: V::Id, record: V) {
        self.write().put(id, record);
    }

    fn delete(&self, id: &V::Id) {
        self.write().remove(id);
    }

    fn len(&self) -> usize {
        self.read().rows.len()
    }
}
