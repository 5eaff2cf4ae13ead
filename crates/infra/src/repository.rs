//! Product repository: domain-named operations over a [`RecordStore`].
//!
//! Holds no state of its own and performs no validation. Handlers talk to
//! this type only, so the backing store can be replaced without touching them.

use std::sync::Arc;

use stockroom_core::ProductId;
use stockroom_products::Product;

use crate::store::{InMemoryRecordStore, RecordStore};

#[derive(Clone)]
pub struct ProductRepository {
    store: Arc<dyn RecordStore<Product>>,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn RecordStore<Product>>) -> Self {
        Self { store }
    }

    /// Repository over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRecordStore::<Product>::new()))
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.store.list_all()
    }

    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.store.get(&id)
    }

    /// Assumes id uniqueness has already been checked by the caller.
    pub fn create_product(&self, product: Product) {
        self.store.create(product);
    }

    /// Replace the record stored at `id`.
    pub fn update_product(&self, id: ProductId, product: Product) {
        self.store.update(id, product);
    }

    pub fn delete_product(&self, id: ProductId) {
        self.store.delete(&id);
    }

    pub fn exists(&self, id: ProductId) -> bool {
        self.store.get(&id).is_some()
    }
}

impl core::fmt::Debug for ProductRepository {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ProductRepository")
            .field("records", &self.store.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyboard() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Keyboard".to_string(),
            price: 49.99,
            quantity: 10,
        }
    }

    #[test]
    fn exists_tracks_lifecycle() {
        let repo = ProductRepository::in_memory();
        let id = ProductId::new(1);
        assert!(!repo.exists(id));

        repo.create_product(keyboard());
        assert!(repo.exists(id));
        assert_eq!(repo.get_product(id), Some(keyboard()));

        repo.delete_product(id);
        assert!(!repo.exists(id));
        assert!(repo.list_products().is_empty());
    }

    #[test]
    fn clones_share_the_same_store() {
        let repo = ProductRepository::in_memory();
        let other = repo.clone();
        repo.create_product(keyboard());
        assert_eq!(other.list_products(), vec![keyboard()]);
    }

    #[test]
    fn independent_repositories_are_isolated() {
        let a = ProductRepository::in_memory();
        let b = ProductRepository::in_memory();
        a.create_product(keyboard());
        assert!(!b.exists(ProductId::new(1)));
    }

    #[test]
    fn update_replaces_record() {
        let repo = ProductRepository::in_memory();
        repo.create_product(keyboard());
        let replacement = Product {
            id: ProductId::new(1),
            name: "Keyboard Pro".to_string(),
            price: 59.99,
            quantity: 8,
        };
        repo.update_product(ProductId::new(1), replacement.clone());
        assert_eq!(repo.get_product(ProductId::new(1)), Some(replacement));
    }
}
