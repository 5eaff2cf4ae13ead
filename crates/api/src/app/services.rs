//! Request handling core: validation and outcome mapping for every product
//! operation, independent of the HTTP framework.
//!
//! Holds no state beyond the repository handle; every call is a stateless
//! pass-through to the store.

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_infra::ProductRepository;
use stockroom_products::{BalanceSummary, NewProduct, Product, ProductChanges};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        Self { repo }
    }

    pub fn list(&self) -> Vec<Product> {
        self.repo.list_products()
    }

    /// Create a product under a caller-chosen id.
    ///
    /// Fails with `Validation` for bad fields, then `Conflict` if the id is
    /// taken. The existence check and the write are separate store calls.
    pub fn create(&self, payload: NewProduct) -> DomainResult<Product> {
        payload
            .validate()
            .inspect_err(|e| debug!(product_id = %payload.id, "create rejected: {e}"))?;

        if self.repo.exists(payload.id) {
            debug!(product_id = %payload.id, "create rejected: duplicate id");
            return Err(DomainError::conflict("id must be unique"));
        }

        let product = payload.into_product();
        self.repo.create_product(product.clone());
        info!(product_id = %product.id, "product created");
        Ok(product)
    }

    pub fn get(&self, id: ProductId) -> DomainResult<Product> {
        self.repo.get_product(id).ok_or_else(DomainError::not_found)
    }

    /// Replace every field except the id.
    pub fn update(&self, id: ProductId, changes: ProductChanges) -> DomainResult<Product> {
        changes
            .validate()
            .inspect_err(|e| debug!(product_id = %id, "update rejected: {e}"))?;

        if !self.repo.exists(id) {
            debug!(product_id = %id, "update rejected: not found");
            return Err(DomainError::not_found());
        }

        let product = changes.into_product(id);
        self.repo.update_product(id, product.clone());
        info!(product_id = %id, "product updated");
        Ok(product)
    }

    pub fn delete(&self, id: ProductId) -> DomainResult<()> {
        if !self.repo.exists(id) {
            debug!(product_id = %id, "delete rejected: not found");
            return Err(DomainError::not_found());
        }

        self.repo.delete_product(id);
        info!(product_id = %id, "product deleted");
        Ok(())
    }

    pub fn balance(&self) -> BalanceSummary {
        BalanceSummary::from_products(&self.repo.list_products())
    }
}
