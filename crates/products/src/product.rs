use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Entity, ProductId};

use crate::validation::validate_fields;

/// A stored product record.
///
/// `name` is kept exactly as submitted; trimming is only used to decide
/// whether it is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price, `>= 0`.
    pub price: f64,
    /// Units on hand, `>= 0`.
    pub quantity: i64,
}

impl Product {
    /// Value of this line of inventory (`price × quantity`).
    pub fn line_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for creating a product with an explicit, caller-chosen id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl NewProduct {
    /// Check field constraints (price, quantity, then name).
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, self.price, self.quantity)
    }

    pub fn into_product(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Input for replacing a product; the id comes from the request target.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductChanges {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductChanges {
    pub fn validate(&self) -> DomainResult<()> {
        validate_fields(&self.name, self.price, self.quantity)
    }

    /// Build the full replacement record. Nothing is carried over from the
    /// previous version.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::DomainError;

    fn keyboard() -> NewProduct {
        NewProduct {
            id: ProductId::new(1),
            name: "Keyboard".to_string(),
            price: 49.99,
            quantity: 10,
        }
    }

    #[test]
    fn new_product_keeps_every_field() {
        let product = keyboard().into_product();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, 49.99);
        assert_eq!(product.quantity, 10);
        assert_eq!(product.id(), &ProductId::new(1));
    }

    #[test]
    fn name_is_stored_untrimmed() {
        let mut payload = keyboard();
        payload.name = "  Keyboard  ".to_string();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.into_product().name, "  Keyboard  ");
    }

    #[test]
    fn changes_take_id_from_target() {
        let changes = ProductChanges {
            name: "Keyboard Pro".to_string(),
            price: 59.99,
            quantity: 8,
        };
        let product = changes.into_product(ProductId::new(1));
        assert_eq!(
            product,
            Product {
                id: ProductId::new(1),
                name: "Keyboard Pro".to_string(),
                price: 59.99,
                quantity: 8,
            }
        );
    }

    #[test]
    fn whitespace_name_fails_validation() {
        let mut payload = keyboard();
        payload.name = "   ".to_string();
        assert_eq!(
            payload.validate(),
            Err(DomainError::validation("name must be non-empty"))
        );
    }

    #[test]
    fn json_shape_matches_wire_format() {
        let product = keyboard().into_product();
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Keyboard", "price": 49.99, "quantity": 10})
        );
    }

    #[test]
    fn line_value_multiplies_price_by_quantity() {
        let product = keyboard().into_product();
        assert!((product.line_value() - 499.9).abs() < 1e-9);
    }
}
