use serde::{Deserialize, Serialize};

use stockroom_core::ProductId;
use stockroom_products::{NewProduct, ProductChanges};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(body: CreateProductRequest) -> Self {
        NewProduct {
            id: ProductId::new(body.id),
            name: body.name,
            price: body.price,
            quantity: body.quantity,
        }
    }
}

/// Update body; the id is taken from the path.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl From<UpdateProductRequest> for ProductChanges {
    fn from(body: UpdateProductRequest) -> Self {
        ProductChanges {
            name: body.name,
            price: body.price,
            quantity: body.quantity,
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { message: "Healthy" }
    }
}
