//! Products domain module.
//!
//! This crate contains the product record and its business rules (field
//! validation, inventory balance), implemented purely as deterministic domain
//! logic (no IO, no HTTP, no storage).

pub mod balance;
pub mod product;
pub mod validation;

pub use balance::{total_balance, BalanceSummary};
pub use product::{NewProduct, Product, ProductChanges};
pub use validation::{validate_fields, validate_name, validate_price, validate_quantity};
