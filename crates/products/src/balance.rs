//! Inventory balance aggregate.
//!
//! Sums `price × quantity` over every stored product. Records that cannot
//! contribute a meaningful value are skipped instead of failing the whole
//! computation.

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Response payload for the balance aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub total_balance: f64,
}

impl BalanceSummary {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        Self {
            total_balance: total_balance(products),
        }
    }
}

/// Total inventory value. `0.0` for an empty input.
///
/// Only records with a non-finite or negative price, or a negative quantity,
/// are skipped. A total that overflows saturates to `f64::MAX`, so the result
/// is always a finite, non-negative number.
pub fn total_balance<'a>(products: impl IntoIterator<Item = &'a Product>) -> f64 {
    let total = products
        .into_iter()
        .filter_map(|p| {
            if !p.price.is_finite() || p.price < 0.0 || p.quantity < 0 {
                tracing::warn!(product_id = %p.id, "skipping malformed product in balance");
                return None;
            }
            Some(p.line_value())
        })
        .fold(0.0, |acc, value| acc + value);

    if total.is_finite() {
        total
    } else {
        tracing::warn!("inventory balance overflowed; saturating");
        f64::MAX
    }
}
