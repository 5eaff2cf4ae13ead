//! Field constraints for product payloads.
//!
//! These run at the boundary before anything reaches the store; the store
//! itself never validates.

use stockroom_core::{DomainError, DomainResult};

/// Characters stripped before the emptiness check: Unicode whitespace plus the
/// ASCII information separators (`\x1c`..=`\x1f`).
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

pub fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim_matches(is_blank).is_empty() {
        return Err(DomainError::validation("name must be non-empty"));
    }
    Ok(())
}

/// Price must be a finite number, `>= 0`.
pub fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be >= 0"));
    }
    Ok(())
}

pub fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation("quantity must be >= 0"));
    }
    Ok(())
}

/// Validate all fields of a create/update payload.
///
/// Numeric constraints are checked first, then the name. The first
/// violation is returned.
pub fn validate_fields(name: &str, price: f64, quantity: i64) -> DomainResult<()> {
    validate_price(price)?;
    validate_quantity(quantity)?;
    validate_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_blank_names_are_rejected() {
        for name in ["", " ", "   ", "\t\n", "\u{1f}", " \u{1c}\u{1d}\u{1e} "] {
            assert_eq!(
                validate_name(name),
                Err(DomainError::validation("name must be non-empty")),
                "{name:?}"
            );
        }
        assert!(validate_name(" a ").is_ok());
        assert!(validate_name("\u{1f}a").is_ok());
    }

    #[test]
    fn negative_or_non_finite_price_is_rejected() {
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(49.99).is_ok());
    }

    #[test]
    fn negative_quantity_is_rejected() {
        assert_eq!(
            validate_quantity(-1),
            Err(DomainError::validation("quantity must be >= 0"))
        );
        assert!(validate_quantity(0).is_ok());
    }

    #[test]
    fn numeric_constraints_are_reported_before_name() {
        assert_eq!(
            validate_fields("  ", -1.0, 1),
            Err(DomainError::validation("price must be >= 0"))
        );
        assert_eq!(
            validate_fields("  ", 1.0, -1),
            Err(DomainError::validation("quantity must be >= 0"))
        );
        assert_eq!(
            validate_fields("  ", 1.0, 1),
            Err(DomainError::validation("name must be non-empty"))
        );
    }

    proptest! {
        #[test]
        fn valid_fields_always_pass(
            name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
            price in 0.0f64..1_000_000.0,
            quantity in 0i64..1_000_000,
        ) {
            prop_assert!(validate_fields(&name, price, quantity).is_ok());
        }

        #[test]
        fn whitespace_only_names_always_fail(name in "[ \t\r\n]{0,20}") {
            prop_assert!(validate_name(&name).is_err());
        }
    }
}
