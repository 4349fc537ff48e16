//! # Coupons
//!
//! The published coupon catalogue and discount-code pricing.
//!
//! Discounts are stored in basis points (2000 = 20%) so applying them stays
//! in integer math via [`Money::apply_percentage_discount`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::validation::validate_price;

/// A promotional coupon shown to shoppers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coupon {
    pub code: String,
    pub discount_bps: u32,
}

impl Coupon {
    pub fn new(code: impl Into<String>, discount_bps: u32) -> Self {
        Coupon {
            code: code.into(),
            discount_bps,
        }
    }

    /// Discount as a fraction (0.2 = 20% off).
    pub fn discount(&self) -> f64 {
        self.discount_bps as f64 / 10_000.0
    }
}

/// Returns the active coupons.
pub fn coupons() -> Vec<Coupon> {
    vec![
        Coupon::new("SAVE20NOW", 2000),
        Coupon::new("DISCOUNT50OFF", 5000),
    ]
}

/// Discount in basis points for a checkout discount code.
///
/// Unknown codes carry no discount.
pub fn discount_for_code(code: &str) -> u32 {
    match code {
        "SAVE10" => 1000,
        "SAVE20" => 2000,
        _ => 0,
    }
}

/// Prices `price` after applying a checkout discount code.
///
/// ## Rules
/// - Negative prices are rejected by [`validate_price`]
/// - `SAVE10` takes 10% off, `SAVE20` takes 20% off
/// - Any other code leaves the price unchanged
///
/// ```rust
/// use storefront_core::coupons::calculate_discount;
/// use storefront_core::money::Money;
///
/// let price = Money::from_dollars(10);
/// assert_eq!(calculate_discount(price, "SAVE10").unwrap(), Money::from_dollars(9));
/// assert_eq!(calculate_discount(price, "invalid").unwrap(), price);
/// ```
pub fn calculate_discount(price: Money, code: &str) -> CoreResult<Money> {
    validate_price(price)?;

    Ok(price.apply_percentage_discount(discount_for_code(code)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_coupons_not_empty() {
        assert!(!coupons().is_empty());
    }

    #[test]
    fn test_coupons_have_codes() {
        for coupon in coupons() {
            assert!(!coupon.code.is_empty());
        }
    }

    #[test]
    fn test_coupon_discounts_are_fractions() {
        for coupon in coupons() {
            let discount = coupon.discount();
            assert!(discount > 0.0, "{} has no discount", coupon.code);
            assert!(discount < 1.0, "{} is free", coupon.code);
        }
    }

    #[test]
    fn test_calculate_discount_known_codes() {
        let price = Money::from_dollars(10);
        assert_eq!(calculate_discount(price, "SAVE10").unwrap(), Money::from_dollars(9));
        assert_eq!(calculate_discount(price, "SAVE20").unwrap(), Money::from_dollars(8));
    }

    #[test]
    fn test_calculate_discount_unknown_code_keeps_price() {
        let price = Money::from_dollars(10);
        assert_eq!(calculate_discount(price, "invalid").unwrap(), price);
        assert_eq!(calculate_discount(price, "").unwrap(), price);
    }

    #[test]
    fn test_calculate_discount_rejects_negative_price() {
        let err = calculate_discount(Money::from_dollars(-10), "SAVE10").unwrap_err();
        match err {
            CoreError::Validation(ref inner) => assert_eq!(inner.field(), "price"),
            other => panic!("expected a price validation error, got {other:?}"),
        }
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_calculate_discount_free_item() {
        assert_eq!(calculate_discount(Money::zero(), "SAVE20").unwrap(), Money::zero());
    }
}
