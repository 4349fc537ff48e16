//! # Domain Types
//!
//! Value objects exchanged between the workflow layer and its collaborators.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  ExchangeRate   │   │  ShippingQuote  │   │    OrderId      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  f64 multiplier │   │  cost (Money)   │   │  opaque string  │       │
//! │  │  1.5 = ×1.5     │   │  estimated_days │   │  UUID v4 default│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ChargeReceipt   │   │  OrderResult    │   │  SecurityCode   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  status string  │   │  success        │   │  opaque number  │       │
//! │  │  "success"|...  │   │  error?         │   │  Display = body │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these outlive the operation that created them.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::{CHARGE_SUCCESS, PAYMENT_ERROR};

// =============================================================================
// Exchange Rate
// =============================================================================

/// Multiplier from the base currency into a target currency.
///
/// Rates are the one place floating point is accepted; [`Money::convert`]
/// rounds the product back to whole cents.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExchangeRate(f64);

impl ExchangeRate {
    #[inline]
    pub fn new(rate: f64) -> Self {
        ExchangeRate(rate)
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Shipping Quote
// =============================================================================

/// A shipping offer for one destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingQuote {
    /// Shipping cost in the base currency.
    pub cost: Money,

    /// Estimated delivery time in days.
    pub estimated_days: u32,
}

impl ShippingQuote {
    pub fn new(cost: Money, estimated_days: u32) -> Self {
        ShippingQuote {
            cost,
            estimated_days,
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// Opaque order identifier, passed through to the payment processor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderId(String);

impl OrderId {
    /// Generates a fresh UUID v4 identifier.
    pub fn generate() -> Self {
        OrderId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        OrderId(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        OrderId(id)
    }
}

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        OrderId(id.to_string())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a payment processor reports back for a charge attempt.
///
/// Only the literal `"success"` status counts as paid; every other status
/// (`"failed"`, `"declined"`, anything unknown) is a failed charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChargeReceipt {
    pub status: String,
}

impl ChargeReceipt {
    pub fn new(status: impl Into<String>) -> Self {
        ChargeReceipt {
            status: status.into(),
        }
    }

    /// Receipt for a successful charge.
    pub fn success() -> Self {
        ChargeReceipt::new(CHARGE_SUCCESS)
    }

    pub fn is_success(&self) -> bool {
        self.status == CHARGE_SUCCESS
    }
}

/// Outcome of submitting an order.
///
/// Serializes as `{"success":true}` or
/// `{"success":false,"error":"payment_error"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl OrderResult {
    /// The charge went through.
    pub fn paid() -> Self {
        OrderResult {
            success: true,
            error: None,
        }
    }

    /// The processor reported anything other than success.
    pub fn payment_failed() -> Self {
        OrderResult {
            success: false,
            error: Some(PAYMENT_ERROR.to_string()),
        }
    }
}

// =============================================================================
// Security Code
// =============================================================================

/// One-time code produced by the security-code generator.
///
/// The `Display` form is exactly what gets emailed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SecurityCode(u32);

impl SecurityCode {
    #[inline]
    pub const fn new(code: u32) -> Self {
        SecurityCode(code)
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SecurityCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_receipt_status() {
        assert!(ChargeReceipt::success().is_success());
        assert!(ChargeReceipt::new("success").is_success());
        assert!(!ChargeReceipt::new("failed").is_success());
        assert!(!ChargeReceipt::new("SUCCESS").is_success());
        assert!(!ChargeReceipt::new("").is_success());
    }

    #[test]
    fn test_order_result_json_shape() {
        let paid = serde_json::to_string(&OrderResult::paid()).unwrap();
        assert_eq!(paid, r#"{"success":true}"#);

        let failed = serde_json::to_string(&OrderResult::payment_failed()).unwrap();
        assert_eq!(failed, r#"{"success":false,"error":"payment_error"}"#);
    }

    #[test]
    fn test_order_id_conversions() {
        assert_eq!(OrderId::from(123u64).as_str(), "123");
        assert_eq!(OrderId::from("ord-1").to_string(), "ord-1");

        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_security_code_display() {
        let code = SecurityCode::new(482_913);
        assert_eq!(code.to_string(), "482913");
        assert_eq!(code.value(), 482_913);
    }

    #[test]
    fn test_shipping_quote() {
        let quote = ShippingQuote::new(Money::from_dollars(20), 2);
        assert_eq!(quote.cost.cents(), 2000);
        assert_eq!(quote.estimated_days, 2);
    }

    #[test]
    fn test_exchange_rate() {
        assert_eq!(ExchangeRate::new(0.92).value(), 0.92);
        assert_eq!(ExchangeRate::new(1.5).to_string(), "1.5");
    }
}
