//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate holds every storefront rule that can be expressed without
//! touching the outside world. The workflow layer (`storefront-workflow`)
//! builds on these types and adds the collaborator calls.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Workflow Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host program (apps/storefront-demo)          │   │
//! │  │         wires real or in-memory collaborators into services     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront-workflow                          │   │
//! │  │    convert, resolve, render, submit, register, login, ...       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ storefront-core (THIS CRATE) ★                  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  coupons  │  │ validation│  │   │
//! │  │   │ OrderId   │  │   Money   │  │  Coupon   │  │   email   │  │   │
//! │  │   │ Quote     │  │ Exchange  │  │ discounts │  │  username │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Value objects exchanged with collaborators (quotes, orders, codes)
//! - [`money`] - Money type with integer arithmetic and rate conversion
//! - [`coupons`] - Coupon catalogue and discount-code pricing
//! - [`validation`] - Email, username, price and user-input rules
//! - [`stack`] - Generic LIFO container
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::types::ExchangeRate;
//!
//! let price = Money::from_cents(1000); // $10.00
//! let converted = price.convert(ExchangeRate::new(1.5));
//!
//! assert_eq!(converted.cents(), 1500);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coupons;
pub mod error;
pub mod money;
pub mod stack;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError, ValidationErrors};
pub use money::Money;
pub use stack::Stack;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Error tag reported when a charge does not come back as `"success"`.
pub const PAYMENT_ERROR: &str = "payment_error";

/// Status string a payment processor uses for a successful charge.
pub const CHARGE_SUCCESS: &str = "success";
