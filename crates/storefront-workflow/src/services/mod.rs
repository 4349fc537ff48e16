//! # Workflow Services
//!
//! One service per storefront operation. Services are independent: each holds
//! only the ports (and config) it needs, and none calls another.
//!
//! | Service | Operation | Ports |
//! |---|---|---|
//! | [`CurrencyConverter`] | `convert` | exchange rates |
//! | [`ShippingQuoteResolver`] | `resolve` | shipping quotes |
//! | [`PageRenderer`] | `render` | analytics |
//! | [`OrderSubmissionService`] | `submit` | payments |
//! | [`UserRegistrationService`] | `register` | email |
//! | [`AuthenticationService`] | `login` | security codes, email |
//! | [`AvailabilityGate`] | `is_open` | clock |
//! | [`SeasonalDiscountCalculator`] | `current_discount` | clock |

mod auth;
mod availability;
mod currency;
mod discount;
mod order;
mod page;
mod registration;
mod shipping;

pub use auth::AuthenticationService;
pub use availability::AvailabilityGate;
pub use currency::CurrencyConverter;
pub use discount::SeasonalDiscountCalculator;
pub use order::OrderSubmissionService;
pub use page::{PageRenderer, PAGE_CONTENT};
pub use registration::UserRegistrationService;
pub use shipping::ShippingQuoteResolver;
