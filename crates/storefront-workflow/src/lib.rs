//! # storefront-workflow: Storefront Workflows
//!
//! The decision layer of the storefront: each operation validates its input,
//! calls at most the collaborators it needs, and maps their answers to a
//! result.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Workflow Architecture                            │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                     Storefront (facade)                          │  │
//! │  │                                                                  │  │
//! │  │  Built from StorefrontConfig + Collaborators                     │  │
//! │  └────────────────────────────┬─────────────────────────────────────┘  │
//! │                               │                                         │
//! │         ┌─────────────────────┼─────────────────────┐                  │
//! │         ▼                     ▼                     ▼                   │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────┐    │
//! │  │ Async services │  │ Clock services │  │  Ports                 │    │
//! │  │                │  │                │  │                        │    │
//! │  │ convert        │  │ is_open        │  │ ExchangeRateProvider   │    │
//! │  │ resolve        │  │ current_       │  │ ShippingQuoteProvider  │    │
//! │  │ render, submit │  │   discount     │  │ AnalyticsTracker, ...  │    │
//! │  │ register,login │  │                │  │ Clock                  │    │
//! │  └────────────────┘  └────────────────┘  └────────────────────────┘    │
//! │                                                                         │
//! │  FAILURE MAPPING:                                                      │
//! │  • Bad email → Ok(false), nothing sent                                 │
//! │  • No shipping quote → "Shipping unavailable to ..."                   │
//! │  • Declined charge → {success: false, error: "payment_error"}          │
//! │  • Collaborator fault → Err, unchanged                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`config`] - Business hours, holiday promotion, notification text
//! - [`error`] - Collaborator and workflow errors
//! - [`ports`] - Traits for every external collaborator
//! - [`services`] - One service per operation
//! - [`storefront`] - Facade over all services
//! - [`adapters`] - In-process reference implementations of the ports
//! - `testing` - Recording doubles for tests (`testing` feature)

pub mod adapters;
pub mod config;
pub mod error;
pub mod ports;
pub mod services;
pub mod storefront;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{
    HoursSettings, NotificationSettings, PromotionSettings, StoreSettings, StorefrontConfig,
};
pub use error::{CollaboratorError, CollaboratorResult, WorkflowError, WorkflowResult};
pub use services::{
    AuthenticationService, AvailabilityGate, CurrencyConverter, OrderSubmissionService,
    PageRenderer, SeasonalDiscountCalculator, ShippingQuoteResolver, UserRegistrationService,
};
pub use storefront::{Collaborators, Storefront};
