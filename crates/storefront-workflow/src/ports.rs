//! # Collaborator Ports
//!
//! Every external service the workflows talk to sits behind one of these
//! traits. Services hold them as `Arc<dyn Port>` so hosts can plug in real
//! integrations while tests plug in the doubles from [`crate::testing`].
//!
//! ```text
//! ┌──────────────────────┐        ┌──────────────────────────┐
//! │  CurrencyConverter   │───────►│  ExchangeRateProvider    │
//! │  ShippingResolver    │───────►│  ShippingQuoteProvider   │
//! │  PageRenderer        │───────►│  AnalyticsTracker        │
//! │  OrderSubmission     │───────►│  PaymentProcessor        │
//! │  UserRegistration    │───────►│  EmailSender             │
//! │  Authentication      │───────►│  SecurityCodeGenerator   │
//! │                      │───────►│  EmailSender             │
//! │  AvailabilityGate    │───────►│  Clock                   │
//! │  SeasonalDiscount    │───────►│  Clock                   │
//! └──────────────────────┘        └──────────────────────────┘
//! ```

use chrono::NaiveDateTime;
use storefront_core::{ChargeReceipt, ExchangeRate, Money, OrderId, SecurityCode, ShippingQuote};

use crate::error::CollaboratorResult;

/// Supplies the rate for turning a base-currency amount into `currency_code`.
#[async_trait::async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    async fn get_rate(&self, currency_code: &str) -> CollaboratorResult<ExchangeRate>;
}

/// Quotes shipping to a destination.
#[async_trait::async_trait]
pub trait ShippingQuoteProvider: Send + Sync {
    /// `Ok(None)` means the destination is not served.
    async fn get_quote(&self, destination: &str) -> CollaboratorResult<Option<ShippingQuote>>;
}

/// Records page views.
#[async_trait::async_trait]
pub trait AnalyticsTracker: Send + Sync {
    async fn track_page_view(&self, path: &str) -> CollaboratorResult<()>;
}

/// Charges an order.
#[async_trait::async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// A receipt whose status is anything but `"success"` is a declined charge.
    async fn charge(&self, order_id: &OrderId, amount: Money) -> CollaboratorResult<ChargeReceipt>;
}

/// Delivers an email.
#[async_trait::async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, recipient: &str, body: &str) -> CollaboratorResult<()>;
}

/// Issues one-time login codes.
#[async_trait::async_trait]
pub trait SecurityCodeGenerator: Send + Sync {
    async fn generate(&self) -> CollaboratorResult<SecurityCode>;
}

/// Wall-clock time in the store's local timezone.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
