//! # Storefront Facade
//!
//! A single handle over all eight services, built from one config and one
//! set of collaborators.
//!
//! ```text
//! StorefrontConfig ─┐
//!                   ├──► Storefront::new ──► { converter, shipping, pages,
//! Collaborators ────┘                          orders, registration, auth,
//!                                              availability, discounts }
//! ```

use std::sync::Arc;

use storefront_core::{Money, OrderId, OrderResult};
use tracing::info;

use crate::adapters::{
    LogAnalytics, LogEmailSender, LogPaymentProcessor, RandomCodeGenerator, RateTable,
    ShippingTable, SystemClock,
};
use crate::config::StorefrontConfig;
use crate::error::WorkflowResult;
use crate::ports::{
    AnalyticsTracker, Clock, EmailSender, ExchangeRateProvider, PaymentProcessor,
    SecurityCodeGenerator, ShippingQuoteProvider,
};
use crate::services::{
    AuthenticationService, AvailabilityGate, CurrencyConverter, OrderSubmissionService,
    PageRenderer, SeasonalDiscountCalculator, ShippingQuoteResolver, UserRegistrationService,
};

// =============================================================================
// Collaborators
// =============================================================================

/// One implementation of every port.
#[derive(Clone)]
pub struct Collaborators {
    pub rates: Arc<dyn ExchangeRateProvider>,
    pub shipping: Arc<dyn ShippingQuoteProvider>,
    pub analytics: Arc<dyn AnalyticsTracker>,
    pub payments: Arc<dyn PaymentProcessor>,
    pub email: Arc<dyn EmailSender>,
    pub codes: Arc<dyn SecurityCodeGenerator>,
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    /// The in-process reference adapters, with empty rate and shipping tables.
    pub fn reference() -> Self {
        Collaborators {
            rates: Arc::new(RateTable::new()),
            shipping: Arc::new(ShippingTable::new()),
            analytics: Arc::new(LogAnalytics),
            payments: Arc::new(LogPaymentProcessor),
            email: Arc::new(LogEmailSender),
            codes: Arc::new(RandomCodeGenerator),
            clock: Arc::new(SystemClock),
        }
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// Every storefront operation behind one handle.
///
/// Holds no mutable state, so one instance can be shared across tasks.
pub struct Storefront {
    converter: CurrencyConverter,
    shipping: ShippingQuoteResolver,
    pages: PageRenderer,
    orders: OrderSubmissionService,
    registration: UserRegistrationService,
    auth: AuthenticationService,
    availability: AvailabilityGate,
    discounts: SeasonalDiscountCalculator,
}

impl Storefront {
    pub fn new(config: &StorefrontConfig, collaborators: Collaborators) -> Self {
        info!(store = %config.store.name, "Building storefront");

        Storefront {
            converter: CurrencyConverter::new(collaborators.rates),
            shipping: ShippingQuoteResolver::new(collaborators.shipping),
            pages: PageRenderer::new(collaborators.analytics, config.store.home_path.clone()),
            orders: OrderSubmissionService::new(collaborators.payments),
            registration: UserRegistrationService::new(
                collaborators.email.clone(),
                config.notifications.welcome_message.clone(),
            ),
            auth: AuthenticationService::new(collaborators.codes, collaborators.email),
            availability: AvailabilityGate::new(collaborators.clock.clone(), config.hours),
            discounts: SeasonalDiscountCalculator::new(collaborators.clock, config.promotion),
        }
    }

    pub async fn convert(&self, price: Money, currency_code: &str) -> WorkflowResult<Money> {
        self.converter.convert(price, currency_code).await
    }

    pub async fn shipping_info(&self, destination: &str) -> WorkflowResult<String> {
        self.shipping.resolve(destination).await
    }

    pub async fn render_page(&self) -> String {
        self.pages.render().await
    }

    pub async fn submit_order(&self, order_id: &OrderId, amount: Money) -> WorkflowResult<OrderResult> {
        self.orders.submit(order_id, amount).await
    }

    pub async fn sign_up(&self, email: &str) -> WorkflowResult<bool> {
        self.registration.register(email).await
    }

    pub async fn login(&self, email: &str) -> WorkflowResult<()> {
        self.auth.login(email).await
    }

    pub fn is_open(&self) -> bool {
        self.availability.is_open()
    }

    pub fn current_discount(&self) -> f64 {
        self.discounts.current_discount()
    }
}
