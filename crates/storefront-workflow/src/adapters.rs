//! # Reference Adapters
//!
//! Self-contained implementations of the collaborator ports. They need no
//! network and are what the demo binary wires up; production hosts replace
//! them with real integrations.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use storefront_core::{ChargeReceipt, ExchangeRate, Money, OrderId, SecurityCode, ShippingQuote};
use tracing::{info, warn};

use crate::error::{CollaboratorError, CollaboratorResult};
use crate::ports::{
    AnalyticsTracker, Clock, EmailSender, ExchangeRateProvider, PaymentProcessor,
    SecurityCodeGenerator, ShippingQuoteProvider,
};

// =============================================================================
// Clock
// =============================================================================

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}

// =============================================================================
// Security Codes
// =============================================================================

/// Issues random six-digit login codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

#[async_trait::async_trait]
impl SecurityCodeGenerator for RandomCodeGenerator {
    async fn generate(&self) -> CollaboratorResult<SecurityCode> {
        Ok(SecurityCode::new(rand::random_range(100_000..1_000_000)))
    }
}

// =============================================================================
// Exchange Rates
// =============================================================================

/// Fixed table of exchange rates keyed by ISO currency code.
///
/// Lookups are case-insensitive. Unknown codes are rejected.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, ExchangeRate>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, currency_code: &str, rate: f64) -> Self {
        self.rates
            .insert(currency_code.to_uppercase(), ExchangeRate::new(rate));
        self
    }
}

#[async_trait::async_trait]
impl ExchangeRateProvider for RateTable {
    async fn get_rate(&self, currency_code: &str) -> CollaboratorResult<ExchangeRate> {
        self.rates
            .get(&currency_code.to_uppercase())
            .copied()
            .ok_or_else(|| {
                CollaboratorError::rejected(
                    "exchange-rate",
                    format!("unknown currency {}", currency_code),
                )
            })
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Fixed table of shipping quotes keyed by destination.
#[derive(Debug, Clone, Default)]
pub struct ShippingTable {
    quotes: HashMap<String, ShippingQuote>,
}

impl ShippingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, destination: &str, quote: ShippingQuote) -> Self {
        self.quotes.insert(destination.to_string(), quote);
        self
    }
}

#[async_trait::async_trait]
impl ShippingQuoteProvider for ShippingTable {
    async fn get_quote(&self, destination: &str) -> CollaboratorResult<Option<ShippingQuote>> {
        Ok(self.quotes.get(destination).copied())
    }
}

// =============================================================================
// Log-only Senders
// =============================================================================

/// Writes page views to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnalytics;

#[async_trait::async_trait]
impl AnalyticsTracker for LogAnalytics {
    async fn track_page_view(&self, path: &str) -> CollaboratorResult<()> {
        info!(path = %path, "Page view");
        Ok(())
    }
}

/// Logs outgoing emails instead of delivering them.
///
/// Only the length of the body is logged; bodies may carry login codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEmailSender;

#[async_trait::async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, recipient: &str, body: &str) -> CollaboratorResult<()> {
        info!(recipient = %recipient, body_len = body.len(), "Email sent");
        Ok(())
    }
}

/// Approves every positive charge and declines the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPaymentProcessor;

#[async_trait::async_trait]
impl PaymentProcessor for LogPaymentProcessor {
    async fn charge(&self, order_id: &OrderId, amount: Money) -> CollaboratorResult<ChargeReceipt> {
        if amount.is_positive() {
            info!(order_id = %order_id, amount = %amount, "Charge approved");
            Ok(ChargeReceipt::success())
        } else {
            warn!(order_id = %order_id, amount = %amount, "Charge declined");
            Ok(ChargeReceipt::new("declined"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rate_table_lookup() {
        let table = RateTable::new().with_rate("eur", 0.9);

        assert_eq!(table.get_rate("EUR").await.unwrap(), ExchangeRate::new(0.9));
        assert_eq!(table.get_rate("eur").await.unwrap(), ExchangeRate::new(0.9));

        let err = table.get_rate("XYZ").await.unwrap_err();
        assert!(matches!(err, CollaboratorError::Rejected { .. }));
        assert_eq!(err.collaborator(), "exchange-rate");
    }

    #[tokio::test]
    async fn test_shipping_table_lookup() {
        let quote = ShippingQuote::new(Money::from_dollars(10), 5);
        let table = ShippingTable::new().with_quote("Germany", quote);

        assert_eq!(table.get_quote("Germany").await.unwrap(), Some(quote));
        assert_eq!(table.get_quote("Atlantis").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_random_codes_are_six_digits() {
        let generator = RandomCodeGenerator;
        for _ in 0..100 {
            let code = generator.generate().await.unwrap();
            assert!((100_000..1_000_000).contains(&code.value()));
            assert_eq!(code.to_string().len(), 6);
        }
    }

    #[tokio::test]
    async fn test_log_payment_processor() {
        let processor = LogPaymentProcessor;
        let order = OrderId::from(1u64);

        assert!(processor
            .charge(&order, Money::from_dollars(100))
            .await
            .unwrap()
            .is_success());
        assert!(!processor
            .charge(&order, Money::zero())
            .await
            .unwrap()
            .is_success());
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        assert!(clock.now() >= first);
    }
}
