//! Price conversion through the exchange-rate provider.

use std::sync::Arc;

use storefront_core::Money;
use tracing::debug;

use crate::error::WorkflowResult;
use crate::ports::ExchangeRateProvider;

/// Converts base-currency prices into a shopper's currency.
pub struct CurrencyConverter {
    rates: Arc<dyn ExchangeRateProvider>,
}

impl CurrencyConverter {
    pub fn new(rates: Arc<dyn ExchangeRateProvider>) -> Self {
        CurrencyConverter { rates }
    }

    /// Returns `price` multiplied by the current rate for `currency_code`.
    ///
    /// The code is passed to the provider as-is. A provider fault is returned
    /// unchanged.
    pub async fn convert(&self, price: Money, currency_code: &str) -> WorkflowResult<Money> {
        debug!(price = %price, currency = %currency_code, "Converting price");

        let rate = self.rates.get_rate(currency_code).await?;
        let converted = price.convert(rate);

        debug!(rate = %rate, converted = %converted, "Price converted");
        Ok(converted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CollaboratorError, WorkflowError};
    use crate::testing::StubRates;

    #[tokio::test]
    async fn test_convert_multiplies_by_rate() {
        let rates = Arc::new(StubRates::returning(1.5));
        let converter = CurrencyConverter::new(rates.clone());

        let converted = converter
            .convert(Money::from_dollars(10), "AUD")
            .await
            .unwrap();

        assert_eq!(converted, Money::from_dollars(15));
        assert_eq!(rates.requested().await, vec!["AUD".to_string()]);
    }

    #[tokio::test]
    async fn test_convert_rounds_to_cents() {
        let converter = CurrencyConverter::new(Arc::new(StubRates::returning(0.5)));
        let converted = converter
            .convert(Money::from_cents(333), "EUR")
            .await
            .unwrap();
        assert_eq!(converted.cents(), 167);
    }

    #[tokio::test]
    async fn test_currency_code_is_passed_through() {
        let rates = Arc::new(StubRates::returning(1.0));
        let converter = CurrencyConverter::new(rates.clone());

        converter.convert(Money::zero(), "not-a-code").await.unwrap();

        assert_eq!(rates.requested().await, vec!["not-a-code".to_string()]);
    }

    #[tokio::test]
    async fn test_provider_fault_propagates() {
        let fault = CollaboratorError::rejected("exchange-rate", "unknown currency XYZ");
        let converter = CurrencyConverter::new(Arc::new(StubRates::failing(fault.clone())));

        let err = converter
            .convert(Money::from_dollars(10), "XYZ")
            .await
            .unwrap_err();

        assert!(matches!(err, WorkflowError::Collaborator(ref e) if *e == fault));
    }
}
