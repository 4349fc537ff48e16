//! Shipping quote messages.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::WorkflowResult;
use crate::ports::ShippingQuoteProvider;

/// Turns a shipping quote into a shopper-facing message.
pub struct ShippingQuoteResolver {
    quotes: Arc<dyn ShippingQuoteProvider>,
}

impl ShippingQuoteResolver {
    pub fn new(quotes: Arc<dyn ShippingQuoteProvider>) -> Self {
        ShippingQuoteResolver { quotes }
    }

    /// Describes shipping to `destination`.
    ///
    /// ## Messages
    /// - quote found: `Shipping cost: $20.00 (2 days)`
    /// - destination not served: `Shipping unavailable to Atlantis`
    pub async fn resolve(&self, destination: &str) -> WorkflowResult<String> {
        debug!(destination = %destination, "Resolving shipping quote");

        match self.quotes.get_quote(destination).await? {
            Some(quote) => {
                debug!(
                    destination = %destination,
                    cost = %quote.cost,
                    days = quote.estimated_days,
                    "Shipping quoted"
                );
                Ok(format!(
                    "Shipping cost: {} ({} days)",
                    quote.cost, quote.estimated_days
                ))
            }
            None => {
                info!(destination = %destination, "No shipping to destination");
                Ok(format!("Shipping unavailable to {}", destination))
            }
        }
    }
}
