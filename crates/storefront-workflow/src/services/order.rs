//! Order payment.

use std::sync::Arc;

use storefront_core::{Money, OrderId, OrderResult};
use tracing::{debug, info, warn};

use crate::error::WorkflowResult;
use crate::ports::PaymentProcessor;

/// Charges orders and classifies the outcome.
pub struct OrderSubmissionService {
    payments: Arc<dyn PaymentProcessor>,
}

impl OrderSubmissionService {
    pub fn new(payments: Arc<dyn PaymentProcessor>) -> Self {
        OrderSubmissionService { payments }
    }

    /// Charges `amount` against `order_id` exactly once.
    ///
    /// ## Outcomes
    /// - status `"success"` → `{success: true}`
    /// - any other status → `{success: false, error: "payment_error"}`
    /// - processor fault → `Err`, unchanged
    ///
    /// The amount is passed through without inspection.
    pub async fn submit(&self, order_id: &OrderId, amount: Money) -> WorkflowResult<OrderResult> {
        debug!(order_id = %order_id, amount = %amount, "Submitting order");

        let receipt = self.payments.charge(order_id, amount).await?;

        if receipt.is_success() {
            info!(order_id = %order_id, amount = %amount, "Order paid");
            Ok(OrderResult::paid())
        } else {
            warn!(order_id = %order_id, status = %receipt.status, "Payment failed");
            Ok(OrderResult::payment_failed())
        }
    }
}
