//! # Test Doubles
//!
//! Scriptable, recording implementations of every collaborator port.
//!
//! Each double answers every call with the same scripted response and
//! remembers the arguments it was called with, so tests can assert both what
//! a workflow returned and how it talked to its collaborators.
//!
//! The module is compiled for this crate's own tests and, for downstream
//! crates, behind the `testing` feature:
//!
//! ```toml
//! [dev-dependencies]
//! storefront-workflow = { path = "../storefront-workflow", features = ["testing"] }
//! ```

use chrono::NaiveDateTime;
use storefront_core::{ChargeReceipt, ExchangeRate, Money, OrderId, SecurityCode, ShippingQuote};
use tokio::sync::Mutex;

use crate::error::{CollaboratorError, CollaboratorResult};
use crate::ports::{
    AnalyticsTracker, Clock, EmailSender, ExchangeRateProvider, PaymentProcessor,
    SecurityCodeGenerator, ShippingQuoteProvider,
};

// =============================================================================
// Exchange Rates
// =============================================================================

/// Answers every rate lookup with one scripted response.
#[derive(Debug)]
pub struct StubRates {
    response: CollaboratorResult<ExchangeRate>,
    requested: Mutex<Vec<String>>,
}

impl StubRates {
    pub fn returning(rate: f64) -> Self {
        StubRates {
            response: Ok(ExchangeRate::new(rate)),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CollaboratorError) -> Self {
        StubRates {
            response: Err(error),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Currency codes requested so far, in call order.
    pub async fn requested(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ExchangeRateProvider for StubRates {
    async fn get_rate(&self, currency_code: &str) -> CollaboratorResult<ExchangeRate> {
        self.requested.lock().await.push(currency_code.to_string());
        self.response.clone()
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Answers every quote request with one scripted response.
#[derive(Debug)]
pub struct StubShipping {
    response: CollaboratorResult<Option<ShippingQuote>>,
    requested: Mutex<Vec<String>>,
}

impl StubShipping {
    pub fn quoting(cost: Money, estimated_days: u32) -> Self {
        Self::with_response(Ok(Some(ShippingQuote::new(cost, estimated_days))))
    }

    /// Every destination is unserved.
    pub fn unavailable() -> Self {
        Self::with_response(Ok(None))
    }

    pub fn failing(error: CollaboratorError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: CollaboratorResult<Option<ShippingQuote>>) -> Self {
        StubShipping {
            response,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub async fn requested(&self) -> Vec<String> {
        self.requested.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl ShippingQuoteProvider for StubShipping {
    async fn get_quote(&self, destination: &str) -> CollaboratorResult<Option<ShippingQuote>> {
        self.requested.lock().await.push(destination.to_string());
        self.response.clone()
    }
}

// =============================================================================
// Analytics
// =============================================================================

/// Records every tracked path. Optionally fails after recording.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    failure: Option<CollaboratorError>,
    tracked: Mutex<Vec<String>>,
}

impl RecordingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: CollaboratorError) -> Self {
        RecordingAnalytics {
            failure: Some(error),
            tracked: Mutex::new(Vec::new()),
        }
    }

    pub async fn tracked(&self) -> Vec<String> {
        self.tracked.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl AnalyticsTracker for RecordingAnalytics {
    async fn track_page_view(&self, path: &str) -> CollaboratorResult<()> {
        self.tracked.lock().await.push(path.to_string());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Payments
// =============================================================================

/// Answers every charge with one scripted receipt or fault.
#[derive(Debug)]
pub struct ScriptedPayments {
    response: CollaboratorResult<ChargeReceipt>,
    charges: Mutex<Vec<(OrderId, Money)>>,
}

impl ScriptedPayments {
    /// Every charge returns a receipt with `status`.
    pub fn with_status(status: &str) -> Self {
        ScriptedPayments {
            response: Ok(ChargeReceipt::new(status)),
            charges: Mutex::new(Vec::new()),
        }
    }

    pub fn approving() -> Self {
        ScriptedPayments {
            response: Ok(ChargeReceipt::success()),
            charges: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: CollaboratorError) -> Self {
        ScriptedPayments {
            response: Err(error),
            charges: Mutex::new(Vec::new()),
        }
    }

    /// Charges attempted so far, in call order.
    pub async fn charges(&self) -> Vec<(OrderId, Money)> {
        self.charges.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl PaymentProcessor for ScriptedPayments {
    async fn charge(&self, order_id: &OrderId, amount: Money) -> CollaboratorResult<ChargeReceipt> {
        self.charges.lock().await.push((order_id.clone(), amount));
        self.response.clone()
    }
}

// =============================================================================
// Email
// =============================================================================

/// Records every email. Optionally fails after recording.
#[derive(Debug, Default)]
pub struct RecordingEmail {
    failure: Option<CollaboratorError>,
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingEmail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: CollaboratorError) -> Self {
        RecordingEmail {
            failure: Some(error),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// `(recipient, body)` pairs, in send order.
    pub async fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl EmailSender for RecordingEmail {
    async fn send(&self, recipient: &str, body: &str) -> CollaboratorResult<()> {
        self.sent
            .lock()
            .await
            .push((recipient.to_string(), body.to_string()));
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

// =============================================================================
// Security Codes
// =============================================================================

/// Hands out a fixed sequence of codes, then faults.
#[derive(Debug)]
pub struct SequenceCodes {
    remaining: Mutex<std::collections::VecDeque<SecurityCode>>,
    failure: Option<CollaboratorError>,
}

impl SequenceCodes {
    pub fn new(codes: impl IntoIterator<Item = u32>) -> Self {
        SequenceCodes {
            remaining: Mutex::new(codes.into_iter().map(SecurityCode::new).collect()),
            failure: None,
        }
    }

    pub fn failing(error: CollaboratorError) -> Self {
        SequenceCodes {
            remaining: Mutex::new(Default::default()),
            failure: Some(error),
        }
    }
}

#[async_trait::async_trait]
impl SecurityCodeGenerator for SequenceCodes {
    async fn generate(&self) -> CollaboratorResult<SecurityCode> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.remaining
            .lock()
            .await
            .pop_front()
            .ok_or_else(|| CollaboratorError::internal("security-code", "sequence exhausted"))
    }
}

// =============================================================================
// Clock
// =============================================================================

/// A clock stopped at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        FixedClock(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
