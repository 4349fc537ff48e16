//! Business-hours gate.

use std::sync::Arc;

use tracing::debug;

use crate::config::HoursSettings;
use crate::ports::Clock;

/// Answers whether the storefront is open right now.
pub struct AvailabilityGate {
    clock: Arc<dyn Clock>,
    hours: HoursSettings,
}

impl AvailabilityGate {
    pub fn new(clock: Arc<dyn Clock>, hours: HoursSettings) -> Self {
        AvailabilityGate { clock, hours }
    }

    /// True when the clock's time of day is in `[open, close)`, on any date.
    pub fn is_open(&self) -> bool {
        let now = self.clock.now();
        let open = self.hours.contains(now.time());
        debug!(now = %now, open, "Availability checked");
        open
    }
}
