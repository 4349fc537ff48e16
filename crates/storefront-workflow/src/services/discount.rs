//! Holiday pricing.

use std::sync::Arc;

use chrono::Datelike;
use tracing::debug;

use crate::config::PromotionSettings;
use crate::ports::Clock;

/// Returns the discount rate in effect today.
pub struct SeasonalDiscountCalculator {
    clock: Arc<dyn Clock>,
    promotion: PromotionSettings,
}

impl SeasonalDiscountCalculator {
    pub fn new(clock: Arc<dyn Clock>, promotion: PromotionSettings) -> Self {
        SeasonalDiscountCalculator { clock, promotion }
    }

    /// The holiday rate for any instant on the holiday, `0.0` otherwise.
    pub fn current_discount(&self) -> f64 {
        let today = self.clock.now().date();
        let is_holiday =
            today.month() == self.promotion.holiday_month && today.day() == self.promotion.holiday_day;

        let discount = if is_holiday { self.promotion.rate } else { 0.0 };
        debug!(date = %today, discount, "Seasonal discount");
        discount
    }
}
