//! Home page rendering.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ports::AnalyticsTracker;

/// Markup returned for every render.
pub const PAGE_CONTENT: &str = "<div>content</div>";

/// Renders the home page and reports the view to analytics.
pub struct PageRenderer {
    analytics: Arc<dyn AnalyticsTracker>,
    home_path: String,
}

impl PageRenderer {
    pub fn new(analytics: Arc<dyn AnalyticsTracker>, home_path: impl Into<String>) -> Self {
        PageRenderer {
            analytics,
            home_path: home_path.into(),
        }
    }

    /// Returns the page markup after tracking one page view.
    ///
    /// Tracking failures are logged and otherwise ignored.
    pub async fn render(&self) -> String {
        debug!(path = %self.home_path, "Rendering page");

        if let Err(e) = self.analytics.track_page_view(&self.home_path).await {
            warn!(path = %self.home_path, error = %e, "Page view not tracked");
        }

        PAGE_CONTENT.to_string()
    }
}
