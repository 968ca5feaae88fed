//! Fixed-duration settle delays.
//!
//! The result page renders client-side, so the lookup waits a fixed time
//! after navigation, after switching to list view, and after each scroll.
//! Delays live in one value so tests can run with zero-length waits instead
//! of real timing.

use std::time::Duration;

use tokio::time::sleep;

#[derive(Debug, Clone)]
pub struct WaitPolicy {
    pub page_settle: Duration,
    pub list_view_settle: Duration,
    pub scroll_settle: Duration,
}

impl WaitPolicy {
    /// Delays tuned against the live site: 3 s page load, 2 s list-view
    /// switch, 1.5 s per lazy-load scroll.
    pub fn standard() -> Self {
        Self {
            page_settle: Duration::from_secs(3),
            list_view_settle: Duration::from_secs(2),
            scroll_settle: Duration::from_millis(1500),
        }
    }

    /// Zero-length waits for tests.
    pub fn none() -> Self {
        Self {
            page_settle: Duration::ZERO,
            list_view_settle: Duration::ZERO,
            scroll_settle: Duration::ZERO,
        }
    }

    pub async fn after_navigation(&self) {
        sleep(self.page_settle).await;
    }

    pub async fn after_list_toggle(&self) {
        sleep(self.list_view_settle).await;
    }

    pub async fn after_scroll(&self) {
        sleep(self.scroll_settle).await;
    }
}
