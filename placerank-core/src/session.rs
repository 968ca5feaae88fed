//! The browser capability the finder drives, kept opaque so lookups can run
//! against a real WebDriver session or a scripted test double.

use anyhow::Result;
use async_trait::async_trait;
use url::Url;

use crate::types::ListEntry;

/// One exclusively-owned browser session over a search results page.
///
/// Every method is fallible; the finder decides which failures are
/// tolerated and which collapse the lookup into a not-found result.
#[async_trait]
pub trait ListingSession: Send {
    /// Load the results page.
    async fn navigate(&mut self, url: &Url) -> Result<()>;

    /// Click the first control matching `selector` whose text contains
    /// `label`. `Ok(false)` when no such control is present.
    async fn click_toggle_by_css(&mut self, selector: &str, label: &str) -> Result<bool>;

    /// Click an anchor located by its text content. `Ok(false)` when absent.
    async fn click_toggle_by_text(&mut self, label: &str) -> Result<bool>;

    /// Click into the page body so keyboard scrolling has focus.
    async fn focus_results(&mut self) -> Result<()>;

    /// Snapshot the currently-rendered list items in document order.
    async fn visible_entries(
        &mut self,
        item_selector: &str,
        ad_attribute: &str,
    ) -> Result<Vec<ListEntry>>;

    /// Jump to the bottom of the loaded content to trigger lazy loading.
    async fn scroll_to_end(&mut self) -> Result<()>;

    /// Tear down the browser session.
    async fn close(&mut self) -> Result<()>;
}
