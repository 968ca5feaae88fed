use anyhow::Result;
use async_trait::async_trait;
use fantoccini::elements::Element;
use fantoccini::key::Key;
use fantoccini::{Client, Locator};
use placerank_core::session::ListingSession;
use placerank_core::types::ListEntry;
use tracing::debug;
use url::Url;

/// [`ListingSession`] over a live WebDriver page.
pub struct PlaceSession {
    client: Client,
}

impl PlaceSession {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Dispatch a click through script execution; overlays on the results
    /// page can swallow native click events.
    async fn script_click(&mut self, element: &Element) -> Result<()> {
        self.client
            .execute("arguments[0].click();", vec![serde_json::to_value(element)?])
            .await?;
        Ok(())
    }

    async fn body(&mut self) -> Result<Element> {
        self.client
            .find(Locator::Css("body"))
            .await
            .map_err(Into::into)
    }
}

#[async_trait]
impl ListingSession for PlaceSession {
    async fn navigate(&mut self, url: &Url) -> Result<()> {
        self.client.goto(url.as_str()).await?;
        Ok(())
    }

    async fn click_toggle_by_css(&mut self, selector: &str, label: &str) -> Result<bool> {
        let candidates = self.client.find_all(Locator::Css(selector)).await?;
        for candidate in candidates {
            let text = candidate.text().await.unwrap_or_default();
            if text.contains(label) {
                self.script_click(&candidate).await?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn click_toggle_by_text(&mut self, label: &str) -> Result<bool> {
        let xpath = format!("//a[contains(text(), '{label}')]");
        match self.client.find(Locator::XPath(&xpath)).await {
            Ok(element) => {
                self.script_click(&element).await?;
                Ok(true)
            }
            Err(err) if err.is_no_such_element() => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    async fn focus_results(&mut self) -> Result<()> {
        let _ = self.body().await?.click().await?;
        Ok(())
    }

    async fn visible_entries(
        &mut self,
        item_selector: &str,
        ad_attribute: &str,
    ) -> Result<Vec<ListEntry>> {
        let items = self.client.find_all(Locator::Css(item_selector)).await?;
        let mut entries = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            // A card that fails text extraction keeps its position but can
            // never match.
            let text = match item.text().await {
                Ok(text) => text,
                Err(err) => {
                    debug!(
                        target: "placerank.session",
                        index,
                        error = %err,
                        "failed to read item text"
                    );
                    String::new()
                }
            };
            // Missing or unreadable marker reads as organic.
            let marker = item.attr(ad_attribute).await.ok().flatten();
            entries.push(ListEntry::derive(index, text, marker.as_deref()));
        }
        Ok(entries)
    }

    async fn scroll_to_end(&mut self) -> Result<()> {
        let body = self.body().await?;
        body.send_keys(&String::from(char::from(Key::End))).await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.client.clone().close().await?;
        Ok(())
    }
}
