use std::collections::HashMap;

use fantoccini::{Client, ClientBuilder};
use placerank_common::{PlaceConfig, PlaceError, Result};
use serde_json::json;
use tracing::info;
use webdriver::capabilities::Capabilities;

use crate::place_browser::session::PlaceSession;

/// Thin wrapper around a `fantoccini` WebDriver client configured for the
/// mobile Naver Place result pages.
pub struct PlaceDriver {
    pub client: Client,
}

impl PlaceDriver {
    /// Connect to a running WebDriver service (Chromedriver by default at
    /// `http://localhost:9515`).
    pub async fn new(config: &PlaceConfig) -> Result<Self> {
        let mut caps = Capabilities::new();
        let mut chrome_opts = HashMap::new();

        // Container-safe launch flags; the headless pair is optional so a
        // visible window stays available for debugging.
        let mut args = vec![
            "--no-sandbox".to_string(),
            "--disable-dev-shm-usage".to_string(),
        ];
        if config.headless {
            args.push("--headless".to_string());
            args.push("--disable-gpu".to_string());
        }
        chrome_opts.insert("args".to_string(), json!(args));
        caps.insert("goog:chromeOptions".to_string(), json!(chrome_opts));

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(&config.webdriver_url)
            .await
            .map_err(|err| PlaceError::Driver(err.into()))?;
        info!(
            target: "placerank.driver",
            endpoint = %config.webdriver_url,
            headless = config.headless,
            "browser session established"
        );

        Ok(Self { client })
    }

    /// Hand the connection over to a listing session.
    pub fn into_session(self) -> PlaceSession {
        PlaceSession::new(self.client)
    }
}
