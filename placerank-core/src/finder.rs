//! The scroll-and-scan lookup loop.

use anyhow::Result;
use tracing::{debug, info, warn};
use url::Url;

use crate::listview::activate_list_view;
use crate::scan::scan_for_store;
use crate::session::ListingSession;
use crate::types::{RankResult, SearchCategory, SearchRequest};
use crate::wait::WaitPolicy;

/// Mobile result page for restaurant-category searches.
const RESTAURANT_LIST_URL: &str = "https://m.place.naver.com/restaurant/list";
/// Mobile result page for everything else.
const PLACE_LIST_URL: &str = "https://m.place.naver.com/place/list";

/// Item markers; the site uses different classes depending on result layout.
pub const LIST_ITEM_SELECTOR: &str = "li.UEzoS, li.VLTHu";
/// Attribute carrying the sponsorship marker on ad entries.
pub const AD_MARKER_ATTRIBUTE: &str = "data-laim-exp-id";
/// Maximum scroll-and-rescan passes, covering roughly the first 100 results.
pub const SCROLL_BUDGET: usize = 15;

/// Drives one lookup over an exclusively-owned [`ListingSession`].
pub struct RankFinder {
    waits: WaitPolicy,
    scroll_budget: usize,
}

impl RankFinder {
    pub fn new(waits: WaitPolicy) -> Self {
        Self {
            waits,
            scroll_budget: SCROLL_BUDGET,
        }
    }

    /// Look up the store's rank for the request's keyword.
    ///
    /// Never fails the caller: any error during navigation, lookup, or
    /// extraction is recovered into a not-found result. The session is
    /// closed exactly once on every path before this returns.
    pub async fn find_rank<S: ListingSession>(
        &self,
        mut session: S,
        request: &SearchRequest,
    ) -> RankResult {
        let outcome = self.run_lookup(&mut session, request).await;
        if let Err(err) = session.close().await {
            warn!(target: "placerank.finder", error = %err, "failed to close browser session");
        }
        match outcome {
            Ok(result) => result,
            Err(err) => {
                warn!(target: "placerank.finder", error = %err, "lookup failed; reporting not found");
                RankResult::not_found()
            }
        }
    }

    async fn run_lookup<S: ListingSession>(
        &self,
        session: &mut S,
        request: &SearchRequest,
    ) -> Result<RankResult> {
        let url = search_url(request)?;
        info!(
            target: "placerank.finder",
            %url,
            store = request.store_name(),
            "starting rank lookup"
        );
        session.navigate(&url).await?;
        self.waits.after_navigation().await;

        let view = activate_list_view(session, &self.waits).await;
        debug!(target: "placerank.finder", ?view, "list view normalization finished");

        session.focus_results().await?;

        for pass in 0..self.scroll_budget {
            let entries = session
                .visible_entries(LIST_ITEM_SELECTOR, AD_MARKER_ATTRIBUTE)
                .await?;
            if let Some(found) = scan_for_store(&entries, request.store_name()) {
                info!(
                    target: "placerank.finder",
                    rank = found.rank,
                    reviews = found.review_count,
                    pass,
                    "store located"
                );
                return Ok(RankResult::found(found.rank, found.review_count));
            }
            debug!(
                target: "placerank.finder",
                pass,
                visible = entries.len(),
                "no match yet; scrolling"
            );
            session.scroll_to_end().await?;
            self.waits.after_scroll().await;
        }

        info!(
            target: "placerank.finder",
            budget = self.scroll_budget,
            "scroll budget exhausted without a match"
        );
        Ok(RankResult::not_found())
    }
}

/// Category result URL with the keyword as an encoded query parameter.
pub fn search_url(request: &SearchRequest) -> Result<Url> {
    let base = match request.category() {
        SearchCategory::Restaurant => RESTAURANT_LIST_URL,
        SearchCategory::General => PLACE_LIST_URL,
    };
    Url::parse_with_params(base, &[("query", request.keyword())]).map_err(Into::into)
}
