//! Request and result model for a single rank lookup.

use placerank_common::{PlaceError, Result};
use serde::{Deserialize, Serialize};

/// Token inside the `data-laim-exp-id` attribute that marks an ad entry.
pub const AD_MARKER_TOKEN: &str = "*e";

/// Which Naver Place result page a lookup runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchCategory {
    Restaurant,
    General,
}

/// Immutable input to a single lookup.
///
/// Constructed only through [`SearchRequest::new`], which enforces the
/// non-empty precondition so invalid input never reaches the finder.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    keyword: String,
    store_name: String,
    category: SearchCategory,
}

impl SearchRequest {
    /// Build a request, rejecting empty or whitespace-only inputs.
    pub fn new(
        keyword: impl Into<String>,
        store_name: impl Into<String>,
        category: SearchCategory,
    ) -> Result<Self> {
        let keyword = keyword.into();
        let store_name = store_name.into();
        if keyword.trim().is_empty() {
            return Err(PlaceError::Config("search keyword must not be empty".into()));
        }
        if store_name.trim().is_empty() {
            return Err(PlaceError::Config("store name must not be empty".into()));
        }
        Ok(Self {
            keyword,
            store_name,
            category,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn category(&self) -> SearchCategory {
        self.category
    }
}

/// One rendered list item, snapshotted during a scan pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Index within the currently-visible item collection.
    pub position_index: usize,
    /// Visible text of the card; empty when extraction failed.
    pub display_text: String,
    pub is_sponsored: bool,
}

impl ListEntry {
    /// Derive an entry from raw item data. A missing or unreadable ad
    /// marker reads as organic; most organic cards lack the attribute
    /// entirely.
    pub fn derive(position_index: usize, display_text: String, ad_marker: Option<&str>) -> Self {
        let is_sponsored = ad_marker.is_some_and(|value| value.contains(AD_MARKER_TOKEN));
        Self {
            position_index,
            display_text,
            is_sponsored,
        }
    }
}

/// Outcome of a lookup: the store's 1-based rank among non-sponsored
/// entries, or `None` when the scroll budget ran out or the lookup failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankResult {
    pub rank: Option<u32>,
    pub review_count: u64,
}

impl RankResult {
    pub fn found(rank: u32, review_count: u64) -> Self {
        Self {
            rank: Some(rank),
            review_count,
        }
    }

    pub fn not_found() -> Self {
        Self {
            rank: None,
            review_count: 0,
        }
    }
}
