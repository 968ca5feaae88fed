//! Core rank-detection logic for Naver Place search results.
//!
//! This crate owns everything about a lookup except the browser itself:
//! the request/result model, the scan over rendered list items, list-view
//! normalization, and the scroll-and-rescan loop. The browser is abstracted
//! behind [`session::ListingSession`] so the whole pipeline runs against a
//! scripted mock in tests.
//!
//! - [`finder::RankFinder`]: drives one lookup end to end
//! - [`session::ListingSession`]: the opaque browser capability
//! - [`listview`]: ordered list-view normalization strategies
//! - [`scan`]: document-order scan and review-count extraction
//! - [`wait::WaitPolicy`]: fixed-duration settle delays
pub mod finder;
pub mod listview;
pub mod scan;
pub mod session;
pub mod types;
pub mod wait;

pub use finder::RankFinder;
pub use session::ListingSession;
pub use types::{ListEntry, RankResult, SearchCategory, SearchRequest};
pub use wait::WaitPolicy;
