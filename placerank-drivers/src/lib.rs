//! WebDriver layer for the rank lookup.
//!
//! This crate provides the fantoccini-backed implementation of the
//! listing-session capability the core finder drives.
//!
//! - [`place_browser::driver::PlaceDriver`]: WebDriver client wrapper
//! - [`place_browser::session::PlaceSession`]: `ListingSession` over a live page
pub mod place_browser;
