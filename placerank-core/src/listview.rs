//! List-view normalization.
//!
//! Some result layouts open in a map-forward mode; scanning needs the list
//! rendering. Activation is an ordered chain of independent strategies, each
//! with its own success/failure outcome, rather than nested error
//! suppression. A strategy error falls through to the next strategy; when
//! every strategy misses we assume the page already shows the list, which is
//! normal for some layouts.

use tracing::debug;

use crate::session::ListingSession;
use crate::wait::WaitPolicy;

/// Candidate set for the list-view toggle control.
pub const LIST_TOGGLE_SELECTOR: &str = r#"a.AtjOO[role="button"]"#;
/// Localized label on the toggle ("list").
pub const LIST_TOGGLE_LABEL: &str = "목록";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListViewStrategy {
    /// CSS candidate set filtered by label text.
    CssToggle,
    /// Text-content lookup over anchors.
    TextLookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListViewOutcome {
    /// A toggle was found and clicked by the named strategy.
    Activated(ListViewStrategy),
    /// No toggle found; the page is taken to already be in list view.
    AssumedActive,
}

/// Try each strategy in order; best effort, never fails the lookup.
pub async fn activate_list_view<S: ListingSession + ?Sized>(
    session: &mut S,
    waits: &WaitPolicy,
) -> ListViewOutcome {
    for strategy in [ListViewStrategy::CssToggle, ListViewStrategy::TextLookup] {
        let attempt = match strategy {
            ListViewStrategy::CssToggle => {
                session
                    .click_toggle_by_css(LIST_TOGGLE_SELECTOR, LIST_TOGGLE_LABEL)
                    .await
            }
            ListViewStrategy::TextLookup => session.click_toggle_by_text(LIST_TOGGLE_LABEL).await,
        };
        match attempt {
            Ok(true) => {
                waits.after_list_toggle().await;
                return ListViewOutcome::Activated(strategy);
            }
            Ok(false) => {
                debug!(target: "placerank.listview", ?strategy, "list toggle not present")
            }
            Err(err) => {
                debug!(target: "placerank.listview", ?strategy, error = %err, "list toggle lookup failed")
            }
        }
    }
    ListViewOutcome::AssumedActive
}
