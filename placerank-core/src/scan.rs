//! Document-order scan of a snapshot of rendered list items.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ListEntry;

/// Review counter as it appears in a listing card, e.g. "리뷰 1,234".
static REVIEW_COUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"리뷰\s*([\d,]+)").expect("valid review regex"));

/// A located store within one scan pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanMatch {
    /// 1-based position within the visible item collection.
    pub rank: u32,
    pub review_count: u64,
}

/// First entry in document order that is non-sponsored and whose text
/// contains `store_name` as a substring. Sponsored entries are filtered
/// before rank assignment, so an ad is never reported even when it is the
/// first textual match. Overlapping names are not disambiguated; the first
/// substring match wins.
pub fn scan_for_store(entries: &[ListEntry], store_name: &str) -> Option<ScanMatch> {
    for entry in entries {
        if entry.is_sponsored || !entry.display_text.contains(store_name) {
            continue;
        }
        return Some(ScanMatch {
            rank: entry.position_index as u32 + 1,
            review_count: review_count(&entry.display_text),
        });
    }
    None
}

/// Parse the review counter out of an entry's text, thousands separators
/// stripped. 0 when the marker is absent.
pub fn review_count(text: &str) -> u64 {
    REVIEW_COUNT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|group| group.as_str().replace(',', "").parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organic(index: usize, text: &str) -> ListEntry {
        ListEntry::derive(index, text.to_string(), None)
    }

    fn sponsored(index: usize, text: &str) -> ListEntry {
        ListEntry::derive(index, text.to_string(), Some("salt*e-banner"))
    }

    #[test]
    fn review_count_strips_thousands_separators() {
        assert_eq!(review_count("맛있는파스타 리뷰 1,234 강남구"), 1234);
        assert_eq!(review_count("리뷰 7"), 7);
        assert_eq!(review_count("리뷰1,000,000"), 1_000_000);
    }

    #[test]
    fn review_count_defaults_to_zero_without_marker() {
        assert_eq!(review_count("맛있는파스타 강남구"), 0);
        assert_eq!(review_count(""), 0);
    }

    #[test]
    fn first_organic_match_sets_one_based_rank() {
        let entries = vec![
            organic(0, "다른가게"),
            organic(1, "맛있는파스타 리뷰 42"),
            organic(2, "맛있는파스타 본점"),
        ];
        let found = scan_for_store(&entries, "맛있는파스타").unwrap();
        assert_eq!(found.rank, 2);
        assert_eq!(found.review_count, 42);
    }

    #[test]
    fn sponsored_match_is_skipped() {
        let entries = vec![
            sponsored(0, "맛있는파스타 광고"),
            organic(1, "맛있는파스타 리뷰 9"),
        ];
        let found = scan_for_store(&entries, "맛있는파스타").unwrap();
        assert_eq!(found.rank, 2);
    }

    #[test]
    fn only_sponsored_matches_yield_nothing() {
        let entries = vec![sponsored(0, "맛있는파스타"), organic(1, "무관한가게")];
        assert!(scan_for_store(&entries, "맛있는파스타").is_none());
    }

    #[test]
    fn substring_match_does_not_disambiguate_overlapping_names() {
        // "A Cafe" matches "A Cafe Annex" when it appears first; known
        // precision limitation, kept.
        let entries = vec![organic(0, "A Cafe Annex"), organic(1, "A Cafe")];
        let found = scan_for_store(&entries, "A Cafe").unwrap();
        assert_eq!(found.rank, 1);
    }

    #[test]
    fn entry_with_empty_text_keeps_its_position_but_never_matches() {
        let entries = vec![organic(0, ""), organic(1, "맛있는파스타")];
        let found = scan_for_store(&entries, "맛있는파스타").unwrap();
        assert_eq!(found.rank, 2);
    }
}
