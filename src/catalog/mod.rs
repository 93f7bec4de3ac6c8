//! Catalog Pipeline
//!
//! Query State drives three pure stages over the unfiltered record list:
//! filter by keyword and categories, sort by the selected key, then cut out one page.
//! Every interaction recomputes the whole pipeline from scratch.

pub mod filter;
pub mod paginate;
pub mod query;
pub mod sort;

pub use paginate::PageWindow;
pub use query::{CatalogEvent, PageRequest, QueryState};

use crate::models::SampleRecord;
use serde::Serialize;
use tracing::debug;

/// Page size used when the configuration does not override it
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One computed page of the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a SampleRecord>,
    pub page: usize,
    pub total_pages: usize,
    pub total_matching: usize,
}

impl CatalogPage<'_> {
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.page, self.total_pages)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Runs filter, sort and paginate for `query` over `records`
pub fn run<'a>(records: &'a [SampleRecord], query: &QueryState, page_size: usize) -> CatalogPage<'a> {
    let filtered = filter::filter(records, &query.keyword, &query.categories);
    let ordered = sort::sort(&filtered, query.sort);
    let (slice, total_pages) = paginate::paginate(&ordered, page_size, query.page);

    CatalogPage {
        items: slice.to_vec(),
        page: query.page.clamp(1, total_pages),
        total_pages,
        total_matching: ordered.len(),
    }
}

/// Applies an interaction to `query`, recomputes, and clamps the stored page
/// to the new page count. Returns the recomputed page.
pub fn handle_event<'a>(
    records: &'a [SampleRecord],
    query: &mut QueryState,
    page_size: usize,
    event: CatalogEvent,
) -> CatalogPage<'a> {
    let current_total = run(records, query, page_size).total_pages;
    query.apply(event, current_total);

    let page = run(records, query, page_size);
    if query.page != page.page {
        debug!(
            stored = query.page,
            clamped = page.page,
            "stored page out of range after recompute"
        );
    }
    query.clamp_page(page.total_pages);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortKey;

    fn six() -> Vec<SampleRecord> {
        vec![
            SampleRecord::new("1", "React forms", "Forms with React").with_tags(["Forms"]).with_views(300),
            SampleRecord::new("2", "React navbar", "Navbar in React").with_tags(["UI Components"]).with_views(900),
            SampleRecord::new("3", "React hooks", "Hooks with React").with_tags(["Hooks"]).with_views(100),
            SampleRecord::new("4", "React modal", "Modal in React").with_tags(["UI Components"]).with_views(500),
            SampleRecord::new("5", "React state", "Context in React").with_tags(["State Management"]).with_views(700),
            SampleRecord::new("6", "React table", "Table in React").with_tags(["UI Components", "Table"]).with_views(200),
        ]
    }

    fn ids(page: &CatalogPage) -> Vec<String> {
        page.items.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn scenario_single_full_page() {
        let records = six();
        let page = run(&records, &QueryState::default(), 6);
        assert_eq!(page.items.len(), 6);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_matching, 6);
    }

    #[test]
    fn scenario_keyword_and_category() {
        let records = six();
        let mut query = QueryState::default();
        query.set_keyword("react");
        query.toggle_category("ui-components");

        let page = run(&records, &query, 6);
        assert_eq!(page.total_matching, 3);
        assert_eq!(page.total_pages, 1);
        // descending views under the default popularity sort
        assert_eq!(ids(&page), vec!["2", "4", "6"]);
    }

    #[test]
    fn scenario_page_beyond_range_shows_first_page() {
        let records = six();
        let mut query = QueryState::default();
        query.go_to_page(99);
        let page = run(&records, &query, 6);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 6);

        let empty: Vec<SampleRecord> = Vec::new();
        let page = run(&empty, &query, 6);
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn scenario_newest_sort() {
        let records = vec![
            SampleRecord::new("1", "", "").with_views(500),
            SampleRecord::new("2", "", "").with_views(900),
        ];
        let page = run(&records, &QueryState::with_sort(SortKey::Newest), 6);
        assert_eq!(ids(&page), vec!["2", "1"]);
    }

    #[test]
    fn narrowing_the_filter_clamps_the_stored_page() {
        let records = six();
        let mut query = QueryState::default();

        let page = handle_event(&records, &mut query, 2, CatalogEvent::PageRequested(PageRequest::Next));
        assert_eq!(page.page, 2);
        handle_event(&records, &mut query, 2, CatalogEvent::PageRequested(PageRequest::Next));
        assert_eq!(query.page, 3);

        let page = handle_event(
            &records,
            &mut query,
            2,
            CatalogEvent::CategoryToggled("ui-components".into()),
        );
        assert_eq!(page.total_pages, 2);
        assert_eq!(query.page, 2);
        assert_eq!(ids(&page), vec!["6"]);
    }

    #[test]
    fn next_stops_at_the_last_page() {
        let records = six();
        let mut query = QueryState::default();
        for _ in 0..5 {
            handle_event(&records, &mut query, 4, CatalogEvent::PageRequested(PageRequest::Next));
        }
        assert_eq!(query.page, 2);
    }

    #[test]
    fn direct_page_selection_is_clamped_after_recompute() {
        let records = six();
        let mut query = QueryState::default();
        let page = handle_event(
            &records,
            &mut query,
            6,
            CatalogEvent::PageRequested(PageRequest::Number(4)),
        );
        assert_eq!(page.page, 1);
        assert_eq!(query.page, 1);
    }
}
