use crate::models::SortKey;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::trace;

/// Page request coming from the pagination control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Previous,
    Next,
    Number(usize),
}

/// Interaction events raised by the browse controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogEvent {
    KeywordChanged(String),
    CategoryToggled(String),
    SortChanged(SortKey),
    PageRequested(PageRequest),
}

/// The user's current view intent on the browse screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub keyword: String,
    pub categories: BTreeSet<String>,
    pub sort: SortKey,
    pub page: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            categories: BTreeSet::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl QueryState {
    pub fn with_sort(sort: SortKey) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    /// Replaces the keyword. The current page is kept.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    /// Adds the category if absent, removes it if present
    pub fn toggle_category(&mut self, id: &str) {
        if !self.categories.remove(id) {
            self.categories.insert(id.to_string());
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.categories.contains(id)
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.sort = sort;
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Advances one page without going past `total_pages`
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    /// Sets the page as clicked; bounds are enforced when slicing
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Pulls the stored page back into `[1, total_pages]`
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    /// Applies one interaction. `total_pages` is the page count of the result
    /// currently on screen, used by `Next`.
    pub fn apply(&mut self, event: CatalogEvent, total_pages: usize) {
        trace!(?event, "query event");
        match event {
            CatalogEvent::KeywordChanged(keyword) => self.set_keyword(keyword),
            CatalogEvent::CategoryToggled(id) => self.toggle_category(&id),
            CatalogEvent::SortChanged(sort) => self.set_sort(sort),
            CatalogEvent::PageRequested(PageRequest::Previous) => self.previous_page(),
            CatalogEvent::PageRequested(PageRequest::Next) => self.next_page(total_pages),
            CatalogEvent::PageRequested(PageRequest::Number(page)) => self.go_to_page(page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let query = QueryState::default();
        assert!(query.keyword.is_empty());
        assert!(query.categories.is_empty());
        assert_eq!(query.sort, SortKey::Popularity);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn category_toggle_is_symmetric() {
        let mut query = QueryState::default();
        query.toggle_category("hooks");
        assert!(query.is_selected("hooks"));
        query.toggle_category("forms");
        query.toggle_category("hooks");
        assert!(!query.is_selected("hooks"));
        assert!(query.is_selected("forms"));
    }

    #[test]
    fn filter_changes_keep_the_page() {
        let mut query = QueryState::default();
        query.go_to_page(3);
        query.apply(CatalogEvent::KeywordChanged("react".into()), 3);
        query.apply(CatalogEvent::CategoryToggled("hooks".into()), 3);
        query.apply(CatalogEvent::SortChanged(SortKey::Rating), 3);
        assert_eq!(query.page, 3);
        assert_eq!(query.keyword, "react");
        assert_eq!(query.sort, SortKey::Rating);
    }

    #[test]
    fn previous_floors_at_one() {
        let mut query = QueryState::default();
        query.apply(CatalogEvent::PageRequested(PageRequest::Previous), 4);
        assert_eq!(query.page, 1);
        query.go_to_page(2);
        query.previous_page();
        assert_eq!(query.page, 1);
    }

    #[test]
    fn next_ceils_at_total_pages() {
        let mut query = QueryState::default();
        query.apply(CatalogEvent::PageRequested(PageRequest::Next), 2);
        assert_eq!(query.page, 2);
        query.apply(CatalogEvent::PageRequested(PageRequest::Next), 2);
        assert_eq!(query.page, 2);
        query.next_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn direct_page_selection_is_unchecked_until_clamped() {
        let mut query = QueryState::default();
        query.apply(CatalogEvent::PageRequested(PageRequest::Number(9)), 2);
        assert_eq!(query.page, 9);
        query.clamp_page(2);
        assert_eq!(query.page, 2);
        query.go_to_page(0);
        query.clamp_page(2);
        assert_eq!(query.page, 1);
    }
}
