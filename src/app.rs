use crate::cache::DetailCache;
use crate::catalog::{self, CatalogEvent, CatalogPage, PageRequest, QueryState};
use crate::clipboard;
use crate::config::Config;
use crate::models::{CATEGORIES, Comment, SampleDetail, SampleRecord, SampleStore};
use crate::rating::RatingControl;
use crate::router::Route;
use crate::submission::{SubmissionStatus, SubmitFormState};
use crate::ui;
use ratatui::Frame;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Whether keystrokes drive navigation or go into a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
    HelpMenu,
}

/// Labels of the browse sidebar rating radio group. Display only.
pub const RATING_CHOICES: [&str; 3] = ["Any", "4 stars & up", "3 stars & up"];

/// One row of the browse sidebar, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarItem {
    Keyword,
    Category(usize),
    Sort,
    Rating(usize),
}

impl SidebarItem {
    pub fn all() -> Vec<SidebarItem> {
        let mut items = vec![SidebarItem::Keyword];
        items.extend((0..CATEGORIES.len()).map(SidebarItem::Category));
        items.push(SidebarItem::Sort);
        items.extend((0..RATING_CHOICES.len()).map(SidebarItem::Rating));
        items
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseFocus {
    #[default]
    Sidebar,
    Results,
}

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub search_input: String,
    pub selected_featured: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub focus: BrowseFocus,
    pub sidebar_index: usize,
    pub selected_card: usize,
    pub keyword_input: String,
    pub rating_choice: usize,
}

impl BrowseState {
    pub fn sidebar_item(&self) -> SidebarItem {
        SidebarItem::all()
            .get(self.sidebar_index)
            .copied()
            .unwrap_or(SidebarItem::Keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Comments,
    Faq,
    MoreDetails,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Comments, DetailTab::Faq, DetailTab::MoreDetails];

    pub fn next(&self) -> Self {
        match self {
            DetailTab::Comments => DetailTab::Faq,
            DetailTab::Faq => DetailTab::MoreDetails,
            DetailTab::MoreDetails => DetailTab::Comments,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub tab: DetailTab,
    pub scroll: usize,
    /// Code rows the viewer showed last frame, 0 before the first draw
    pub code_viewport: usize,
    pub rating: RatingControl,
    pub comment_input: String,
    pub selected_related: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Submissions,
    Bookmarks,
    Settings,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [
        ProfileTab::Submissions,
        ProfileTab::Bookmarks,
        ProfileTab::Settings,
    ];

    pub fn next(&self) -> Self {
        match self {
            ProfileTab::Submissions => ProfileTab::Bookmarks,
            ProfileTab::Bookmarks => ProfileTab::Settings,
            ProfileTab::Settings => ProfileTab::Submissions,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub tab: ProfileTab,
    pub selected: usize,
}

/// Main Application State Container
///
/// Holds the current route with its back-navigation history, the sample store and
/// catalog query, plus the per-screen state each view reads when rendering.
#[derive(Debug)]
pub struct App {
    pub route: Route,
    pub page_history: Vec<Route>,
    pub config: Config,
    pub store: SampleStore,
    pub query: QueryState,
    pub detail_cache: DetailCache,
    pub input_mode: InputMode,

    pub home: HomeState,
    pub browse: BrowseState,
    pub detail: DetailState,
    pub submit: SubmitFormState,
    pub profile_view: ProfileState,

    /// Comments posted this session, keyed by sample id
    pub local_comments: HashMap<String, Vec<Comment>>,

    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(config: Config, store: SampleStore) -> Self {
        let query = QueryState::with_sort(config.default_sort);
        let detail_cache = DetailCache::new(config.detail_cache_ttl());
        let submit = SubmitFormState::new(&config.submission);

        Self {
            route: Route::Home,
            page_history: Vec::new(),
            config,
            store,
            query,
            detail_cache,
            input_mode: InputMode::Normal,
            home: HomeState::default(),
            browse: BrowseState::default(),
            detail: DetailState::default(),
            submit,
            profile_view: ProfileState::default(),
            local_comments: HashMap::new(),
            error_message: None,
            success_message: None,
            needs_redraw: true,
        }
    }

    /// Starts the application on `route` with an empty history
    pub fn with_route(config: Config, store: SampleStore, route: Route) -> Self {
        let mut app = Self::new(config, store);
        app.enter(route);
        app
    }

    /// Moves to `route`, remembering the current one for [`App::go_back`].
    /// Navigating to the route already shown does nothing.
    pub fn navigate_to(&mut self, route: Route) {
        if self.route == route {
            return;
        }
        let previous = std::mem::take(&mut self.route);
        self.page_history.push(previous);
        self.enter(route);
    }

    pub fn go_back(&mut self) {
        if let Some(previous) = self.page_history.pop() {
            self.enter(previous);
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.page_history.is_empty()
    }

    fn enter(&mut self, route: Route) {
        info!(route = %route, "navigate");
        self.input_mode = InputMode::Normal;

        match &route {
            Route::SampleDetail { id } => {
                self.detail = DetailState::default();
                if self.resolve_detail(id).is_none() {
                    warn!(id = %id, "unknown sample id");
                }
            }
            Route::Browse => {
                self.browse.keyword_input = self.query.keyword.clone();
                self.clamp_browse_selection();
            }
            Route::Profile => {
                self.profile_view.selected = 0;
            }
            Route::Home | Route::Submit | Route::NotFound { .. } => {}
        }

        self.route = route;
    }

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub fn has_message(&self) -> bool {
        self.error_message.is_some() || self.success_message.is_some()
    }

    /// Called once per loop iteration: collects the submission outcome and
    /// drops stale detail cache entries
    pub fn tick(&mut self) {
        if self.submit.poll() {
            match self.submit.status.clone() {
                SubmissionStatus::Success(message) => self.set_success_message(message),
                SubmissionStatus::Error(message) => self.set_error_message(message),
                SubmissionStatus::Idle | SubmissionStatus::Submitting => {}
            }
        }

        let evicted = self.detail_cache.evict_expired(Instant::now());
        if evicted > 0 {
            debug!(evicted, "expired detail cache entries");
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        ui::render(frame, self);
    }

    // Catalog

    /// The browse page for the current query
    pub fn catalog_page(&self) -> CatalogPage<'_> {
        catalog::run(self.store.records(), &self.query, self.config.page_size)
    }

    /// Feeds an interaction into the catalog pipeline
    pub fn dispatch(&mut self, event: CatalogEvent) {
        let page = catalog::handle_event(
            self.store.records(),
            &mut self.query,
            self.config.page_size,
            event,
        );
        debug!(
            page = page.page,
            total_pages = page.total_pages,
            matching = page.total_matching,
            "catalog recomputed"
        );
        self.clamp_browse_selection();
    }

    pub fn request_page(&mut self, request: PageRequest) {
        self.dispatch(CatalogEvent::PageRequested(request));
    }

    fn clamp_browse_selection(&mut self) {
        let visible = self.catalog_page().items.len();
        self.browse.selected_card = self.browse.selected_card.min(visible.saturating_sub(1));
    }

    pub fn selected_browse_record(&self) -> Option<&SampleRecord> {
        self.catalog_page()
            .items
            .get(self.browse.selected_card)
            .copied()
    }

    /// Applies the home search box as the catalog keyword and opens Browse
    pub fn search_from_home(&mut self) {
        let keyword = self.home.search_input.trim().to_string();
        self.dispatch(CatalogEvent::KeywordChanged(keyword));
        self.browse.focus = BrowseFocus::Results;
        self.browse.selected_card = 0;
        self.navigate_to(Route::Browse);
    }

    /// Applies the sidebar keyword field to the catalog
    pub fn apply_browse_keyword(&mut self) {
        let keyword = self.browse.keyword_input.clone();
        self.dispatch(CatalogEvent::KeywordChanged(keyword));
    }

    pub fn open_sample(&mut self, id: &str) {
        self.navigate_to(Route::SampleDetail { id: id.to_string() });
    }

    // Detail

    pub fn current_sample_id(&self) -> Option<&str> {
        match &self.route {
            Route::SampleDetail { id } => Some(id),
            _ => None,
        }
    }

    /// Looks the detail up in the cache, loading it from the store on a miss.
    /// Comments posted this session are replayed onto freshly loaded details.
    pub fn resolve_detail(&mut self, id: &str) -> Option<SampleDetail> {
        let now = Instant::now();
        if let Some(detail) = self.detail_cache.get(id, now) {
            return Some(detail.clone());
        }

        let mut detail = self.store.detail(id)?;
        for comment in self.local_comments.get(id).into_iter().flatten() {
            detail.add_comment(comment.clone());
        }
        debug!(id, "detail cache miss");
        self.detail_cache.insert(id, detail.clone(), now);
        Some(detail)
    }

    pub fn current_detail(&mut self) -> Option<SampleDetail> {
        let id = self.current_sample_id()?.to_string();
        self.resolve_detail(&id)
    }

    pub fn scroll_code(&mut self, delta: isize) {
        let lines = self.current_detail().map(|d| d.line_count()).unwrap_or(0);
        let max_scroll = lines.saturating_sub(self.detail.code_viewport.max(1));
        let next = self.detail.scroll.saturating_add_signed(delta);
        self.detail.scroll = next.min(max_scroll);
    }

    pub fn rate_sample(&mut self, stars: u8) {
        match self.detail.rating.select(stars) {
            Some(0) => self.set_success_message("Your rating was cleared.".to_string()),
            Some(value) => {
                info!(sample = ?self.current_sample_id(), value, "sample rated");
                self.set_success_message(format!("You rated this sample {} / 5.", value));
            }
            None => {}
        }
    }

    pub fn post_comment(&mut self) {
        let Some(id) = self.current_sample_id().map(str::to_string) else {
            return;
        };
        let text = self.detail.comment_input.trim().to_string();
        if text.is_empty() {
            self.input_mode = InputMode::Normal;
            self.set_error_message("Comment cannot be empty.".to_string());
            return;
        }

        let comment = Comment::new_local(self.store.profile().name.clone(), text);
        self.local_comments
            .entry(id.clone())
            .or_default()
            .push(comment.clone());
        if let Some(detail) = self.detail_cache.get_mut(&id, Instant::now()) {
            detail.add_comment(comment);
        }

        info!(sample = %id, "comment posted");
        self.detail.comment_input.clear();
        self.input_mode = InputMode::Normal;
        self.set_success_message("Comment posted.".to_string());
    }

    pub fn copy_code(&mut self) {
        let Some(detail) = self.current_detail() else {
            return;
        };
        match clipboard::copy_to_clipboard(&detail.code) {
            Ok(()) => self.set_success_message("Copied!".to_string()),
            Err(e) => {
                warn!(error = %e, "copy failed");
                self.set_error_message("Failed to copy code.".to_string());
            }
        }
    }

    pub fn open_selected_related(&mut self) {
        let related = self
            .current_detail()
            .and_then(|d| d.related.get(self.detail.selected_related).cloned());
        if let Some(related) = related {
            self.open_sample(&related.id);
        }
    }

    // Submit

    pub fn submit_sample(&mut self) {
        if self.submit.submit() {
            self.input_mode = InputMode::Normal;
            self.clear_messages();
        } else if !self.submit.errors.is_empty() {
            self.input_mode = InputMode::Normal;
            self.set_error_message("Please fix the highlighted fields.".to_string());
        }
    }

    // Profile

    pub fn profile_records(&self) -> &[SampleRecord] {
        let profile = self.store.profile();
        match self.profile_view.tab {
            ProfileTab::Submissions => &profile.submitted,
            ProfileTab::Bookmarks => &profile.bookmarked,
            ProfileTab::Settings => &[],
        }
    }

    pub fn selected_profile_record(&self) -> Option<&SampleRecord> {
        self.profile_records().get(self.profile_view.selected)
    }
}
