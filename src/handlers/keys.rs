//! Keyboard Input Handling Module
//!
//! Translates key events into navigation, catalog events and form edits. Global keys
//! are handled first, then the event goes to the handler of the current route.

use crate::app::{App, BrowseFocus, DetailTab, InputMode, ProfileTab, SidebarItem};
use crate::catalog::{CatalogEvent, PageRequest};
use crate::models::CATEGORIES;
use crate::router::{Route, nav_items};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main keyboard event handler. Returns true when the application should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    // Any key dismisses a status message
    if app.has_message() && app.input_mode == InputMode::Normal {
        app.clear_messages();
        return false;
    }

    match app.input_mode {
        InputMode::Editing => {
            handle_editing_keys(key, app);
            return false;
        }
        InputMode::HelpMenu => {
            app.input_mode = InputMode::Normal;
            return false;
        }
        InputMode::Normal => {}
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char('?') => {
            app.input_mode = InputMode::HelpMenu;
            return false;
        }
        KeyCode::Esc | KeyCode::Backspace => {
            if app.can_go_back() {
                app.go_back();
            }
            return false;
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some((_, route, _)) = nav_items().into_iter().find(|(_, _, shortcut)| *shortcut == c) {
                app.navigate_to(route);
                return false;
            }
        }
        _ => {}
    }

    match app.route.clone() {
        Route::Home => handle_home_keys(key, app),
        Route::Browse => handle_browse_keys(key, app),
        Route::SampleDetail { .. } => handle_detail_keys(key, app),
        Route::Submit => handle_submit_keys(key, app),
        Route::Profile => handle_profile_keys(key, app),
        Route::NotFound { .. } => {
            if key.code == KeyCode::Enter {
                app.navigate_to(Route::Home);
            }
        }
    }

    false
}

/// Text entry for whichever field the current route is editing
fn handle_editing_keys(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match app.route {
        Route::Home => match key.code {
            KeyCode::Esc => app.input_mode = InputMode::Normal,
            KeyCode::Enter => app.search_from_home(),
            KeyCode::Backspace => {
                app.home.search_input.pop();
            }
            KeyCode::Char(c) => app.home.search_input.push(c),
            _ => {}
        },
        Route::Browse => match key.code {
            KeyCode::Esc | KeyCode::Enter => app.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                app.browse.keyword_input.pop();
                app.apply_browse_keyword();
            }
            KeyCode::Char(c) => {
                app.browse.keyword_input.push(c);
                app.apply_browse_keyword();
            }
            _ => {}
        },
        Route::SampleDetail { .. } => match key.code {
            KeyCode::Esc => app.input_mode = InputMode::Normal,
            KeyCode::Enter => app.post_comment(),
            KeyCode::Backspace => {
                app.detail.comment_input.pop();
            }
            KeyCode::Char(c) => app.detail.comment_input.push(c),
            _ => {}
        },
        Route::Submit => match key.code {
            KeyCode::Char('s') if ctrl => app.submit_sample(),
            KeyCode::Esc => app.input_mode = InputMode::Normal,
            KeyCode::Tab => app.submit.focus_next(),
            KeyCode::BackTab => app.submit.focus_previous(),
            KeyCode::Enter if app.submit.focused.is_multiline() => app.submit.insert_char('\n'),
            KeyCode::Enter => app.submit.focus_next(),
            KeyCode::Backspace => app.submit.backspace(),
            KeyCode::Char(c) if !ctrl => app.submit.insert_char(c),
            _ => {}
        },
        Route::Profile | Route::NotFound { .. } => app.input_mode = InputMode::Normal,
    }
}

fn handle_home_keys(key: KeyEvent, app: &mut App) {
    let featured = app.store.featured().len();

    match key.code {
        KeyCode::Char('/') | KeyCode::Char('i') => app.input_mode = InputMode::Editing,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Down | KeyCode::Char('j') => {
            if featured > 0 {
                app.home.selected_featured = (app.home.selected_featured + 1) % featured;
            }
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => {
            if featured > 0 {
                app.home.selected_featured = (app.home.selected_featured + featured - 1) % featured;
            }
        }
        KeyCode::Enter => {
            let id = app
                .store
                .featured()
                .get(app.home.selected_featured)
                .map(|r| r.id.clone());
            if let Some(id) = id {
                app.open_sample(&id);
            }
        }
        _ => {}
    }
}

fn handle_browse_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Tab => {
            app.browse.focus = match app.browse.focus {
                BrowseFocus::Sidebar => BrowseFocus::Results,
                BrowseFocus::Results => BrowseFocus::Sidebar,
            };
            return;
        }
        KeyCode::Char('/') => {
            app.browse.focus = BrowseFocus::Sidebar;
            app.browse.sidebar_index = 0;
            app.input_mode = InputMode::Editing;
            return;
        }
        KeyCode::Char(']') | KeyCode::Char('n') => {
            app.request_page(PageRequest::Next);
            return;
        }
        KeyCode::Char('[') | KeyCode::Char('N') => {
            app.request_page(PageRequest::Previous);
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let page = c.to_digit(10).unwrap_or(1) as usize;
            app.request_page(PageRequest::Number(page));
            return;
        }
        _ => {}
    }

    match app.browse.focus {
        BrowseFocus::Sidebar => handle_sidebar_keys(key, app),
        BrowseFocus::Results => handle_results_keys(key, app),
    }
}

fn handle_sidebar_keys(key: KeyEvent, app: &mut App) {
    let rows = SidebarItem::all().len();

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.browse.sidebar_index = (app.browse.sidebar_index + 1) % rows;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.browse.sidebar_index = (app.browse.sidebar_index + rows - 1) % rows;
        }
        KeyCode::Left | KeyCode::Right => {
            if app.browse.sidebar_item() == SidebarItem::Sort {
                let sort = if key.code == KeyCode::Left {
                    app.query.sort.previous()
                } else {
                    app.query.sort.next()
                };
                app.dispatch(CatalogEvent::SortChanged(sort));
            }
        }
        KeyCode::Enter | KeyCode::Char(' ') => match app.browse.sidebar_item() {
            SidebarItem::Keyword => app.input_mode = InputMode::Editing,
            SidebarItem::Category(index) => {
                if let Some(category) = CATEGORIES.get(index) {
                    app.dispatch(CatalogEvent::CategoryToggled(category.id.to_string()));
                }
            }
            SidebarItem::Sort => {
                let sort = app.query.sort.next();
                app.dispatch(CatalogEvent::SortChanged(sort));
            }
            SidebarItem::Rating(index) => app.browse.rating_choice = index,
        },
        _ => {}
    }
}

fn handle_results_keys(key: KeyEvent, app: &mut App) {
    let visible = app.catalog_page().items.len();
    if visible == 0 {
        return;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Right | KeyCode::Char('l') => {
            app.browse.selected_card = (app.browse.selected_card + 1).min(visible - 1);
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Left => {
            app.browse.selected_card = app.browse.selected_card.saturating_sub(1);
        }
        KeyCode::Enter => {
            if let Some(id) = app.selected_browse_record().map(|r| r.id.clone()) {
                app.open_sample(&id);
            }
        }
        _ => {}
    }
}

fn handle_detail_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') => app.copy_code(),
        KeyCode::Char('c') => {
            app.detail.tab = DetailTab::Comments;
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Tab => app.detail.tab = app.detail.tab.next(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_code(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_code(-1),
        KeyCode::PageDown => app.scroll_code(10),
        KeyCode::PageUp => app.scroll_code(-10),
        KeyCode::Char(c @ '1'..='5') => {
            let stars = c.to_digit(10).unwrap_or(0) as u8;
            app.rate_sample(stars);
        }
        KeyCode::Char('+') => {
            app.detail.rating.increment();
        }
        KeyCode::Char('-') => {
            app.detail.rating.decrement();
        }
        KeyCode::Char(']') => {
            let related = app.current_detail().map(|d| d.related.len()).unwrap_or(0);
            if related > 0 {
                app.detail.selected_related = (app.detail.selected_related + 1) % related;
            }
        }
        KeyCode::Char('[') => {
            let related = app.current_detail().map(|d| d.related.len()).unwrap_or(0);
            if related > 0 {
                app.detail.selected_related = (app.detail.selected_related + related - 1) % related;
            }
        }
        KeyCode::Enter => app.open_selected_related(),
        _ => {}
    }
}

fn handle_submit_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => app.submit_sample(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.submit.focus_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.submit.focus_previous(),
        KeyCode::Enter | KeyCode::Char('i') => {
            if !app.submit.is_submitting() {
                app.input_mode = InputMode::Editing;
            }
        }
        _ => {}
    }
}

fn handle_profile_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Tab => {
            app.profile_view.tab = app.profile_view.tab.next();
            app.profile_view.selected = 0;
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let count = app.profile_records().len();
            if count > 0 {
                app.profile_view.selected = (app.profile_view.selected + 1).min(count - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.profile_view.selected = app.profile_view.selected.saturating_sub(1);
        }
        KeyCode::Enter if app.profile_view.tab != ProfileTab::Settings => {
            if let Some(id) = app.selected_profile_record().map(|r| r.id.clone()) {
                app.open_sample(&id);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{SampleStore, SortKey};

    fn app() -> App {
        App::new(Config::default(), SampleStore::seeded())
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), app)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn q_quits_and_nav_keys_switch_routes() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.route, Route::Browse);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.route, Route::Profile);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Browse);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn home_search_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Editing);
        type_text(&mut app, "hook");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.route, Route::Browse);
        assert_eq!(app.query.keyword, "hook");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn typing_in_edit_mode_does_not_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Char('i'));
        type_text(&mut app, "bsp");
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.home.search_input, "bsp");
    }

    #[test]
    fn sidebar_toggles_categories_and_cycles_sort() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));

        // keyword row, then the first category
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.query.is_selected("hooks"));
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.query.is_selected("hooks"));

        app.browse.sidebar_index = CATEGORIES.len() + 1;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.query.sort, SortKey::Newest);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.query.sort, SortKey::Popularity);
    }

    #[test]
    fn rating_radio_does_not_filter() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        app.browse.sidebar_index = CATEGORIES.len() + 2;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.browse.rating_choice, 0);
        app.browse.sidebar_index = CATEGORIES.len() + 3;
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.browse.rating_choice, 1);
        assert_eq!(app.catalog_page().total_matching, app.store.len());
    }

    #[test]
    fn keyword_edits_apply_live() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zod");
        assert_eq!(app.query.keyword, "zod");
        assert_eq!(app.catalog_page().total_matching, 1);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.query.keyword, "zo");
    }

    #[test]
    fn results_open_detail_and_paging_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.query.page, 2);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.query.page, 1);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        // most viewed sample first under popularity
        assert_eq!(app.route, Route::SampleDetail { id: "301".into() });
    }

    #[test]
    fn detail_comment_and_rating_keys() {
        let mut app = app();
        app.open_sample("1");
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.detail.rating.value(), 3);
        // dismiss the rating message
        press(&mut app, KeyCode::Char('x'));

        press(&mut app, KeyCode::Char('c'));
        type_text(&mut app, "nice");
        press(&mut app, KeyCode::Enter);
        let detail = app.current_detail().expect("sample 1");
        assert_eq!(detail.comments.last().map(|c| c.text.as_str()), Some("nice"));
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn submit_form_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.route, Route::Submit);
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Title here");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.submit.form.title, "Title here");
        assert_eq!(app.submit.focused, crate::submission::FormField::Description);

        type_text(&mut app, "line");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.submit.form.description, "line\n");
    }

    #[test]
    fn ctrl_s_submits_instead_of_navigating() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        handle_key_events(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert_eq!(app.route, Route::Submit);
        assert!(!app.submit.errors.is_empty());
        assert_eq!(
            app.error_message.as_deref(),
            Some("Please fix the highlighted fields.")
        );
    }

    #[test]
    fn invalid_submit_while_editing_shows_the_error() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Editing);
        handle_key_events(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &mut app,
        );
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.error_message.is_some());

        // first key dismisses the message, the next one acts
        press(&mut app, KeyCode::Char('j'));
        assert!(app.error_message.is_none());
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.submit.focused, crate::submission::FormField::Description);
    }

    #[test]
    fn empty_comment_leaves_editing() {
        let mut app = app();
        app.open_sample("1");
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.error_message.as_deref(), Some("Comment cannot be empty."));
    }

    #[test]
    fn any_key_dismisses_messages() {
        let mut app = app();
        app.set_error_message("boom".to_string());
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn unknown_route_enter_goes_home() {
        let mut app = app();
        app.navigate_to(Route::parse("/nowhere"));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Home);
    }
}
