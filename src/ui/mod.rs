//! User Interface Module
//!
//! Every screen shares the same chrome: navigation header, the route's content, a
//! footer line and the bottom bar. Status messages and the help menu draw on top.

pub mod browse;
pub mod colors;
pub mod components;
pub mod detail;
pub mod home;
pub mod profile;
pub mod submit;

use crate::app::{App, InputMode};
use crate::router::Route;
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    style::Style,
    widgets::{Block, BorderType, Widget},
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let main_area = frame.area();

    let block = Block::bordered()
        .title(format!(" {} ─ {} ", components::BRAND, app.route.title()))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH).bg(RosePine::BASE));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Navigation header
        Constraint::Fill(1),   // Route content
        Constraint::Length(1), // Footer
        Constraint::Length(3), // Bottom bar
    ])
    .split(inner_area);

    components::render_nav_header(frame, chunks[0], app);

    match app.route.clone() {
        Route::Home => home::render(frame, chunks[1], app),
        Route::Browse => browse::render(frame, chunks[1], app),
        Route::SampleDetail { id } => detail::render(frame, chunks[1], app, &id),
        Route::Submit => submit::render(frame, chunks[1], app),
        Route::Profile => profile::render(frame, chunks[1], app),
        Route::NotFound { path } => components::render_not_found(frame, chunks[1], &path),
    }

    components::render_footer(frame, chunks[2]);
    components::render_bottom_bar(frame, chunks[3], app);

    match app.input_mode {
        InputMode::HelpMenu => components::render_help_overlay(frame, main_area),
        InputMode::Normal => {
            if let Some(message) = &app.error_message {
                components::render_message_overlay(frame, main_area, message, true);
            } else if let Some(message) = &app.success_message {
                components::render_message_overlay(frame, main_area, message, false);
            }
        }
        InputMode::Editing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::SampleStore;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(app: &mut App, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn contents(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_at(route: &str) -> App {
        App::with_route(Config::default(), SampleStore::seeded(), Route::parse(route))
    }

    #[test]
    fn home_renders_hero_and_featured() {
        let mut app = app_at("/");
        let screen = contents(&draw(&mut app, 140, 48));
        assert!(screen.contains("Trending Samples"));
        assert!(screen.contains("React Custom Hook"));
    }

    #[test]
    fn browse_renders_count_and_pagination() {
        let mut app = app_at("/browse");
        let screen = contents(&draw(&mut app, 160, 50));
        assert!(screen.contains("Code Samples (11)"));
        assert!(screen.contains("Page 1 of 2"));
    }

    #[test]
    fn browse_renders_empty_state() {
        let mut app = app_at("/browse");
        app.dispatch(crate::catalog::CatalogEvent::KeywordChanged("no such thing".into()));
        let screen = contents(&draw(&mut app, 160, 50));
        assert!(screen.contains("No Samples Found"));
    }

    #[test]
    fn detail_renders_code_and_tabs() {
        let mut app = app_at("/sample/1");
        let screen = contents(&draw(&mut app, 160, 60));
        assert!(screen.contains("useFetcher.ts"));
        assert!(screen.contains("Comments (15)"));
        assert!(screen.contains("Jane Developer"));
    }

    #[test]
    fn unknown_sample_renders_not_found_panel() {
        let mut app = app_at("/sample/999");
        let screen = contents(&draw(&mut app, 120, 40));
        assert!(screen.contains("Sample not found"));
    }

    #[test]
    fn submit_renders_fields() {
        let mut app = app_at("/submit");
        let screen = contents(&draw(&mut app, 140, 60));
        assert!(screen.contains("Sample Title"));
        assert!(screen.contains("Code Snippet"));
    }

    #[test]
    fn profile_renders_header_and_tabs() {
        let mut app = app_at("/profile");
        let screen = contents(&draw(&mut app, 140, 48));
        assert!(screen.contains("Alex Johnson"));
        assert!(screen.contains("My Submissions (2)"));
    }

    #[test]
    fn unknown_path_renders_404() {
        let mut app = app_at("/nowhere");
        let screen = contents(&draw(&mut app, 120, 40));
        assert!(screen.contains("Page Not Found"));
        assert!(screen.contains("/nowhere"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        for route in ["/", "/browse", "/sample/1", "/submit", "/profile", "/x"] {
            let mut app = app_at(route);
            draw(&mut app, 20, 8);
        }
    }

    #[test]
    fn messages_render_on_top() {
        let mut app = app_at("/");
        app.set_success_message("Copied!".to_string());
        let screen = contents(&draw(&mut app, 120, 40));
        assert!(screen.contains("Copied!"));
        assert!(screen.contains("Press any key to dismiss"));
    }
}
