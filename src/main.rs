//! SampleDeck - Code Sample Sharing
//!
//! A terminal-based interface for discovering and sharing reusable React code
//! samples. Built with Rust and ratatui.
//!
//! SampleDeck lets developers:
//! - Browse the catalog with keyword search, category filters, sorting and pagination
//! - Read samples with highlighted code, comments and FAQ
//! - Submit new samples through a validated form
//! - Review their own submissions and bookmarks

use crate::app::App;
use crate::config::Config;
use crate::logging::LogTarget;
use crate::models::SampleStore;
use crate::router::Route;
use color_eyre::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io::{self};
use std::time::Duration;
use tracing::{info, warn};

mod app;
mod cache;
mod catalog;
mod cli;
mod clipboard;
mod config;
mod handlers;
mod logging;
mod models;
mod rating;
mod router;
mod submission;
mod ui;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let start = match args.first().map(String::as_str) {
        None => Some(Route::Home),
        Some("open") => Some(Route::parse(args.get(1).map(String::as_str).unwrap_or("/"))),
        Some(_) => None,
    };

    let target = if start.is_some() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = logging::init(&config.logging.level, target) {
        eprintln!("Logging disabled: {:#}", e);
    }
    if let Some(e) = config_error {
        warn!(error = %e, "falling back to default configuration");
    }

    match start {
        Some(route) => run_tui(config, route),
        None => cli::execute_cli(&args, &config).map_err(|e| color_eyre::eyre::eyre!("{:#}", e)),
    }
}

/// Initializes the terminal, runs the main loop starting at `route`, and restores
/// the terminal afterwards
fn run_tui(config: Config, route: Route) -> Result<()> {
    info!(%route, "starting tui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_route(config, SampleStore::seeded(), route);
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("tui closed");
    result
}

fn run_loop<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut should_quit = false;

    while !should_quit {
        if app.needs_redraw {
            force_redraw(terminal, app)?;
            app.needs_redraw = false;
        } else {
            terminal.draw(|frame| app.render(frame))?;
        }
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                should_quit = handlers::keys::handle_key_events(key, app);
                if app.needs_redraw {
                    force_redraw(terminal, app)?;
                    app.needs_redraw = false;
                }
            }
        }
        app.tick();
    }

    Ok(())
}

/// Forces a complete redraw of the terminal UI, used after a route change
fn force_redraw<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.clear()?;
    terminal.draw(|frame| app.render(frame))?;

    Ok(())
}
