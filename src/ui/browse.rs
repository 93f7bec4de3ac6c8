//! Browse screen: filter sidebar on the left, the current catalog page on the right.

use crate::app::{App, BrowseFocus, InputMode, RATING_CHOICES, SidebarItem};
use crate::catalog::{CatalogPage, PageWindow};
use crate::models::CATEGORIES;
use crate::ui::colors::RosePine;
use crate::ui::components::render_sample_card;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

const CARD_HEIGHT: u16 = 8;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([Constraint::Length(34), Constraint::Fill(1)])
        .spacing(1)
        .split(area);

    render_sidebar(frame, chunks[0], app);

    let page = app.catalog_page();
    render_results(frame, chunks[1], app, &page);
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.browse.focus == BrowseFocus::Sidebar;
    let block = Block::bordered()
        .title(" 󰈲 Filters ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::border(focused)));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let current = app.browse.sidebar_item();
    let row_style = |item: SidebarItem| {
        if focused && item == current {
            Style::default().fg(RosePine::LOVE).bg(RosePine::HIGHLIGHT_LOW).bold()
        } else {
            Style::default().fg(RosePine::TEXT)
        }
    };
    let heading = |text: &'static str| {
        Line::from(Span::styled(text, Style::default().fg(RosePine::GOLD).bold()))
    };

    let editing = app.input_mode == InputMode::Editing;
    let keyword = if app.browse.keyword_input.is_empty() && !editing {
        Span::styled("type / to search", Style::default().fg(RosePine::MUTED).italic())
    } else {
        Span::styled(app.browse.keyword_input.clone(), row_style(SidebarItem::Keyword))
    };
    let mut keyword_line = vec![Span::styled(" ", row_style(SidebarItem::Keyword)), keyword];
    if editing {
        keyword_line.push(Span::styled("▏", Style::default().fg(RosePine::GOLD)));
    }

    let mut lines = vec![heading("Keyword"), Line::from(keyword_line), Line::from(""), heading("Categories")];

    for (i, category) in CATEGORIES.iter().enumerate() {
        let checked = app.query.is_selected(category.id);
        let mark = if checked { "[x]" } else { "[ ]" };
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", mark),
                Style::default().fg(if checked { RosePine::FOAM } else { RosePine::MUTED }),
            ),
            Span::styled(category.label, row_style(SidebarItem::Category(i))),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(heading("Sort By"));
    lines.push(Line::from(Span::styled(
        format!(" ◂ {} ▸", app.query.sort.label()),
        row_style(SidebarItem::Sort),
    )));

    lines.push(Line::from(""));
    lines.push(heading("Rating"));
    for (i, label) in RATING_CHOICES.iter().enumerate() {
        let mark = if app.browse.rating_choice == i { "(•)" } else { "( )" };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", mark), Style::default().fg(RosePine::IRIS)),
            Span::styled(*label, row_style(SidebarItem::Rating(i))),
        ]));
    }

    Paragraph::new(lines).render(inner, frame.buffer_mut());
}

fn render_results(frame: &mut Frame, area: Rect, app: &App, page: &CatalogPage) {
    let focused = app.browse.focus == BrowseFocus::Results;
    let window = page.window();

    let chunks = Layout::vertical([
        Constraint::Length(2), // Header
        Constraint::Fill(1),   // Cards
        Constraint::Length(if window.is_visible() { 1 } else { 0 }),
    ])
    .split(area);

    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("Code Samples ({})", page.total_matching),
                Style::default().fg(RosePine::ROSE).bold(),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Sorted by {} · Page {} of {}",
                app.query.sort.label(),
                page.page,
                page.total_pages
            ),
            Style::default().fg(RosePine::MUTED),
        )),
    ])
    .render(chunks[0], frame.buffer_mut());

    if page.is_empty() {
        render_empty_state(frame, chunks[1]);
    } else {
        render_card_grid(frame, chunks[1], app, page, focused);
    }

    if window.is_visible() {
        render_pagination(frame, chunks[2], &window);
    }
}

fn render_card_grid(frame: &mut Frame, area: Rect, app: &App, page: &CatalogPage, focused: bool) {
    let columns = if area.width >= 120 { 3 } else { 2 };
    let rows = page.items.len().div_ceil(columns);

    let mut row_constraints = vec![Constraint::Length(CARD_HEIGHT); rows];
    row_constraints.push(Constraint::Fill(1));
    let row_areas = Layout::vertical(row_constraints).split(area);

    for (row, chunk) in page.items.chunks(columns).enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Fill(1); columns])
            .spacing(1)
            .split(row_areas[row]);
        for (col, record) in chunk.iter().enumerate() {
            let index = row * columns + col;
            let selected = focused && index == app.browse.selected_card;
            render_sample_card(frame, cells[col], record, selected);
        }
    }
}

fn render_empty_state(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "No Samples Found",
            Style::default().fg(RosePine::LOVE).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Try adjusting your search or filters.",
            Style::default().fg(RosePine::SUBTLE),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

fn render_pagination(frame: &mut Frame, area: Rect, window: &PageWindow) {
    let enabled = |on: bool| {
        if on {
            Style::default().fg(RosePine::FOAM)
        } else {
            Style::default().fg(RosePine::HIGHLIGHT_HIGH)
        }
    };

    let mut spans = vec![Span::styled("‹ Previous [[]  ", enabled(window.has_previous))];

    for page in &window.pages {
        let style = if *page == window.current {
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold()
        } else {
            Style::default().fg(RosePine::SUBTLE)
        };
        spans.push(Span::styled(format!(" {} ", page), style));
        spans.push(Span::raw(" "));
    }
    if window.show_ellipsis {
        spans.push(Span::styled("… ", Style::default().fg(RosePine::MUTED)));
    }
    spans.push(Span::styled(" []] Next ›", enabled(window.has_next)));

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}
