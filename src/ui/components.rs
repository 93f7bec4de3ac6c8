//! UI Components and Layout Module
//!
//! Reusable pieces shared by every screen: the navigation header, footer, bottom bar
//! with breadcrumbs and shortcuts, sample cards, rating stars and the overlays.

use crate::app::{App, BrowseFocus, InputMode};
use crate::models::SampleRecord;
use crate::rating::RatingControl;
use crate::router::{Route, nav_items};
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const BRAND: &str = "SamplePlatform";

/// Top navigation bar: brand on the left, route links with their shortcut keys on the right
pub fn render_nav_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::horizontal([Constraint::Length(22), Constraint::Fill(1)]).split(inner);

    Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default().fg(RosePine::IRIS)),
        Span::styled(BRAND, Style::default().fg(RosePine::IRIS).bold()),
    ]))
    .render(chunks[0], frame.buffer_mut());

    let mut spans = Vec::new();
    for (label, route, key) in nav_items() {
        let active = is_section_active(&app.route, &route);
        let style = if active {
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold()
        } else {
            Style::default().fg(RosePine::SUBTLE)
        };
        spans.push(Span::styled(format!(" {} {} ", route.icon(), label), style));
        spans.push(Span::styled(
            format!("[{}]  ", key),
            Style::default().fg(RosePine::MUTED),
        ));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .render(chunks[1], frame.buffer_mut());
}

/// Detail pages belong to the Browse section
fn is_section_active(current: &Route, section: &Route) -> bool {
    match (current, section) {
        (Route::SampleDetail { .. }, Route::Browse) => true,
        _ => current == section,
    }
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Utc::now().format("%Y");
    let footer = Line::from(vec![
        Span::styled(
            "Discover and share useful code samples.",
            Style::default().fg(RosePine::MUTED),
        ),
        Span::styled("  │  ", Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        Span::styled(
            format!("© {} {}. All rights reserved.", year, BRAND),
            Style::default().fg(RosePine::MUTED),
        ),
    ]);

    Paragraph::new(footer)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

/// Renders the bottom bar: breadcrumbs on the left, context shortcuts on the right
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left_content = Paragraph::new(breadcrumbs(app))
        .alignment(Alignment::Left)
        .style(Style::default().fg(RosePine::SUBTLE))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

pub fn context_shortcuts(app: &App) -> String {
    let back_hint = if app.can_go_back() {
        " [Esc] Back │"
    } else {
        ""
    };

    if app.input_mode == InputMode::Editing {
        return match app.route {
            Route::Submit => " [Tab] Next Field │ [Ctrl+S] Submit │ [Esc] Done ".to_string(),
            Route::SampleDetail { .. } => " [⏎] Post Comment │ [Esc] Cancel ".to_string(),
            _ => " [⏎] Confirm │ [Esc] Cancel ".to_string(),
        };
    }

    match &app.route {
        Route::Home => format!(
            "{} [/] Search │ [←→] Select │ [⏎] Open │ [?] Help │ [q] Quit ",
            back_hint
        ),
        Route::Browse => match app.browse.focus {
            BrowseFocus::Sidebar => format!(
                "{} [↑↓] Move │ [Space] Toggle │ [←→] Sort │ [Tab] Results │ [[ ]] Page ",
                back_hint
            ),
            BrowseFocus::Results => format!(
                "{} [↑↓] Select │ [⏎] Open │ [Tab] Filters │ [[ ]] Page │ [1-9] Go to ",
                back_hint
            ),
        },
        Route::SampleDetail { .. } => format!(
            "{} [y] Copy │ [1-5] Rate │ [c] Comment │ [Tab] Tabs │ [↑↓] Scroll ",
            back_hint
        ),
        Route::Submit => format!(
            "{} [↑↓] Field │ [⏎] Edit │ [Ctrl+S] Submit │ [?] Help ",
            back_hint
        ),
        Route::Profile => format!(
            "{} [Tab] Tabs │ [↑↓] Select │ [⏎] Open │ [q] Quit ",
            back_hint
        ),
        Route::NotFound { .. } => format!("{} [⏎] Home │ [q] Quit ", back_hint),
    }
}

/// Builds the breadcrumb trail for the current route, the last crumb highlighted
pub fn breadcrumbs(app: &App) -> Line<'static> {
    let active = Style::default().fg(RosePine::BASE).bg(RosePine::IRIS);
    let inactive = Style::default().fg(RosePine::SUBTLE);
    let separator = || Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED));

    let mut spans = Vec::new();

    if app.route == Route::Home {
        spans.push(Span::styled(" 󰋜 Home ", active));
        return Line::from(spans);
    }
    spans.push(Span::styled(" 󰋜 Home ", inactive));
    spans.push(separator());

    match &app.route {
        Route::Browse => spans.push(Span::styled(" Browse ", active)),
        Route::SampleDetail { id } => {
            spans.push(Span::styled(" Browse ", inactive));
            spans.push(separator());
            let title = app
                .store
                .get(id)
                .map(|r| r.title.clone())
                .unwrap_or_else(|| "Sample".to_string());
            spans.push(Span::styled(
                format!(" {} ", truncate(&title, 40)),
                Style::default().fg(RosePine::BASE).bg(RosePine::GOLD),
            ));
        }
        Route::Submit => spans.push(Span::styled(" Submit ", active)),
        Route::Profile => spans.push(Span::styled(" Profile ", active)),
        Route::NotFound { path } => spans.push(Span::styled(
            format!(" {} ", truncate(path, 30)),
            Style::default().fg(RosePine::BASE).bg(RosePine::LOVE),
        )),
        Route::Home => {}
    }

    Line::from(spans)
}

/// Cuts `text` to `max_width` display columns, ending with an ellipsis when shortened
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

/// Five stars for a rating, plus the numeric value
pub fn rating_spans(rating: Option<f32>) -> Vec<Span<'static>> {
    let control = RatingControl::display(rating.unwrap_or(0.0), 5);
    let mut spans = star_spans(&control);
    if let Some(value) = rating {
        spans.push(Span::styled(
            format!(" {:.1}", value),
            Style::default().fg(RosePine::SUBTLE),
        ));
    }
    spans
}

pub fn star_spans(control: &RatingControl) -> Vec<Span<'static>> {
    control
        .stars()
        .into_iter()
        .map(|filled| Span::styled(if filled { "★" } else { "☆" }, Style::default().fg(RosePine::star(filled))))
        .collect()
}

pub fn tag_spans(tags: &[String]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, tag) in tags.iter().enumerate() {
        spans.push(Span::styled(
            format!(" {} ", tag),
            Style::default().fg(RosePine::BASE).bg(RosePine::tag(i)),
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

/// A bordered sample preview card, highlighted when selected
pub fn render_sample_card(frame: &mut Frame, area: Rect, record: &SampleRecord, selected: bool) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::border(selected)))
        .title(Span::styled(
            format!(" {} ", truncate(&record.title, area.width.saturating_sub(6) as usize)),
            if selected {
                Style::default().fg(RosePine::LOVE).bold()
            } else {
                Style::default().fg(RosePine::TEXT).bold()
            },
        ));

    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let author = record.author.as_deref().unwrap_or("Anonymous");
    let mut stats = vec![
        Span::styled(format!(" {}", record.views_or_zero()), Style::default().fg(RosePine::FOAM)),
        Span::raw("  "),
    ];
    stats.extend(rating_spans(record.rating));
    stats.push(Span::raw("  "));
    stats.push(Span::styled(
        format!(" {}", record.comments_count.unwrap_or(0)),
        Style::default().fg(RosePine::IRIS),
    ));

    let lines = vec![
        Line::from(Span::styled(
            format!("by {}", author),
            Style::default().fg(RosePine::SUBTLE).italic(),
        )),
        Line::from(Span::styled(
            record.description.clone(),
            Style::default().fg(RosePine::TEXT),
        )),
        Line::from(tag_spans(&record.tags)),
        Line::from(stats),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, frame.buffer_mut());
}

pub fn render_message_overlay(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let popup_area = spotlight_bar(70, area);

    Clear.render(popup_area, frame.buffer_mut());

    let (icon, color) = if is_error {
        ("✗", RosePine::LOVE)
    } else {
        ("✓", RosePine::FOAM)
    };

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(color).bg(RosePine::SURFACE));
    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let chunks = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(24),
    ])
    .split(inner_area);

    Paragraph::new(icon)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold())
        .render(chunks[0], frame.buffer_mut());

    Paragraph::new(message)
        .style(Style::default().fg(RosePine::TEXT))
        .render(chunks[1], frame.buffer_mut());

    Paragraph::new("Press any key to dismiss")
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .render(chunks[2], frame.buffer_mut());
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 64.min(area.width);
    let height = 22.min(area.height);
    let popup_area = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    Clear.render(popup_area, frame.buffer_mut());

    let block = Block::bordered()
        .title(" 󰘳 Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::OVERLAY));
    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let shortcuts = [
        ("Global", ""),
        ("h / b / s / p", "Home, Browse, Submit, Profile"),
        ("Esc / Backspace", "Back"),
        ("q / Ctrl+C", "Quit"),
        ("Browse", ""),
        ("/", "Edit keyword"),
        ("Tab", "Switch filters / results"),
        ("Space", "Toggle category"),
        ("[ ] / 1-9", "Previous, next, go to page"),
        ("Sample", ""),
        ("y", "Copy code"),
        ("1-5", "Rate (same value clears)"),
        ("c", "Write a comment"),
        ("[ ] ⏎", "Pick and open related sample"),
        ("Submit", ""),
        ("⏎ / Tab", "Edit field / next field"),
        ("Ctrl+S", "Submit sample"),
    ];

    let lines: Vec<Line> = shortcuts
        .iter()
        .map(|(key, action)| {
            if action.is_empty() {
                Line::from(Span::styled(*key, Style::default().fg(RosePine::GOLD).bold()))
            } else {
                Line::from(vec![
                    Span::styled(format!("  {:<18}", key), Style::default().fg(RosePine::FOAM)),
                    Span::styled(*action, Style::default().fg(RosePine::TEXT)),
                ])
            }
        })
        .collect();

    Paragraph::new(lines).render(inner_area, frame.buffer_mut());
}

/// Centered strip three rows from the top, used for status messages
pub fn spotlight_bar(width_percent: u16, r: Rect) -> Rect {
    let layout = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .split(r);

    Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .split(layout[1])[1]
}

/// Boxed single-line text input with a cursor when active
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    active: bool,
) {
    let block = Block::bordered()
        .title(format!(" {} ", title))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::border(active)));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let line = if value.is_empty() && !active {
        Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(RosePine::MUTED).italic(),
        ))
    } else {
        let mut spans = vec![Span::styled(value.to_string(), Style::default().fg(RosePine::TEXT))];
        if active {
            spans.push(Span::styled("▏", Style::default().fg(RosePine::GOLD)));
        }
        Line::from(spans)
    };

    Paragraph::new(line).render(inner, frame.buffer_mut());
}

pub fn render_not_found(frame: &mut Frame, area: Rect, path: &str) {
    let dialog_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(56),
        Constraint::Fill(1),
    ])
    .split(area)[1];

    let dialog_vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(dialog_area)[1];

    let content = vec![
        Line::from(""),
        Line::from(Span::styled("404", Style::default().fg(RosePine::LOVE).bold())),
        Line::from(""),
        Line::from(Span::styled(
            format!("No page at {}", truncate(path, 40)),
            Style::default().fg(RosePine::TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [⏎] to return home",
            Style::default().fg(RosePine::FOAM),
        )),
    ];

    Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title(" Page Not Found ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Double)
                .style(Style::default().fg(RosePine::LOVE)),
        )
        .style(Style::default().bg(RosePine::SURFACE))
        .render(dialog_vertical, frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::SampleStore;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Draggable Kanban Board", 10), "Draggable…");
        assert!(truncate("Draggable Kanban Board", 10).width() <= 10);
    }

    #[test]
    fn breadcrumbs_follow_the_route() {
        let mut app = App::new(Config::default(), SampleStore::seeded());
        let text = |app: &App| -> String {
            breadcrumbs(app).spans.iter().map(|s| s.content.to_string()).collect()
        };
        assert_eq!(text(&app).trim(), "󰋜 Home");

        app.open_sample("105");
        let trail = text(&app);
        assert!(trail.contains("Browse"));
        assert!(trail.contains("Draggable Kanban Board"));
    }

    #[test]
    fn shortcuts_show_back_only_with_history() {
        let mut app = App::new(Config::default(), SampleStore::seeded());
        assert!(!context_shortcuts(&app).contains("Back"));
        app.navigate_to(Route::Browse);
        assert!(context_shortcuts(&app).contains("Back"));
    }
}
