//! Profile screen: user header, then submissions, bookmarks or settings.

use crate::app::{App, ProfileTab};
use crate::models::UserProfile;
use crate::ui::colors::RosePine;
use crate::ui::components::render_sample_card;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

const CARD_HEIGHT: u16 = 8;

const SETTINGS: [(&str, &str); 3] = [
    ("Account Information", "Update your name, email and password."),
    ("Notification Preferences", "Choose which updates reach your inbox."),
    ("Privacy Settings", "Control who can see your submissions and bookmarks."),
];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(8), // Header
        Constraint::Length(1), // Tabs
        Constraint::Fill(1),   // Tab content
    ])
    .split(area);

    let profile = app.store.profile();
    render_header(frame, chunks[0], profile);
    render_tabs(frame, chunks[1], profile, app.profile_view.tab);

    match app.profile_view.tab {
        ProfileTab::Settings => render_settings(frame, chunks[2]),
        ProfileTab::Submissions | ProfileTab::Bookmarks => render_cards(frame, chunks[2], app),
    }
}

fn render_header(frame: &mut Frame, area: Rect, profile: &UserProfile) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let columns = Layout::horizontal([Constraint::Length(9), Constraint::Fill(1)])
        .spacing(2)
        .split(inner);

    Paragraph::new(vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            format!(" {} ", profile.initials()),
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold(),
        )),
    ])
    .alignment(Alignment::Center)
    .render(columns[0], frame.buffer_mut());

    let muted = Style::default().fg(RosePine::MUTED);
    let mut links = Vec::new();
    for (label, url) in profile.social_links.entries() {
        links.push(Span::styled(format!("{}: ", label), Style::default().fg(RosePine::PINE)));
        links.push(Span::styled(url.to_string(), Style::default().fg(RosePine::FOAM)));
        links.push(Span::raw("  "));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(profile.name.clone(), Style::default().fg(RosePine::ROSE).bold()),
            Span::raw("  "),
            Span::styled(profile.handle(), Style::default().fg(RosePine::IRIS)),
        ]),
        Line::from(Span::styled(profile.bio.clone(), Style::default().fg(RosePine::SUBTLE))),
        Line::from(vec![
            Span::styled(format!(" {}", profile.email), muted),
            Span::styled("  │  ", muted),
            Span::styled(profile.joined_label(), muted),
        ]),
        Line::from(links),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(columns[1], frame.buffer_mut());
}

fn tab_label(tab: ProfileTab, profile: &UserProfile) -> String {
    match tab {
        ProfileTab::Submissions => format!("My Submissions ({})", profile.submitted.len()),
        ProfileTab::Bookmarks => format!("My Bookmarks ({})", profile.bookmarked.len()),
        ProfileTab::Settings => "Profile Settings".to_string(),
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, profile: &UserProfile, current: ProfileTab) {
    let mut spans = Vec::new();
    for tab in ProfileTab::ALL {
        let style = if tab == current {
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold()
        } else {
            Style::default().fg(RosePine::SUBTLE)
        };
        spans.push(Span::styled(format!(" {} ", tab_label(tab, profile)), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("[Tab]", Style::default().fg(RosePine::MUTED)));

    Paragraph::new(Line::from(spans)).render(area, frame.buffer_mut());
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
    let records = app.profile_records();
    if records.is_empty() {
        let message = match app.profile_view.tab {
            ProfileTab::Bookmarks => "You haven't bookmarked any samples yet.",
            _ => "You haven't submitted any samples yet. Press [s] to share one.",
        };
        Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(RosePine::MUTED).italic(),
        )))
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
        return;
    }

    let columns = if area.width >= 120 { 3 } else { 2 };
    let rows = records.len().div_ceil(columns);
    let mut row_constraints = vec![Constraint::Length(CARD_HEIGHT); rows];
    row_constraints.push(Constraint::Fill(1));
    let row_areas = Layout::vertical(row_constraints).split(area);

    for (row, chunk) in records.chunks(columns).enumerate() {
        let cells = Layout::horizontal(vec![Constraint::Fill(1); columns])
            .spacing(1)
            .split(row_areas[row]);
        for (col, record) in chunk.iter().enumerate() {
            let selected = row * columns + col == app.profile_view.selected;
            render_sample_card(frame, cells[col], record, selected);
        }
    }
}

fn render_settings(frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .title(" Profile Settings ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let mut lines = Vec::new();
    for (title, description) in SETTINGS {
        lines.push(Line::from(Span::styled(title, Style::default().fg(RosePine::TEXT).bold())));
        lines.push(Line::from(Span::styled(description, Style::default().fg(RosePine::MUTED))));
        lines.push(Line::from(""));
    }

    Paragraph::new(lines).block(block).render(area, frame.buffer_mut());
}
