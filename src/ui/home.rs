//! Home screen: hero with search, trending samples and the contribute call to action.

use crate::app::{App, InputMode};
use crate::ui::colors::RosePine;
use crate::ui::components::{render_input, render_sample_card};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Top padding
        Constraint::Length(1), // Title
        Constraint::Length(2), // Tagline
        Constraint::Length(3), // Search box
        Constraint::Length(1),
        Constraint::Length(2), // Trending header
        Constraint::Length(9), // Featured cards
        Constraint::Length(1),
        Constraint::Length(3), // Call to action
        Constraint::Fill(1),
    ])
    .split(area);

    render_hero(frame, chunks[1], chunks[2]);

    let search_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(72),
        Constraint::Fill(1),
    ])
    .split(chunks[3])[1];
    render_input(
        frame,
        search_area,
        " Search",
        &app.home.search_input,
        "Search for samples (e.g., 'custom hook', 'modal component')... [/]",
        app.input_mode == InputMode::Editing,
    );

    render_trending(frame, chunks[5], chunks[6], app);
    render_call_to_action(frame, chunks[8]);
}

fn render_hero(frame: &mut Frame, title_area: Rect, tagline_area: Rect) {
    Paragraph::new(Line::from(vec![
        Span::styled("Discover & Share ", Style::default().fg(RosePine::TEXT).bold()),
        Span::styled("React Code Samples", Style::default().fg(RosePine::ROSE).bold()),
    ]))
    .alignment(Alignment::Center)
    .render(title_area, frame.buffer_mut());

    Paragraph::new(
        "Your go-to platform for high-quality, reusable React components and snippets. \
         Find inspiration, solve problems, and contribute to the community.",
    )
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .style(Style::default().fg(RosePine::SUBTLE).italic())
    .render(tagline_area, frame.buffer_mut());
}

fn render_trending(frame: &mut Frame, header_area: Rect, cards_area: Rect, app: &App) {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Trending Samples",
            Style::default().fg(RosePine::GOLD).bold(),
        )),
        Line::from(Span::styled(
            "Explore some of the most popular and highly-rated code samples contributed by our community.",
            Style::default().fg(RosePine::MUTED),
        )),
    ])
    .alignment(Alignment::Center)
    .render(header_area, frame.buffer_mut());

    let featured = app.store.featured();
    if featured.is_empty() {
        return;
    }

    let constraints = vec![Constraint::Fill(1); featured.len()];
    let columns = Layout::horizontal(constraints).spacing(1).split(cards_area);

    for (i, (record, column)) in featured.iter().zip(columns.iter()).enumerate() {
        render_sample_card(frame, *column, record, i == app.home.selected_featured);
    }
}

fn render_call_to_action(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Browse All Samples ", Style::default().fg(RosePine::FOAM).bold()),
            Span::styled("[b]", Style::default().fg(RosePine::MUTED)),
        ]),
        Line::from(vec![
            Span::styled("Ready to Contribute? ", Style::default().fg(RosePine::TEXT).bold()),
            Span::styled(
                "Share your knowledge and help fellow developers. ",
                Style::default().fg(RosePine::SUBTLE),
            ),
        ]),
        Line::from(vec![
            Span::styled("Submit Your Sample ", Style::default().fg(RosePine::LOVE).bold()),
            Span::styled("[s]", Style::default().fg(RosePine::MUTED)),
        ]),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}
