//! Sample detail screen.
//!
//! Header with author, tags and stats; a syntax highlighted code viewer with line
//! numbers; Comments / FAQ / More Details tabs; and a sidebar with the rating control,
//! the author card and related samples.

use crate::app::{App, DetailTab, InputMode};
use crate::models::{SampleDetail, SampleLanguage};
use crate::ui::colors::RosePine;
use crate::ui::components::{rating_spans, star_spans, tag_spans, truncate};
use once_cell::sync::Lazy;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Widget,
        Wrap,
    },
};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

const THEME_NAME: &str = "base16-mocha.dark";

pub fn render(frame: &mut Frame, area: Rect, app: &mut App, id: &str) {
    let Some(detail) = app.resolve_detail(id) else {
        render_missing(frame, area, id);
        return;
    };

    let columns = Layout::horizontal([Constraint::Fill(1), Constraint::Length(36)])
        .spacing(1)
        .split(area);

    let main = Layout::vertical([
        Constraint::Length(5), // Header
        Constraint::Min(8),    // Code viewer
        Constraint::Length(1), // Tabs
        Constraint::Length(9), // Tab content
    ])
    .split(columns[0]);

    render_header(frame, main[0], &detail);
    let viewport = main[1].height.saturating_sub(2) as usize;
    app.detail.code_viewport = viewport;
    app.detail.scroll = app
        .detail
        .scroll
        .min(detail.line_count().saturating_sub(viewport.max(1)));
    render_code_viewer(frame, main[1], &detail, app.detail.scroll);
    render_tabs(frame, main[2], &detail, app.detail.tab);
    render_tab_content(frame, main[3], &detail, app);

    let sidebar = Layout::vertical([
        Constraint::Length(5), // Rating
        Constraint::Length(8), // Author
        Constraint::Fill(1),   // Related
    ])
    .split(columns[1]);

    render_rating(frame, sidebar[0], &detail, app);
    render_author(frame, sidebar[1], &detail);
    render_related(frame, sidebar[2], &detail, app.detail.selected_related);
}

fn render_missing(frame: &mut Frame, area: Rect, id: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sample not found",
            Style::default().fg(RosePine::LOVE).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("There is no sample with id \"{}\".", truncate(id, 30)),
            Style::default().fg(RosePine::SUBTLE),
        )),
        Line::from(Span::styled(
            "Press [b] to browse all samples.",
            Style::default().fg(RosePine::FOAM),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::LOVE)),
        )
        .render(area, frame.buffer_mut());
}

fn render_header(frame: &mut Frame, area: Rect, detail: &SampleDetail) {
    let record = &detail.record;
    let muted = Style::default().fg(RosePine::MUTED);

    let mut stats = vec![
        Span::styled(format!(" {} views", record.views_or_zero()), Style::default().fg(RosePine::FOAM)),
        Span::styled("  │  ", muted),
    ];
    stats.extend(rating_spans(record.rating));
    stats.push(Span::styled(format!(" ({} ratings)", detail.total_ratings), muted));

    let lines = vec![
        Line::from(Span::styled(
            record.title.clone(),
            Style::default().fg(RosePine::ROSE).bold(),
        )),
        Line::from(vec![
            Span::styled(format!("By {}", detail.author.name), Style::default().fg(RosePine::TEXT)),
            Span::styled("  │  ", muted),
            Span::styled(detail.created_at.format("%Y-%m-%d").to_string(), muted),
        ]),
        Line::from(tag_spans(&record.tags)),
        Line::from(stats),
        Line::from(Span::styled(
            detail.long_description.clone(),
            Style::default().fg(RosePine::SUBTLE),
        )),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(area, frame.buffer_mut());
}

/// Highlighted, line-numbered view of the code, scrolled to `scroll`
fn render_code_viewer(frame: &mut Frame, area: Rect, detail: &SampleDetail, scroll: usize) {
    let title = match &detail.file_name {
        Some(name) => format!(" {} {} · {} ", detail.language.icon(), name, detail.language.display_name()),
        None => format!(" {} {} ", detail.language.icon(), detail.language.display_name()),
    };

    let block = Block::bordered()
        .title(title)
        .title_bottom(Line::from(" [y] Copy ").right_aligned())
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH).bg(RosePine::SURFACE));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let lines: Vec<&str> = detail.code.lines().collect();
    let total_lines = lines.len();
    let visible_lines = inner.height as usize;
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll_position = scroll.min(max_scroll);

    let content_area = Rect {
        width: inner.width.saturating_sub(1),
        ..inner
    };
    let scrollbar_area = Rect {
        x: inner.x + inner.width.saturating_sub(1),
        width: inner.width.min(1),
        ..inner
    };

    let gutter = total_lines.to_string().len().max(3);
    let styled = highlight_code(&detail.code, &detail.language);
    let visible: Vec<Line> = styled
        .into_iter()
        .enumerate()
        .skip(scroll_position)
        .take(visible_lines)
        .map(|(index, spans)| {
            let mut line = vec![Span::styled(
                format!("{:>width$} │ ", index + 1, width = gutter),
                Style::default().fg(RosePine::MUTED).bg(RosePine::SURFACE),
            )];
            line.extend(spans);
            Line::from(line)
        })
        .collect();

    Paragraph::new(visible).render(content_area, frame.buffer_mut());

    if total_lines > visible_lines {
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll + 1)
            .position(scroll_position);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .style(Style::default().fg(RosePine::SUBTLE))
            .thumb_style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

/// One vector of styled spans per source line
pub fn highlight_code(code: &str, language: &SampleLanguage) -> Vec<Vec<Span<'static>>> {
    let syntax = SYNTAX_SET
        .find_syntax_by_name(language.syntax_name())
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let Some(theme) = THEME_SET.themes.get(THEME_NAME) else {
        return code
            .lines()
            .map(|line| vec![Span::styled(line.to_string(), Style::default().fg(RosePine::TEXT))])
            .collect();
    };

    let mut highlighter = HighlightLines::new(syntax, theme);

    LinesWithEndings::from(code)
        .map(|line| match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => ranges
                .into_iter()
                .map(|(style, text)| {
                    let fg = style.foreground;
                    Span::styled(
                        text.trim_end_matches(['\n', '\r']).to_string(),
                        Style::default()
                            .fg(Color::Rgb(fg.r, fg.g, fg.b))
                            .bg(RosePine::SURFACE),
                    )
                })
                .collect(),
            Err(_) => vec![Span::styled(
                line.trim_end().to_string(),
                Style::default().fg(RosePine::TEXT),
            )],
        })
        .collect()
}

fn tab_label(tab: DetailTab, detail: &SampleDetail) -> String {
    match tab {
        DetailTab::Comments => format!("Comments ({})", detail.record.comments_count.unwrap_or(0)),
        DetailTab::Faq => format!("FAQ ({})", detail.faq.len()),
        DetailTab::MoreDetails => "More Details".to_string(),
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, detail: &SampleDetail, current: DetailTab) {
    let mut spans = Vec::new();
    for tab in DetailTab::ALL {
        let style = if tab == current {
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS).bold()
        } else {
            Style::default().fg(RosePine::SUBTLE)
        };
        spans.push(Span::styled(format!(" {} ", tab_label(tab, detail)), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("[Tab]", Style::default().fg(RosePine::MUTED)));

    Paragraph::new(Line::from(spans)).render(area, frame.buffer_mut());
}

fn render_tab_content(frame: &mut Frame, area: Rect, detail: &SampleDetail, app: &App) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    match app.detail.tab {
        DetailTab::Comments => {
            let editing = app.input_mode == InputMode::Editing;
            let block = block.title(" Community Discussion ");
            let inner = block.inner(area);
            block.render(area, frame.buffer_mut());

            let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(inner);

            let mut lines = Vec::new();
            for comment in detail.comments.iter().rev() {
                lines.push(Line::from(vec![
                    Span::styled(comment.user.clone(), Style::default().fg(RosePine::FOAM).bold()),
                    Span::styled(
                        format!("  {}  ♥ {}", comment.formatted_date(), comment.likes),
                        Style::default().fg(RosePine::MUTED),
                    ),
                ]));
                lines.push(Line::from(Span::styled(
                    comment.text.clone(),
                    Style::default().fg(RosePine::TEXT),
                )));
            }
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No comments yet. Be the first to share your thoughts!",
                    Style::default().fg(RosePine::MUTED).italic(),
                )));
            }
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .render(chunks[0], frame.buffer_mut());

            let input = if editing {
                Line::from(vec![
                    Span::styled("› ", Style::default().fg(RosePine::GOLD)),
                    Span::styled(app.detail.comment_input.clone(), Style::default().fg(RosePine::TEXT)),
                    Span::styled("▏", Style::default().fg(RosePine::GOLD)),
                ])
            } else {
                Line::from(Span::styled(
                    "[c] Write your thoughts, questions, or feedback...",
                    Style::default().fg(RosePine::MUTED).italic(),
                ))
            };
            Paragraph::new(input).render(chunks[1], frame.buffer_mut());
        }
        DetailTab::Faq => {
            let mut lines = Vec::new();
            for entry in &detail.faq {
                lines.push(Line::from(Span::styled(
                    format!("Q: {}", entry.question),
                    Style::default().fg(RosePine::GOLD).bold(),
                )));
                lines.push(Line::from(Span::styled(
                    entry.answer.clone(),
                    Style::default().fg(RosePine::TEXT),
                )));
            }
            if lines.is_empty() {
                lines.push(Line::from(Span::styled(
                    "No questions have been asked about this sample yet.",
                    Style::default().fg(RosePine::MUTED).italic(),
                )));
            }
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(block.title(" Frequently Asked Questions "))
                .render(area, frame.buffer_mut());
        }
        DetailTab::MoreDetails => {
            let label = Style::default().fg(RosePine::IRIS).bold();
            let value = Style::default().fg(RosePine::TEXT);
            let row = |name: &'static str, text: String| {
                Line::from(vec![Span::styled(format!("{:<14}", name), label), Span::styled(text, value)])
            };
            let lines = vec![
                row("Last Updated", detail.updated_at.format("%Y-%m-%d %H:%M").to_string()),
                row("Language", detail.language.display_name().to_string()),
                row("Lines", detail.line_count().to_string()),
                row("License", "MIT (example)".to_string()),
                row("Dependencies", "react, typescript (example)".to_string()),
            ];
            Paragraph::new(lines)
                .block(block.title(" Additional Details "))
                .render(area, frame.buffer_mut());
        }
    }
}

fn render_rating(frame: &mut Frame, area: Rect, detail: &SampleDetail, app: &App) {
    let block = Block::bordered()
        .title(" Rate this sample ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let control = &app.detail.rating;
    let mut stars = star_spans(control);
    stars.push(Span::styled(
        format!("  {}/{}", control.value(), control.max()),
        Style::default().fg(RosePine::SUBTLE),
    ));

    let hint = if control.is_read_only() {
        format!("Average {:.1}", detail.record.rating_or_zero())
    } else {
        format!("Average {:.1} · press 1-{}", detail.record.rating_or_zero(), control.max())
    };
    let lines = vec![
        Line::from(stars),
        Line::from(Span::styled(hint, Style::default().fg(RosePine::MUTED))),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block)
        .render(area, frame.buffer_mut());
}

fn render_author(frame: &mut Frame, area: Rect, detail: &SampleDetail) {
    let block = Block::bordered()
        .title(" About the Author ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let lines = vec![
        Line::from(Span::styled(
            detail.author.name.clone(),
            Style::default().fg(RosePine::ROSE).bold(),
        )),
        Line::from(Span::styled(
            format!("Joined {}", detail.created_at.format("%Y")),
            Style::default().fg(RosePine::MUTED),
        )),
        Line::from(Span::styled(
            detail.author.bio.clone(),
            Style::default().fg(RosePine::SUBTLE),
        )),
        Line::from(Span::styled(
            format!("/profile/{}", detail.author.profile_slug()),
            Style::default().fg(RosePine::PINE),
        )),
    ];

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, frame.buffer_mut());
}

fn render_related(frame: &mut Frame, area: Rect, detail: &SampleDetail, selected: usize) {
    let block = Block::bordered()
        .title(" Related Samples ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let mut lines = Vec::new();
    for (i, related) in detail.related.iter().enumerate() {
        let style = if i == selected {
            Style::default().fg(RosePine::LOVE).bold()
        } else {
            Style::default().fg(RosePine::FOAM)
        };
        let marker = if i == selected { "▶ " } else { "  " };
        lines.push(Line::from(Span::styled(format!("{}{}", marker, related.title), style)));
        lines.push(Line::from(Span::styled(
            format!("  by {}", related.author),
            Style::default().fg(RosePine::MUTED),
        )));
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing related yet.",
            Style::default().fg(RosePine::MUTED).italic(),
        )));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(block)
        .render(area, frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlighting_keeps_one_entry_per_line() {
        let code = "const a = 1;\nconst b = 2;\n\nexport { a, b };";
        let lines = highlight_code(code, &SampleLanguage::TypeScript);
        assert_eq!(lines.len(), 4);
        let first: String = lines[0].iter().map(|s| s.content.to_string()).collect();
        assert_eq!(first, "const a = 1;");
    }

    #[test]
    fn unknown_languages_fall_back_to_plain_text() {
        let lines = highlight_code("x := 1", &SampleLanguage::Other("go".into()));
        let text: String = lines[0].iter().map(|s| s.content.to_string()).collect();
        assert_eq!(text, "x := 1");
    }
}
