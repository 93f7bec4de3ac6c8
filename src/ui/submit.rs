use crate::app::{App, InputMode};
use crate::submission::{FormField, SubmissionStatus};
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

/// Rows each field takes, label and help included
fn field_height(field: FormField) -> u16 {
    match field {
        FormField::Code => 10,
        FormField::Description => 6,
        _ => 4,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let form_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(100),
        Constraint::Fill(1),
    ])
    .split(area)[1];

    let mut constraints = vec![Constraint::Length(3), Constraint::Length(1)];
    constraints.extend(FormField::ALL.iter().map(|f| Constraint::Length(field_height(*f))));
    constraints.push(Constraint::Fill(1));
    let chunks = Layout::vertical(constraints).split(form_area);

    render_heading(frame, chunks[0]);
    render_status(frame, chunks[1], &app.submit.status);

    let editing = app.input_mode == InputMode::Editing;
    for (i, field) in FormField::ALL.iter().enumerate() {
        render_field(frame, chunks[i + 2], app, *field, editing);
    }
}

fn render_heading(frame: &mut Frame, area: Rect) {
    Paragraph::new(vec![
        Line::from(Span::styled(
            "Submit a New Code Sample",
            Style::default().fg(RosePine::ROSE).bold(),
        )),
        Line::from(Span::styled(
            "Share your React expertise with the community.",
            Style::default().fg(RosePine::SUBTLE),
        )),
        Line::from(Span::styled(
            "[Tab] next field · [i] edit · [Ctrl+S] submit",
            Style::default().fg(RosePine::MUTED),
        )),
    ])
    .alignment(Alignment::Center)
    .render(area, frame.buffer_mut());
}

fn render_status(frame: &mut Frame, area: Rect, status: &SubmissionStatus) {
    let line = match status {
        SubmissionStatus::Idle => return,
        SubmissionStatus::Submitting => Line::from(Span::styled(
            "󰔟 Submitting...",
            Style::default().fg(RosePine::GOLD).bold(),
        )),
        SubmissionStatus::Success(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(RosePine::FOAM).bold(),
        )),
        SubmissionStatus::Error(message) => Line::from(Span::styled(
            format!(" {}", message),
            Style::default().fg(RosePine::LOVE).bold(),
        )),
    };

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

fn render_field(frame: &mut Frame, area: Rect, app: &App, field: FormField, editing: bool) {
    let state = &app.submit;
    let focused = state.focused == field;
    let active = focused && editing;
    let error = state.errors.get(&field);

    let border = if error.is_some() {
        RosePine::LOVE
    } else {
        RosePine::border(focused)
    };

    let label_style = if focused {
        Style::default().fg(RosePine::LOVE).bold()
    } else {
        Style::default().fg(RosePine::TEXT).bold()
    };

    let block = Block::bordered()
        .title(Span::styled(format!(" {} ", field.label()), label_style))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(border));

    let bottom = match error {
        Some(message) => Span::styled(format!(" {} ", message), Style::default().fg(RosePine::LOVE)),
        None => Span::styled(format!(" {} ", field.help()), Style::default().fg(RosePine::MUTED)),
    };
    let block = block.title_bottom(Line::from(bottom));

    let value = state.form.value(field);
    let mut lines: Vec<Line> = if value.is_empty() && !active {
        vec![Line::from(Span::styled(
            field.placeholder(),
            Style::default().fg(RosePine::MUTED).italic(),
        ))]
    } else {
        value
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(RosePine::TEXT))))
            .collect()
    };

    if active {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▏", Style::default().fg(RosePine::GOLD)));
        }
    }

    // Keep the cursor line visible in multi-line fields
    let visible = area.height.saturating_sub(2) as usize;
    let skip = lines.len().saturating_sub(visible.max(1));

    let paragraph = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>()).block(block);
    let paragraph = if field.is_multiline() {
        paragraph.wrap(Wrap { trim: false })
    } else {
        paragraph
    };
    paragraph.render(area, frame.buffer_mut());
}
