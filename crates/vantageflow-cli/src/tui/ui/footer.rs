use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::widgets::{format_count, stream_color};
use crate::tui::app::{App, Tab};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let row_constraints = if inner.height >= 2 {
        vec![Constraint::Length(1), Constraint::Length(1)]
    } else {
        vec![Constraint::Length(1)]
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(inner);

    render_help_row(frame, app, rows[0]);

    if rows.len() >= 2 {
        render_status_row(frame, app, rows[1]);
    }
}

fn render_help_row(frame: &mut Frame, app: &App, area: Rect) {
    let is_very_narrow = app.is_very_narrow();

    let spans = if is_very_narrow {
        vec![
            Span::styled("←→", Style::default().fg(app.theme.muted)),
            Span::styled("·", Style::default().fg(app.theme.muted)),
            Span::styled("v", Style::default().fg(app.theme.muted)),
            Span::styled("·", Style::default().fg(app.theme.muted)),
            Span::styled("[]", Style::default().fg(app.theme.muted)),
            Span::styled("·", Style::default().fg(app.theme.muted)),
            Span::styled("[p]", Style::default().fg(Color::Magenta)),
            Span::styled("·", Style::default().fg(app.theme.muted)),
            Span::styled("[r]", Style::default().fg(Color::Yellow)),
            Span::styled("·", Style::default().fg(app.theme.muted)),
            Span::styled("q", Style::default().fg(app.theme.muted)),
        ]
    } else {
        let mut spans = vec![Span::styled(
            "←→/tab view • ↑↓ scroll • y copy • ",
            Style::default().fg(app.theme.muted),
        )];
        if app.current_tab == Tab::Grid {
            spans.push(Span::styled(
                format!("[v:{}]", app.view_mode.as_str()),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                " [/] page • 0 reset • ",
                Style::default().fg(app.theme.muted),
            ));
        }
        spans.push(Span::styled(
            format!("[p:{}]", app.theme.name.as_str()),
            Style::default().fg(Color::Magenta),
        ));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled("[r:refresh]", Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(
            " • e export • q quit",
            Style::default().fg(app.theme.muted),
        ));
        spans
    };

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left = if let Some(ref msg) = app.status_message {
        Line::from(Span::styled(
            msg.clone(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("reference date: {}", app.data_loader.today()),
            Style::default().fg(app.theme.muted),
        ))
    };
    frame.render_widget(Paragraph::new(left), chunks[0]);

    let right = Line::from(vec![
        Span::styled(
            format_count(app.data.stats.total),
            Style::default().fg(stream_color("activity")),
        ),
        Span::styled(" done | ", Style::default().fg(app.theme.muted)),
        Span::styled(
            format_count(app.data.open_due),
            Style::default().fg(stream_color("due")),
        ),
        Span::styled(" due | ", Style::default().fg(app.theme.muted)),
        Span::styled(
            format_count(app.data.open_overdue),
            Style::default()
                .fg(stream_color("overdue"))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" overdue", Style::default().fg(app.theme.muted)),
    ]);
    frame.render_widget(
        Paragraph::new(right).alignment(Alignment::Right),
        chunks[1],
    );
}
