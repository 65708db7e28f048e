use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, ClickAction, Tab};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans: Vec<Span> = vec![
        Span::styled(
            " vantageflow ",
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(app.theme.border)),
    ];

    let mut x_offset = inner.x + 15;

    for tab in Tab::all() {
        let is_active = *tab == app.current_tab;
        let label = format!(" {} ", tab.as_str());
        let label_width = label.chars().count() as u16;

        let style = if is_active {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.muted)
        };

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));

        app.add_click_area(
            Rect::new(x_offset, inner.y, label_width, 1),
            ClickAction::Tab(*tab),
        );
        x_offset += label_width + 1;
    }

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line), inner);

    // Reference date on the right edge
    let date_text = app.data_loader.today().format("%a %b %e, %Y").to_string();
    let date_width = date_text.chars().count() as u16;
    if inner.width > date_width + 1 {
        let date_area = Rect::new(
            inner.x + inner.width - date_width - 1,
            inner.y,
            date_width,
            1,
        );
        frame.render_widget(
            Paragraph::new(date_text).style(Style::default().fg(app.theme.muted)),
            date_area,
        );
    }
}
