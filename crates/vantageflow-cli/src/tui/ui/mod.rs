mod daily;
mod footer;
mod grid;
mod header;
mod heatmap;
mod widgets;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Tab};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    app.clear_click_areas();
    app.handle_resize(area.width, area.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    header::render(frame, app, chunks[0]);

    if app.data.loading {
        render_loading(frame, app, chunks[1]);
    } else if let Some(error) = app.data.error.clone() {
        render_error(frame, app, chunks[1], &error);
    } else {
        match app.current_tab {
            Tab::Heatmap => heatmap::render(frame, app, chunks[1]),
            Tab::Grid => grid::render(frame, app, chunks[1]),
            Tab::Daily => daily::render(frame, app, chunks[1]),
        }
    }

    footer::render(frame, app, chunks[2]);
}

fn render_loading(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Percentage(40),
        ])
        .split(inner)[1];

    let paragraph = Paragraph::new("Scanning board exports…")
        .style(Style::default().fg(app.theme.muted))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, center);
}

fn render_error(frame: &mut Frame, app: &App, area: Rect, error: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Percentage(40),
        ])
        .split(inner)[1];

    let text = format!("Error: {}", error);
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, center);
}
