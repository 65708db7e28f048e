use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use vantageflow_core::DayCell;

use crate::tui::app::App;

const DAY_HEADER: &str = "  Su  Mo  Tu  We  Th  Fr  Sa";

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let grid = match &app.grid {
        Some(g) => g.clone(),
        None => return,
    };

    let offset_note = if app.view_offset != 0 {
        format!(" ({:+})", app.view_offset)
    } else {
        String::new()
    };
    let title = format!(
        " {} {} – {}{} ",
        grid.mode.as_str(),
        grid.start.format("%Y-%m-%d"),
        grid.end.format("%Y-%m-%d"),
        offset_note
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if grid.weeks.is_empty() {
        let empty = Paragraph::new("Empty window")
            .style(Style::default().fg(app.theme.muted))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    // Calendar rows fit week and month windows; longer windows fall back
    // to the compact week-per-column strip.
    let calendar_height = grid.weeks.len() as u16 + 2;
    if calendar_height <= inner.height && inner.width >= DAY_HEADER.len() as u16 {
        render_calendar(frame, app, inner, &grid.weeks);
    } else {
        render_strip(frame, app, inner, &grid.weeks);
    }
}

fn render_calendar(frame: &mut Frame, app: &App, area: Rect, weeks: &[Vec<DayCell>]) {
    frame.render_widget(
        Paragraph::new(DAY_HEADER).style(Style::default().fg(app.theme.muted)),
        Rect::new(area.x, area.y, area.width, 1),
    );

    for (row, week) in weeks.iter().enumerate() {
        let y = area.y + 2 + row as u16;
        if y >= area.y + area.height {
            break;
        }

        let mut spans: Vec<Span> = Vec::new();
        for cell in week {
            spans.push(Span::raw("  "));
            let text = format!("{:>2}", chrono::Datelike::day(&cell.date));
            spans.push(Span::styled(text, cell_style(cell, app)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}

fn render_strip(frame: &mut Frame, app: &App, area: Rect, weeks: &[Vec<DayCell>]) {
    let max_weeks = (area.width.saturating_sub(1) / 2) as usize;
    let start_week = weeks.len().saturating_sub(max_weeks);

    for (col, week) in weeks.iter().skip(start_week).enumerate() {
        let x = area.x + 1 + (col as u16 * 2);
        for (day_idx, cell) in week.iter().enumerate() {
            let y = area.y + 1 + day_idx as u16;
            if x >= area.x + area.width || y >= area.y + area.height {
                continue;
            }

            let text = if cell.in_range { "██" } else { "· " };
            frame.render_widget(
                Paragraph::new(text).style(cell_style(cell, app)),
                Rect::new(x, y, 2, 1),
            );
        }
    }
}

fn cell_style(cell: &DayCell, app: &App) -> Style {
    if !cell.in_range {
        return Style::default().fg(Color::Rgb(70, 75, 82));
    }

    let mut style = if cell.overdue > 0 {
        Style::default()
            .fg(app.theme.overdue)
            .add_modifier(Modifier::BOLD)
    } else if cell.is_future && cell.due > 0 {
        Style::default().fg(app.theme.due)
    } else if cell.activity > 0 {
        Style::default().fg(app.theme.colors[cell.activity_intensity as usize])
    } else {
        Style::default().fg(app.theme.foreground)
    };

    if cell.is_today {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
    }

    style
}
