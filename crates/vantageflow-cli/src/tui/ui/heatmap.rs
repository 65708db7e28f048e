use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use vantageflow_core::{DayCell, TaskDetail};

use super::widgets::{format_count, stream_color, truncate};
use crate::tui::app::{App, ClickAction};

const CELL_WIDTH: u16 = 2;
const MONTH_LABELS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const DAY_LABELS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(12), Constraint::Length(12)])
        .split(area);

    render_graph(frame, app, chunks[0]);

    if app.selected_graph_cell.is_some() {
        render_breakdown_panel(frame, app, chunks[1]);
    } else {
        render_stats_panel(frame, app, chunks[1]);
    }
}

fn render_graph(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme_border = app.theme.border;
    let theme_highlight = app.theme.highlight;
    let theme_background = app.theme.background;
    let theme_muted = app.theme.muted;
    let theme_colors = app.theme.colors;
    let theme_overdue = app.theme.overdue;
    let selected_cell = app.selected_graph_cell;
    let is_narrow = app.is_narrow();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme_border))
        .title(Span::styled(
            " Activity (52 weeks) ",
            Style::default()
                .fg(theme_highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme_background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heatmap = match &app.data.heatmap {
        Some(g) => g.clone(),
        None => return,
    };

    let label_width = if is_narrow { 2u16 } else { 4u16 };
    let graph_start_x = inner.x + label_width;
    let graph_start_y = inner.y + 2;

    for (day_idx, label) in DAY_LABELS.iter().enumerate() {
        if day_idx % 2 == 1 {
            let y = graph_start_y + day_idx as u16;
            if y < inner.y + inner.height {
                let display_label = if is_narrow { "" } else { *label };
                let text = Paragraph::new(display_label).style(Style::default().fg(theme_muted));
                frame.render_widget(text, Rect::new(inner.x, y, label_width, 1));
            }
        }
    }

    let max_weeks = (inner.width.saturating_sub(label_width) / CELL_WIDTH) as usize;
    let weeks_to_show = heatmap.weeks.len().min(max_weeks);
    let start_week = heatmap.weeks.len().saturating_sub(weeks_to_show);

    let mut click_areas_to_add: Vec<(Rect, usize, usize)> = Vec::new();

    for (week_idx, week) in heatmap.weeks.iter().skip(start_week).enumerate() {
        let x = graph_start_x + (week_idx as u16 * CELL_WIDTH);

        for (day_idx, cell) in week.iter().enumerate() {
            let y = graph_start_y + day_idx as u16;

            if x >= inner.x + inner.width || y >= inner.y + inner.height {
                continue;
            }

            let actual_week_idx = week_idx + start_week;
            let is_selected = selected_cell == Some((actual_week_idx, day_idx));

            let (cell_str, style) = cell_appearance(cell, is_selected, &theme_colors, theme_overdue);

            frame.render_widget(
                Paragraph::new(cell_str).style(style),
                Rect::new(x, y, CELL_WIDTH, 1),
            );

            click_areas_to_add.push((Rect::new(x, y, CELL_WIDTH, 1), actual_week_idx, day_idx));
        }
    }

    for (rect, week, day) in click_areas_to_add {
        app.add_click_area(rect, ClickAction::GraphCell { week, day });
    }

    let month_y = inner.y;
    let mut current_month: Option<u32> = None;

    for (week_idx, week) in heatmap.weeks.iter().skip(start_week).enumerate() {
        if let Some(cell) = week.first() {
            let month = chrono::Datelike::month(&cell.date);
            if current_month != Some(month) {
                current_month = Some(month);
                let x = graph_start_x + (week_idx as u16 * CELL_WIDTH);
                let label_idx = (month - 1) as usize;
                if x + 3 < inner.x + inner.width && label_idx < MONTH_LABELS.len() {
                    let label = Paragraph::new(MONTH_LABELS[label_idx])
                        .style(Style::default().fg(theme_muted));
                    frame.render_widget(label, Rect::new(x, month_y, 3, 1));
                }
            }
        }
    }
}

fn cell_appearance(
    cell: &DayCell,
    is_selected: bool,
    ramp: &[Color; 5],
    overdue: Color,
) -> (&'static str, Style) {
    if !cell.in_range || cell.is_future {
        return if is_selected {
            ("▓▓", Style::default().fg(Color::White).bg(ramp[0]))
        } else {
            ("· ", Style::default().fg(Color::Rgb(102, 102, 102)))
        };
    }

    // An open overdue task outranks whatever got done that day.
    let color = if cell.overdue > 0 {
        overdue
    } else {
        ramp[cell.activity_intensity as usize]
    };

    if is_selected {
        ("▓▓", Style::default().fg(Color::White).bg(color))
    } else {
        ("██", Style::default().fg(color))
    }
}

fn render_stats_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(
            " Stats ",
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let is_narrow = app.is_narrow();

    let active_days = app
        .data
        .buckets
        .activity
        .iter()
        .filter(|(_, d)| d.value > 0)
        .count();
    let busiest = app.data.buckets.activity.max_value();

    let col1_width = if is_narrow { 18u16 } else { 30u16 };
    let col2_x = inner.x + col1_width;
    let col2_width = inner.width.saturating_sub(col1_width);

    let mut y = inner.y;

    let labeled = |label: &str, value: String, color: Color, muted: Color| -> Line<'static> {
        Line::from(vec![
            Span::styled(label.to_string(), Style::default().fg(muted)),
            Span::raw(" "),
            Span::styled(value, Style::default().fg(color)),
        ])
    };

    let streak_label = if is_narrow { "Streak:" } else { "Current streak:" };
    frame.render_widget(
        Paragraph::new(labeled(
            streak_label,
            format!("{} days", app.data.stats.current_streak),
            Color::Cyan,
            app.theme.muted,
        )),
        Rect::new(inner.x, y, col1_width, 1),
    );

    let longest_label = if is_narrow { "Max streak:" } else { "Longest streak:" };
    frame.render_widget(
        Paragraph::new(labeled(
            longest_label,
            format!("{} days", app.data.stats.longest_streak),
            Color::Cyan,
            app.theme.muted,
        )),
        Rect::new(col2_x, y, col2_width, 1),
    );

    y += 1;

    let done_label = if is_narrow { "Done:" } else { "Completed tasks:" };
    frame.render_widget(
        Paragraph::new(labeled(
            done_label,
            format_count(app.data.stats.total),
            stream_color("activity"),
            app.theme.muted,
        )),
        Rect::new(inner.x, y, col1_width, 1),
    );

    let active_label = if is_narrow { "Active:" } else { "Active days:" };
    frame.render_widget(
        Paragraph::new(labeled(
            active_label,
            active_days.to_string(),
            Color::Cyan,
            app.theme.muted,
        )),
        Rect::new(col2_x, y, col2_width, 1),
    );

    y += 1;

    let due_label = if is_narrow { "Due:" } else { "Open (due later):" };
    frame.render_widget(
        Paragraph::new(labeled(
            due_label,
            format_count(app.data.open_due),
            stream_color("due"),
            app.theme.muted,
        )),
        Rect::new(inner.x, y, col1_width, 1),
    );

    frame.render_widget(
        Paragraph::new(labeled(
            "Overdue:",
            format_count(app.data.open_overdue),
            stream_color("overdue"),
            app.theme.muted,
        )),
        Rect::new(col2_x, y, col2_width, 1),
    );

    y += 1;

    let busiest_label = if is_narrow { "Peak:" } else { "Busiest day:" };
    frame.render_widget(
        Paragraph::new(labeled(
            busiest_label,
            format!("{} tasks", busiest),
            Color::Cyan,
            app.theme.muted,
        )),
        Rect::new(inner.x, y, col1_width, 1),
    );

    y += 2;

    let legend_spans = vec![
        Span::styled("Less ", Style::default().fg(app.theme.muted)),
        Span::styled("· ", Style::default().fg(Color::Rgb(102, 102, 102))),
        Span::styled("██", Style::default().fg(app.theme.colors[1])),
        Span::raw(" "),
        Span::styled("██", Style::default().fg(app.theme.colors[2])),
        Span::raw(" "),
        Span::styled("██", Style::default().fg(app.theme.colors[3])),
        Span::raw(" "),
        Span::styled("██", Style::default().fg(app.theme.colors[4])),
        Span::styled(" More", Style::default().fg(app.theme.muted)),
        Span::raw("   "),
        Span::styled("██", Style::default().fg(app.theme.overdue)),
        Span::styled(" overdue", Style::default().fg(app.theme.muted)),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(legend_spans)),
        Rect::new(inner.x, y, inner.width, 1),
    );
}

fn render_breakdown_panel(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border))
        .title(Span::styled(
            " Day Breakdown (ESC to close) ",
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (week_idx, day_idx) = match app.selected_graph_cell {
        Some(cell) => cell,
        None => return,
    };

    let cell = match app
        .data
        .heatmap
        .as_ref()
        .and_then(|g| g.weeks.get(week_idx))
        .and_then(|w| w.get(day_idx))
    {
        Some(c) => c,
        None => return,
    };

    if !cell.in_range {
        let no_data = Paragraph::new("No data for this day")
            .style(Style::default().fg(app.theme.muted))
            .alignment(Alignment::Center);
        frame.render_widget(no_data, inner);
        return;
    }

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                cell.date.format("%a, %b %d, %Y").to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} done", cell.activity),
                Style::default().fg(stream_color("activity")),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} due", cell.due),
                Style::default().fg(stream_color("due")),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} overdue", cell.overdue),
                Style::default().fg(stream_color("overdue")),
            ),
        ]),
        Line::from(""),
    ];

    push_detail_lines(&mut lines, "overdue", &cell.overdue_details, app);
    push_detail_lines(&mut lines, "due", &cell.due_details, app);

    if cell.overdue_details.is_empty() && cell.due_details.is_empty() {
        lines.push(Line::from(Span::styled(
            "No open tasks on this day",
            Style::default().fg(app.theme.muted),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn push_detail_lines(
    lines: &mut Vec<Line<'static>>,
    stream: &'static str,
    details: &[TaskDetail],
    app: &App,
) {
    if details.is_empty() {
        return;
    }

    let plural = if details.len() > 1 { "s" } else { "" };
    lines.push(Line::from(vec![
        Span::styled(
            format!("● {}", stream),
            Style::default()
                .fg(stream_color(stream))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({} task{})", details.len(), plural),
            Style::default().fg(app.theme.muted),
        ),
    ]));

    let max_width = if app.is_narrow() { 30 } else { 50 };
    for detail in details {
        let assignees = if detail.assignees.is_empty() {
            String::new()
        } else {
            format!(" — {}", detail.assignees.join(", "))
        };
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate(&detail.task, max_width),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!(" [{} / {}]{}", detail.project, detail.section, assignees),
                Style::default().fg(app.theme.muted),
            ),
        ]));
    }
}
