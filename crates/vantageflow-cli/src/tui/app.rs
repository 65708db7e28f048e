use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use vantageflow_core::{build_report, GridRequest, GridWindow, ViewMode};

use super::data::{DashboardData, DataLoader};
use super::settings::Settings;
use super::themes::{Theme, ThemeName};

/// Configuration for TUI initialization
pub struct TuiConfig {
    pub theme: String,
    pub dir: PathBuf,
    pub today: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Heatmap,
    Grid,
    Daily,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Heatmap, Tab::Grid, Tab::Daily]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Heatmap => "Heatmap",
            Tab::Grid => "Grid",
            Tab::Daily => "Daily",
        }
    }

    pub fn next(self) -> Tab {
        match self {
            Tab::Heatmap => Tab::Grid,
            Tab::Grid => Tab::Daily,
            Tab::Daily => Tab::Heatmap,
        }
    }

    pub fn prev(self) -> Tab {
        match self {
            Tab::Heatmap => Tab::Daily,
            Tab::Grid => Tab::Heatmap,
            Tab::Daily => Tab::Grid,
        }
    }
}

pub struct ClickArea {
    pub rect: Rect,
    pub action: ClickAction,
}

#[derive(Debug, Clone)]
pub enum ClickAction {
    Tab(Tab),
    GraphCell { week: usize, day: usize },
}

pub struct App {
    pub should_quit: bool,
    pub current_tab: Tab,
    pub theme: Theme,
    pub settings: Settings,
    pub data: DashboardData,
    pub data_loader: DataLoader,

    pub view_mode: ViewMode,
    pub view_offset: i32,
    pub grid: Option<GridWindow>,

    pub scroll_offset: usize,
    pub selected_index: usize,
    pub max_visible_items: usize,

    pub selected_graph_cell: Option<(usize, usize)>,

    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    pub terminal_width: u16,
    pub terminal_height: u16,

    pub click_areas: Vec<ClickArea>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let settings = Settings::load();
        let theme_name: ThemeName = config
            .theme
            .parse()
            .unwrap_or_else(|_| settings.theme_name());
        let theme = Theme::from_name(theme_name);

        let view_mode: ViewMode = settings
            .default_view
            .parse()
            .unwrap_or(ViewMode::Month);
        // Range needs explicit bounds, which the dashboard never has.
        let view_mode = if view_mode == ViewMode::Range {
            ViewMode::Month
        } else {
            view_mode
        };

        let data_loader = DataLoader::new(config.dir, config.today);

        Self {
            should_quit: false,
            current_tab: Tab::Heatmap,
            theme,
            settings,
            data: DashboardData::default(),
            data_loader,
            view_mode,
            view_offset: 0,
            grid: None,
            scroll_offset: 0,
            selected_index: 0,
            max_visible_items: 20,
            selected_graph_cell: None,
            status_message: None,
            status_message_time: None,
            terminal_width: 80,
            terminal_height: 24,
            click_areas: Vec::new(),
        }
    }

    pub fn load_data(&mut self) {
        self.data.loading = true;
        match self.data_loader.load() {
            Ok(data) => {
                self.data = data;
                self.rebuild_grid();
                self.clamp_selection();
                self.set_status("Data loaded");
            }
            Err(e) => {
                self.data.loading = false;
                self.data.error = Some(e.to_string());
                self.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn rebuild_grid(&mut self) {
        let request = GridRequest::with_offset(self.view_mode, self.view_offset);
        self.grid = Some(GridWindow::build(
            request,
            self.data_loader.today(),
            &self.data.buckets,
        ));
    }

    pub fn on_tick(&mut self) {
        if let Some(status_time) = self.status_message_time {
            if status_time.elapsed() > Duration::from_secs(3) {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return true;
            }
            KeyCode::Tab => {
                self.current_tab = self.current_tab.next();
                self.reset_selection();
            }
            KeyCode::BackTab => {
                self.current_tab = self.current_tab.prev();
                self.reset_selection();
            }
            KeyCode::Left => {
                self.current_tab = self.current_tab.prev();
                self.reset_selection();
            }
            KeyCode::Right => {
                self.current_tab = self.current_tab.next();
                self.reset_selection();
            }
            KeyCode::Up => {
                self.move_selection_up();
            }
            KeyCode::Down => {
                self.move_selection_down();
            }
            KeyCode::Char('v') => {
                self.cycle_view_mode();
            }
            KeyCode::Char('[') => {
                self.page_view(-1);
            }
            KeyCode::Char(']') => {
                self.page_view(1);
            }
            KeyCode::Char('0') => {
                if self.view_offset != 0 {
                    self.view_offset = 0;
                    self.rebuild_grid();
                    self.set_status("Back to current period");
                }
            }
            KeyCode::Char('p') => {
                self.cycle_theme();
            }
            KeyCode::Char('r') => {
                self.load_data();
            }
            KeyCode::Char('y') => {
                self.copy_selected_to_clipboard();
            }
            KeyCode::Char('e') => {
                self.export_to_json();
            }
            KeyCode::Esc => {
                self.selected_graph_cell = None;
            }
            _ => {}
        }
        false
    }

    pub fn handle_mouse_event(&mut self, event: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = event.kind {
            let x = event.column;
            let y = event.row;

            for area in &self.click_areas {
                if x >= area.rect.x
                    && x < area.rect.x + area.rect.width
                    && y >= area.rect.y
                    && y < area.rect.y + area.rect.height
                {
                    match &area.action {
                        ClickAction::Tab(tab) => {
                            self.current_tab = *tab;
                            self.reset_selection();
                        }
                        ClickAction::GraphCell { week, day } => {
                            self.selected_graph_cell = Some((*week, *day));
                        }
                    }
                    break;
                }
            }
        }
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        // Ensure at least 1 visible item to prevent division/slice issues
        self.max_visible_items = (height.saturating_sub(10) as usize).max(1);
        self.clamp_selection();
    }

    /// Clamp selection and scroll offset to valid bounds after data/resize changes
    fn clamp_selection(&mut self) {
        let len = self.data.daily.len();
        if len == 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            return;
        }
        self.selected_index = self.selected_index.min(len.saturating_sub(1));
        let max_scroll = len.saturating_sub(self.max_visible_items);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    pub fn clear_click_areas(&mut self) {
        self.click_areas.clear();
    }

    pub fn add_click_area(&mut self, rect: Rect, action: ClickAction) {
        self.click_areas.push(ClickArea { rect, action });
    }

    fn reset_selection(&mut self) {
        self.scroll_offset = 0;
        self.selected_index = 0;
        self.selected_graph_cell = None;
    }

    fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            if self.selected_index < self.scroll_offset {
                self.scroll_offset = self.selected_index;
            }
        }
    }

    fn move_selection_down(&mut self) {
        let max_index = self.data.daily.len().saturating_sub(1);
        if self.selected_index < max_index {
            self.selected_index += 1;
            if self.selected_index >= self.scroll_offset + self.max_visible_items {
                self.scroll_offset = self.selected_index - self.max_visible_items + 1;
            }
        }
    }

    fn cycle_view_mode(&mut self) {
        self.view_mode = match self.view_mode {
            ViewMode::Week => ViewMode::Month,
            ViewMode::Month => ViewMode::Quarter,
            ViewMode::Quarter => ViewMode::Year,
            ViewMode::Year | ViewMode::Range => ViewMode::Week,
        };
        self.view_offset = 0;
        self.rebuild_grid();

        self.settings.default_view = self.view_mode.as_str().to_string();
        let _ = self.settings.save();
        self.set_status(&format!("View: {}", self.view_mode.as_str()));
    }

    fn page_view(&mut self, direction: i32) {
        if !self.view_mode.pages() {
            self.set_status(&format!("{} view does not page", self.view_mode.as_str()));
            return;
        }
        self.view_offset += direction;
        self.rebuild_grid();
        let unit = match self.view_mode {
            ViewMode::Week => "week",
            _ => "month",
        };
        self.set_status(&format!("Offset: {} {}s", self.view_offset, unit));
    }

    fn cycle_theme(&mut self) {
        let new_theme = self.theme.name.next();
        self.theme = Theme::from_name(new_theme);
        self.settings.set_theme(new_theme);
        if let Err(e) = self.settings.save() {
            self.set_status(&format!(
                "Theme: {} (save failed: {})",
                new_theme.as_str(),
                e
            ));
        } else {
            self.set_status(&format!("Theme: {}", new_theme.as_str()));
        }
    }

    fn copy_selected_to_clipboard(&mut self) {
        let text = self.data.daily.get(self.selected_index).map(|d| {
            format!(
                "{}: {} done, {} due, {} overdue",
                d.date, d.completed, d.due, d.overdue
            )
        });

        if let Some(text) = text {
            match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(&text)) {
                Ok(_) => self.set_status("Copied to clipboard"),
                Err(_) => self.set_status("Failed to copy"),
            }
        }
    }

    fn export_to_json(&mut self) {
        let report = build_report(&self.data.buckets, self.data_loader.today());

        let filename = format!(
            "vantageflow-report-{}.json",
            chrono::Utc::now().format("%Y%m%d-%H%M%S")
        );

        match serde_json::to_string_pretty(&report) {
            Ok(json) => match std::fs::write(&filename, json) {
                Ok(_) => self.set_status(&format!("Exported to {}", filename)),
                Err(e) => self.set_status(&format!("Export failed: {}", e)),
            },
            Err(e) => self.set_status(&format!("Export failed: {}", e)),
        }
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
        self.status_message_time = Some(Instant::now());
    }

    pub fn is_narrow(&self) -> bool {
        self.terminal_width < 80
    }

    pub fn is_very_narrow(&self) -> bool {
        self.terminal_width < 60
    }
}
