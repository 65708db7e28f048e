mod app;
pub mod data;
mod event;
mod settings;
mod themes;
mod ui;

pub use app::{App, TuiConfig};
pub use data::DataLoader;
pub use event::{EventPump, UiEvent};

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

pub fn run(theme: &str, dir: &Path, today: NaiveDate) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let config = TuiConfig {
        theme: theme.to_string(),
        dir: dir.to_path_buf(),
        today,
    };
    let mut app = App::new(config);

    app.load_data();

    let mut events = EventPump::start(Duration::from_millis(100));

    let result = run_loop(&mut terminal, &mut app, &mut events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventPump,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        match events.recv()? {
            UiEvent::Tick => {
                app.on_tick();
            }
            UiEvent::Input(key) => {
                if app.handle_key_event(key) {
                    break;
                }
            }
            UiEvent::Click(mouse) => {
                app.handle_mouse_event(mouse);
            }
            UiEvent::Resized(w, h) => {
                app.handle_resize(w, h);
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
