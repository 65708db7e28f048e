use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, KeyEvent, MouseEvent};

/// Terminal input reduced to what the dashboard reacts to. Anything else
/// (focus changes, paste) degrades to a tick so the loop keeps breathing.
pub enum UiEvent {
    Tick,
    Input(KeyEvent),
    Click(MouseEvent),
    Resized(u16, u16),
}

fn map_event(raw: event::Event) -> UiEvent {
    match raw {
        event::Event::Key(key) => UiEvent::Input(key),
        event::Event::Mouse(mouse) => UiEvent::Click(mouse),
        event::Event::Resize(w, h) => UiEvent::Resized(w, h),
        _ => UiEvent::Tick,
    }
}

/// Polls crossterm on a background thread and hands events (or ticks, when
/// the terminal is idle) to the render loop over a channel.
pub struct EventPump {
    rx: mpsc::Receiver<UiEvent>,
}

impl EventPump {
    pub fn start(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            let ready = event::poll(tick_rate).unwrap_or(false);
            let ui_event = if ready {
                match event::read() {
                    Ok(raw) => map_event(raw),
                    Err(_) => UiEvent::Tick,
                }
            } else {
                UiEvent::Tick
            };

            // The receiver going away means the dashboard exited.
            if tx.send(ui_event).is_err() {
                break;
            }
        });

        Self { rx }
    }

    pub fn recv(&mut self) -> Result<UiEvent> {
        Ok(self.rx.recv()?)
    }
}
