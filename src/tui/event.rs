use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Wait up to `tick_rate` for the next terminal event.
///
/// Only key presses are surfaced; release/repeat events (reported on some
/// platforms) and everything else collapse into `Tick`.
pub fn poll(tick_rate: Duration) -> Result<AppEvent> {
    if event::poll(tick_rate)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "key");
                return Ok(AppEvent::Key(key));
            }
            Event::Resize(..) => return Ok(AppEvent::Resize),
            _ => {}
        }
    }
    Ok(AppEvent::Tick)
}
