mod app;
mod event;
mod input;
mod keymap;
mod selection;
mod theme;
mod ui;

use std::time::Duration;

use anyhow::Result;

use crate::config::Config;
use crate::store::TodoStore;

pub use app::{App, Focus, Screen, Snapshot};
pub use keymap::{Action, KeyMap};
pub use selection::SelectionTracker;
pub use theme::{Theme, ThemeConfig};

pub fn run(config: &Config) -> Result<()> {
    let theme = config.theme.build();
    let screen = if config.show_welcome {
        Screen::Welcome
    } else {
        Screen::List(Focus::InputField)
    };
    let mut app = App::new(TodoStore::with_filter(config.default_filter), screen);

    let mut terminal = ratatui::init();
    tracing::info!("terminal initialised");
    let result = app.run(
        &mut terminal,
        &theme,
        Duration::from_millis(config.tick_rate_ms),
    );
    ratatui::restore();
    result
}
