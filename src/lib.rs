pub mod config;
pub mod logging;
pub mod store;
pub mod tui;

/// Build version, set by `build.rs`.
pub const VERSION: &str = env!("TODO_TUI_VERSION");
