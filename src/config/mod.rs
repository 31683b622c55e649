use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::store::Filter;
use crate::tui::ThemeConfig;

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How long the event loop waits for input before redrawing. Default: 250
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Start on the welcome screen. When false the list screen opens
    /// directly with the input field focused. Default: true
    #[serde(default = "default_true")]
    pub show_welcome: bool,

    /// Filter selected at startup. Default: "all"
    #[serde(default)]
    pub default_filter: Filter,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tick_rate_ms: default_tick_rate_ms(),
            show_welcome: true,
            default_filter: Filter::default(),
            log: LogConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Write a log file at all. Default: true
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// `tracing` filter directive, e.g. "debug" or "todo_tui=trace".
    /// Overridden by the `TODO_TUI_LOG` environment variable. Default: "info"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file location. Default: ~/.todo-tui/todo-tui.log
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            enabled: true,
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Written by `todo-tui init`.
pub const DEFAULT_CONFIG: &str = r#"# todo-tui configuration

# Milliseconds the UI waits for a key press before redrawing.
# tick_rate_ms = 250

# Open on the welcome screen (false jumps straight to the list).
# show_welcome = true

# Filter selected at startup: "all", "active" or "completed".
# default_filter = "all"

[log]
# enabled = true
# level = "info"            # TODO_TUI_LOG takes precedence
# file = "/tmp/todo-tui.log"

[theme]
# Colours by name ("cyan", "dark_gray", ...) or "rgb(R,G,B)".
# border_input = "green"
# border_tasks = "magenta"
# filter_tab = "yellow"
# selection_bg = "dark_gray"
"#;

/// Returns the base config directory: ~/.todo-tui/
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".todo-tui"))
}

/// Returns the default config file path: ~/.todo-tui/config.toml
pub fn config_path() -> Result<PathBuf> {
    Ok(base_dir()?.join("config.toml"))
}

/// Resolve where logs go, honouring `log.file` when set.
pub fn log_path(log: &LogConfig) -> Result<PathBuf> {
    match &log.file {
        Some(path) => Ok(path.clone()),
        None => Ok(base_dir()?.join("todo-tui.log")),
    }
}

/// Ensure the config directory exists
pub fn ensure_dirs() -> Result<()> {
    let base = base_dir()?;
    fs::create_dir_all(&base).context("failed to create ~/.todo-tui/")?;
    Ok(())
}

/// Load config from `path`, or from ~/.todo-tui/config.toml when `None`.
/// A missing file yields defaults; a malformed one is an error.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    if !path.exists() {
        return Ok(Config::default());
    }
    let content =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Write [`DEFAULT_CONFIG`] to `path` unless a file already exists there.
/// Returns whether a file was written.
pub fn write_default(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.tick_rate_ms, 250);
        assert!(cfg.show_welcome);
        assert_eq!(cfg.default_filter, Filter::All);
        assert!(cfg.log.enabled);
        assert_eq!(cfg.log.level, "info");
        assert!(cfg.log.file.is_none());
    }

    #[test]
    fn default_template_parses_to_defaults() {
        let cfg = parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(cfg.tick_rate_ms, Config::default().tick_rate_ms);
        assert!(cfg.theme.border_input.is_none());
    }

    #[test]
    fn values_override_defaults() {
        let cfg = parse(
            r#"
            tick_rate_ms = 100
            show_welcome = false
            default_filter = "active"

            [log]
            level = "debug"
            file = "/tmp/t.log"

            [theme]
            border_tasks = "red"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.tick_rate_ms, 100);
        assert!(!cfg.show_welcome);
        assert_eq!(cfg.default_filter, Filter::Active);
        assert_eq!(cfg.log.level, "debug");
        assert_eq!(log_path(&cfg.log).unwrap(), PathBuf::from("/tmp/t.log"));
        assert_eq!(cfg.theme.border_tasks.as_deref(), Some("red"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(parse("tick_rate = 5").is_err());
        assert!(parse("[theme]\nborder_focus = \"red\"").is_err());
        assert!(parse("default_filter = \"someday\"").is_err());
    }

    #[test]
    fn load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert!(cfg.show_welcome);
    }

    #[test]
    fn load_reports_path_on_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();
        let err = load(Some(&path)).unwrap_err();
        assert!(format!("{err}").contains("config.toml"));
    }

    #[test]
    fn write_default_does_not_clobber() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        assert!(write_default(&path).unwrap());
        fs::write(&path, "tick_rate_ms = 10").unwrap();
        assert!(!write_default(&path).unwrap());
        assert_eq!(load(Some(&path)).unwrap().tick_rate_ms, 10);
    }
}
