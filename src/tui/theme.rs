use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Semantic colour theme for the entire TUI.
///
/// Every colour used by the renderer is stored here so the user can
/// override any of them via `[theme]` in `config.toml`.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Borders ───────────────────────────────────────────────
    pub border_unfocused: Color,
    pub border_welcome: Color,
    pub border_input: Color,
    pub border_tasks: Color,

    // ── Text ──────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_accent: Color,

    // ── Todo status ───────────────────────────────────────────
    pub status_active: Color,
    pub status_done: Color,

    // ── Filter tabs ───────────────────────────────────────────
    pub filter_tab: Color,

    // ── Bars ──────────────────────────────────────────────────
    pub header_bg: Color,
    pub tip_bg: Color,

    // ── Misc ──────────────────────────────────────────────────
    pub selection_bg: Color,
    pub selection_indicator: Color,
    pub hint_key: Color,
    pub quit_hint: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border_unfocused: Color::DarkGray,
            border_welcome: Color::Cyan,
            border_input: Color::Green,
            border_tasks: Color::Magenta,

            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_accent: Color::Cyan,

            status_active: Color::Yellow,
            status_done: Color::Green,

            filter_tab: Color::Yellow,

            header_bg: Color::Blue,
            tip_bg: Color::Blue,

            selection_bg: Color::DarkGray,
            selection_indicator: Color::Cyan,
            hint_key: Color::Yellow,
            quit_hint: Color::Red,
        }
    }
}

impl Theme {
    fn border(&self, focused: bool, color: Color) -> Style {
        Style::default().fg(if focused {
            color
        } else {
            self.border_unfocused
        })
    }

    /// Border of the new-todo input panel.
    pub fn input_border(&self, focused: bool) -> Style {
        self.border(focused, self.border_input)
    }

    /// Border of the task list panel.
    pub fn tasks_border(&self, focused: bool) -> Style {
        self.border(focused, self.border_tasks)
    }

    /// Style for a todo's checkbox symbol.
    pub fn status_style(&self, completed: bool) -> Style {
        Style::default().fg(if completed {
            self.status_done
        } else {
            self.status_active
        })
    }

    /// Style for a todo's text; completed items are dimmed and italic.
    pub fn todo_text_style(&self, completed: bool) -> Style {
        if completed {
            Style::default()
                .fg(self.text_secondary)
                .add_modifier(Modifier::ITALIC | Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Style for a filter tab label.
    pub fn filter_tab_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Color::Black)
                .bg(self.filter_tab)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.filter_tab)
                .add_modifier(Modifier::BOLD)
        }
    }

    pub fn selected_row_style(&self) -> Style {
        Style::default().bg(self.selection_bg)
    }

    pub fn hint_key_style(&self) -> Style {
        Style::default()
            .fg(self.hint_key)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_desc_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}

// ── Config deserialization ────────────────────────────────────────────

/// All-optional mirror of [`Theme`] for the `[theme]` section of
/// `config.toml`.
///
/// Only `Some` fields override the default; everything else keeps its default.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub border_unfocused: Option<String>,
    pub border_welcome: Option<String>,
    pub border_input: Option<String>,
    pub border_tasks: Option<String>,

    pub text_primary: Option<String>,
    pub text_secondary: Option<String>,
    pub text_accent: Option<String>,

    pub status_active: Option<String>,
    pub status_done: Option<String>,

    pub filter_tab: Option<String>,

    pub header_bg: Option<String>,
    pub tip_bg: Option<String>,

    pub selection_bg: Option<String>,
    pub selection_indicator: Option<String>,
    pub hint_key: Option<String>,
    pub quit_hint: Option<String>,
}

/// Parse a colour string into a ratatui `Color`.
///
/// Supports named colours (`"cyan"`, `"red"`, `"dark_gray"`, etc.) and
/// `"rgb(R,G,B)"` syntax.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').collect();
        if let [r, g, b] = parts.as_slice() {
            return Some(Color::Rgb(
                r.trim().parse().ok()?,
                g.trim().parse().ok()?,
                b.trim().parse().ok()?,
            ));
        }
        return None;
    }

    let lower = s.to_lowercase().replace('-', "_");
    match lower.as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "light_red" | "lightred" => Some(Color::LightRed),
        "light_green" | "lightgreen" => Some(Color::LightGreen),
        "light_yellow" | "lightyellow" => Some(Color::LightYellow),
        "light_blue" | "lightblue" => Some(Color::LightBlue),
        "light_magenta" | "lightmagenta" => Some(Color::LightMagenta),
        "light_cyan" | "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => None,
    }
}

/// Overwrite `target` if `source` parses to a valid colour. Unknown colour
/// names are logged and otherwise ignored.
fn apply(target: &mut Color, name: &str, source: Option<&String>) {
    let Some(s) = source else { return };
    match parse_color(s) {
        Some(color) => *target = color,
        None => tracing::warn!("ignoring unknown colour {s:?} for theme.{name}"),
    }
}

impl ThemeConfig {
    /// Build a `Theme` starting from defaults, overriding any fields that were
    /// set in the config file.
    pub fn build(&self) -> Theme {
        let mut t = Theme::default();

        apply(&mut t.border_unfocused, "border_unfocused", self.border_unfocused.as_ref());
        apply(&mut t.border_welcome, "border_welcome", self.border_welcome.as_ref());
        apply(&mut t.border_input, "border_input", self.border_input.as_ref());
        apply(&mut t.border_tasks, "border_tasks", self.border_tasks.as_ref());
        apply(&mut t.text_primary, "text_primary", self.text_primary.as_ref());
        apply(&mut t.text_secondary, "text_secondary", self.text_secondary.as_ref());
        apply(&mut t.text_accent, "text_accent", self.text_accent.as_ref());
        apply(&mut t.status_active, "status_active", self.status_active.as_ref());
        apply(&mut t.status_done, "status_done", self.status_done.as_ref());
        apply(&mut t.filter_tab, "filter_tab", self.filter_tab.as_ref());
        apply(&mut t.header_bg, "header_bg", self.header_bg.as_ref());
        apply(&mut t.tip_bg, "tip_bg", self.tip_bg.as_ref());
        apply(&mut t.selection_bg, "selection_bg", self.selection_bg.as_ref());
        apply(&mut t.selection_indicator, "selection_indicator", self.selection_indicator.as_ref());
        apply(&mut t.hint_key, "hint_key", self.hint_key.as_ref());
        apply(&mut t.quit_hint, "quit_hint", self.quit_hint.as_ref());

        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_has_expected_colors() {
        let t = Theme::default();
        assert_eq!(t.border_input, Color::Green);
        assert_eq!(t.border_tasks, Color::Magenta);
        assert_eq!(t.text_primary, Color::White);
    }

    #[test]
    fn parse_named_colors() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("dark_gray"), Some(Color::DarkGray));
        assert_eq!(parse_color("DarkGray"), Some(Color::DarkGray));
        assert_eq!(parse_color("light-red"), Some(Color::LightRed));
        assert_eq!(parse_color("nope"), None);
    }

    #[test]
    fn parse_rgb_color() {
        assert_eq!(
            parse_color("rgb(255, 165, 0)"),
            Some(Color::Rgb(255, 165, 0))
        );
        assert_eq!(parse_color("rgb(256,0,0)"), None);
        assert_eq!(parse_color("rgb(1,2)"), None);
    }

    #[test]
    fn theme_config_overrides() {
        let cfg = ThemeConfig {
            border_tasks: Some("red".into()),
            status_done: Some("rgb(100,200,50)".into()),
            selection_bg: Some("not-a-colour".into()),
            ..Default::default()
        };
        let t = cfg.build();
        assert_eq!(t.border_tasks, Color::Red);
        assert_eq!(t.status_done, Color::Rgb(100, 200, 50));
        // Invalid and missing overrides keep defaults
        assert_eq!(t.selection_bg, Color::DarkGray);
        assert_eq!(t.text_primary, Color::White);
    }

    #[test]
    fn borders_follow_focus() {
        let t = Theme::default();
        assert_eq!(t.input_border(true), Style::default().fg(Color::Green));
        assert_eq!(t.input_border(false), Style::default().fg(Color::DarkGray));
        assert_eq!(t.tasks_border(true), Style::default().fg(Color::Magenta));
        assert_eq!(t.tasks_border(false), Style::default().fg(Color::DarkGray));
    }

    #[test]
    fn completed_todos_are_dimmed() {
        let t = Theme::default();
        let done = t.todo_text_style(true);
        assert_eq!(done.fg, Some(t.text_secondary));
        assert!(done.add_modifier.contains(Modifier::ITALIC));
        assert_eq!(t.todo_text_style(false).fg, Some(t.text_primary));
        assert_eq!(t.status_style(true).fg, Some(t.status_done));
        assert_eq!(t.status_style(false).fg, Some(t.status_active));
    }

    #[test]
    fn active_filter_tab_is_inverted() {
        let t = Theme::default();
        let active = t.filter_tab_style(true);
        assert_eq!(active.bg, Some(t.filter_tab));
        let inactive = t.filter_tab_style(false);
        assert_eq!(inactive.fg, Some(t.filter_tab));
        assert_eq!(inactive.bg, None);
    }
}
