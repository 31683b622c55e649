use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::Filter;

use super::app::{Focus, Screen};

// ── Actions ──────────────────────────────────────────────────────────

/// Every discrete action the TUI can perform in response to a key press.
///
/// Routing decides *which* action a key means for the current screen;
/// `App::apply` carries it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Global
    Quit,

    // Welcome screen
    ShowList,
    CreateTodo,

    // List screen
    Back,
    SwitchFocus,

    // Input field
    Submit,
    EditInput(KeyCode, KeyModifiers),

    // Task list
    MoveUp,
    MoveDown,
    ToggleSelected,
    DeleteSelected,
    SetFilter(Filter),
}

// ── Help categories ──────────────────────────────────────────────────

/// Logical groupings shown by `todo-tui keys`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpCategory {
    Global,
    Welcome,
    NewTodo,
    Tasks,
}

impl HelpCategory {
    fn label(self) -> &'static str {
        match self {
            Self::Global => "Global",
            Self::Welcome => "Welcome",
            Self::NewTodo => "New todo (input focused)",
            Self::Tasks => "Tasks (list focused)",
        }
    }

    /// Fixed display order.
    const ORDERED: &[Self] = &[Self::Global, Self::Welcome, Self::NewTodo, Self::Tasks];
}

// ── Keybinding ───────────────────────────────────────────────────────

/// A single key → action mapping with metadata for the help listing.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: Action,
    /// Human-readable key label (e.g. `"Ctrl+C"`). Empty for aliases that
    /// share a row with the previous binding.
    pub label: &'static str,
    pub description: &'static str,
    pub category: HelpCategory,
}

/// A single row in the help listing.
#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub label: &'static str,
    pub description: &'static str,
}

// ── KeyMap ────────────────────────────────────────────────────────────

/// Declarative registry of every key binding, one table per routing
/// context. Exactly one context table is consulted per key event.
pub struct KeyMap {
    pub global: Vec<KeyBinding>,
    pub welcome: Vec<KeyBinding>,
    pub input: Vec<KeyBinding>,
    pub tasks: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::default_keymap()
    }
}

impl KeyMap {
    pub fn default_keymap() -> Self {
        Self {
            global: default_global_bindings(),
            welcome: default_welcome_bindings(),
            input: default_input_bindings(),
            tasks: default_task_bindings(),
        }
    }

    /// Resolve a key event to at most one action for the given screen.
    ///
    /// While the input field has focus, any key without a binding becomes an
    /// [`Action::EditInput`]; everywhere else unmatched keys resolve to `None`.
    pub fn route(&self, screen: Screen, key: KeyEvent) -> Option<Action> {
        if let Some(action) = lookup(&self.global, key.code, key.modifiers) {
            return Some(action);
        }
        match screen {
            Screen::Welcome => lookup(&self.welcome, key.code, key.modifiers),
            Screen::List(Focus::InputField) => lookup(&self.input, key.code, key.modifiers)
                .or(Some(Action::EditInput(key.code, key.modifiers))),
            Screen::List(Focus::TaskList) => lookup(&self.tasks, key.code, key.modifiers),
        }
    }

    /// Grouped help entries in display order.
    pub fn help_entries(&self) -> Vec<(&'static str, Vec<HelpEntry>)> {
        let mut out = Vec::new();

        for &cat in HelpCategory::ORDERED {
            let mut entries: Vec<HelpEntry> = Vec::new();
            for kb in self
                .global
                .iter()
                .chain(&self.welcome)
                .chain(&self.input)
                .chain(&self.tasks)
            {
                if kb.category == cat
                    && !kb.description.is_empty()
                    && !entries.iter().any(|e| e.label == kb.label)
                {
                    entries.push(HelpEntry {
                        label: kb.label,
                        description: kb.description,
                    });
                }
            }

            if cat == HelpCategory::NewTodo {
                entries.push(HelpEntry {
                    label: "  other keys",
                    description: "Edit text (arrows, Home/End, Ctrl+W, Ctrl+U)",
                });
            }

            if !entries.is_empty() {
                out.push((cat.label(), entries));
            }
        }

        out
    }
}

// ── Lookup helper ────────────────────────────────────────────────────

fn lookup(bindings: &[KeyBinding], code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    // Shift is already folded into the character (and into BackTab).
    // Letter bindings are lowercase, so Shift+L and caps-lock L match `l`.
    let (code, modifiers) = match code {
        KeyCode::Char(c) => (
            KeyCode::Char(c.to_ascii_lowercase()),
            modifiers & !KeyModifiers::SHIFT,
        ),
        KeyCode::BackTab => (code, modifiers & !KeyModifiers::SHIFT),
        _ => (code, modifiers),
    };
    bindings
        .iter()
        .find(|kb| kb.code == code && kb.modifiers == modifiers)
        .map(|kb| kb.action)
}

fn bind(
    code: KeyCode,
    action: Action,
    label: &'static str,
    description: &'static str,
    category: HelpCategory,
) -> KeyBinding {
    KeyBinding {
        code,
        modifiers: KeyModifiers::NONE,
        action,
        label,
        description,
        category,
    }
}

// ── Default bindings ─────────────────────────────────────────────────

fn default_global_bindings() -> Vec<KeyBinding> {
    vec![KeyBinding {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        action: Action::Quit,
        label: "  Ctrl+C",
        description: "Quit immediately",
        category: HelpCategory::Global,
    }]
}

#[allow(clippy::enum_glob_use)]
fn default_welcome_bindings() -> Vec<KeyBinding> {
    use Action::*;
    use HelpCategory::Welcome;

    vec![
        bind(KeyCode::Char('l'), ShowList, "  l", "View todo list", Welcome),
        bind(KeyCode::Char('c'), CreateTodo, "  c", "Create new todo", Welcome),
        bind(KeyCode::Esc, Quit, "  Esc/q", "Quit", Welcome),
        bind(KeyCode::Char('q'), Quit, "", "", Welcome),
    ]
}

#[allow(clippy::enum_glob_use)]
fn default_input_bindings() -> Vec<KeyBinding> {
    use Action::*;
    use HelpCategory::NewTodo;

    vec![
        bind(KeyCode::Enter, Submit, "  Enter", "Add todo", NewTodo),
        bind(KeyCode::Tab, SwitchFocus, "  Tab", "Focus task list", NewTodo),
        bind(KeyCode::BackTab, SwitchFocus, "", "", NewTodo),
        bind(KeyCode::Esc, Back, "  Esc", "Back to welcome", NewTodo),
    ]
}

#[allow(clippy::enum_glob_use)]
fn default_task_bindings() -> Vec<KeyBinding> {
    use Action::*;
    use HelpCategory::Tasks;

    vec![
        bind(KeyCode::Up, MoveUp, "  ↑/↓ j/k", "Navigate", Tasks),
        bind(KeyCode::Char('k'), MoveUp, "", "", Tasks),
        bind(KeyCode::Down, MoveDown, "", "", Tasks),
        bind(KeyCode::Char('j'), MoveDown, "", "", Tasks),
        bind(KeyCode::Char(' '), ToggleSelected, "  Space/Enter", "Toggle done", Tasks),
        bind(KeyCode::Enter, ToggleSelected, "", "", Tasks),
        bind(KeyCode::Char('d'), DeleteSelected, "  d/Del", "Delete", Tasks),
        bind(KeyCode::Delete, DeleteSelected, "", "", Tasks),
        bind(KeyCode::Char('1'), SetFilter(Filter::All), "  1", "Show all", Tasks),
        bind(KeyCode::Char('2'), SetFilter(Filter::Active), "  2", "Show active", Tasks),
        bind(
            KeyCode::Char('3'),
            SetFilter(Filter::Completed),
            "  3",
            "Show completed",
            Tasks,
        ),
        bind(KeyCode::Tab, SwitchFocus, "  Tab", "Focus input", Tasks),
        bind(KeyCode::BackTab, SwitchFocus, "", "", Tasks),
        bind(KeyCode::Esc, Back, "  Esc", "Back to welcome", Tasks),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────
