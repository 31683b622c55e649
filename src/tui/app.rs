use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::DefaultTerminal;

use crate::store::{Filter, InputBuffer, TodoItem, TodoStore};

use super::event::{self, AppEvent};
use super::input;
use super::keymap::{Action, KeyMap};
use super::selection::SelectionTracker;
use super::theme::Theme;
use super::ui;

/// Which region of the list screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    TaskList,
}

impl Focus {
    fn toggled(self) -> Self {
        match self {
            Focus::InputField => Focus::TaskList,
            Focus::TaskList => Focus::InputField,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Welcome,
    List(Focus),
}

impl Screen {
    pub fn focus(self) -> Option<Focus> {
        match self {
            Screen::Welcome => None,
            Screen::List(focus) => Some(focus),
        }
    }
}

/// Read-only view of everything the renderer needs for one frame.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub screen: Screen,
    pub todos: &'a [TodoItem],
    pub filter: Filter,
    pub filtered: Vec<&'a TodoItem>,
    pub selection: usize,
    pub input: &'a InputBuffer,
    pub active_count: usize,
    pub completed_count: usize,
}

impl Snapshot<'_> {
    pub fn focus(&self) -> Option<Focus> {
        self.screen.focus()
    }

    pub fn selected(&self) -> Option<&TodoItem> {
        self.filtered.get(self.selection).copied()
    }
}

/// Single owner of all application state. Key events go in through
/// [`App::handle_key`]; the renderer reads back through [`App::snapshot`].
pub struct App {
    pub store: TodoStore,
    pub selection: SelectionTracker,
    pub screen: Screen,
    pub should_quit: bool,
    keymap: KeyMap,
}

impl Default for App {
    fn default() -> Self {
        Self::new(TodoStore::new(), Screen::Welcome)
    }
}

impl App {
    pub fn new(store: TodoStore, screen: Screen) -> Self {
        App {
            store,
            selection: SelectionTracker::new(),
            screen,
            should_quit: false,
            keymap: KeyMap::default_keymap(),
        }
    }

    pub fn run(
        &mut self,
        terminal: &mut DefaultTerminal,
        theme: &Theme,
        tick_rate: Duration,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::draw(frame, &self.snapshot(), theme))?;

            match event::poll(tick_rate)? {
                AppEvent::Key(key) => self.handle_key(key),
                AppEvent::Resize | AppEvent::Tick => {}
            }

            if self.should_quit {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let (active_count, completed_count) = self.store.counts();
        Snapshot {
            screen: self.screen,
            todos: self.store.todos(),
            filter: self.store.filter(),
            filtered: self.store.filtered_todos(),
            selection: self.selection.index(),
            input: self.store.input(),
            active_count,
            completed_count,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = self.keymap.route(self.screen, key) {
            self.apply(action);
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::ShowList => self.enter_list(),
            Action::CreateTodo => {
                self.store.input_mut().clear();
                self.enter_list();
            }

            Action::Back => self.set_screen(Screen::Welcome),
            Action::SwitchFocus => {
                if let Screen::List(focus) = self.screen {
                    self.set_screen(Screen::List(focus.toggled()));
                }
            }

            Action::Submit => {
                self.store.submit_input();
            }
            Action::EditInput(code, modifiers) => {
                input::apply_text_edit(self.store.input_mut(), code, modifiers);
            }

            Action::MoveUp => self.selection.move_up(),
            Action::MoveDown => {
                let len = self.store.filtered_todos().len();
                self.selection.move_down(len);
            }
            Action::ToggleSelected => {
                if let Some(id) = self.selected_id() {
                    self.store.toggle_todo(id);
                    self.reconcile();
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.selected_id() {
                    self.store.delete_todo(id);
                    self.reconcile();
                }
            }
            Action::SetFilter(filter) => {
                self.store.set_filter(filter);
                self.reconcile();
            }
        }
    }

    /// Entering the list always starts at the top with the input focused.
    fn enter_list(&mut self) {
        self.selection = SelectionTracker::new();
        self.set_screen(Screen::List(Focus::InputField));
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!(from = ?self.screen, to = ?screen, "screen changed");
        }
        self.screen = screen;
    }

    fn selected_id(&self) -> Option<uuid::Uuid> {
        self.store
            .filtered_todos()
            .get(self.selection.index())
            .map(|t| t.id())
    }

    fn reconcile(&mut self) {
        let len = self.store.filtered_todos().len();
        self.selection.reconcile(len);
    }
}
