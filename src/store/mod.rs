mod models;

pub use models::*;

use uuid::Uuid;

/// Text of a todo that has not been submitted yet, plus the byte offset of
/// the edit cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    pub text: String,
    pub cursor: usize,
}

impl InputBuffer {
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// In-memory owner of every todo, the active filter and the input buffer.
///
/// Bad input never fails: blank submissions and unknown ids are silently
/// ignored.
#[derive(Debug, Default)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    filter: Filter,
    input: InputBuffer,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(filter: Filter) -> Self {
        TodoStore {
            filter,
            ..Self::default()
        }
    }

    /// Append a todo with the trimmed `raw` text and clear the input buffer.
    ///
    /// Returns `None` (and leaves the buffer alone) when the text is blank.
    pub fn add_todo(&mut self, raw: &str) -> Option<Uuid> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let item = TodoItem::new(text.to_string());
        let id = item.id();
        tracing::debug!(%id, text, "todo added");
        self.todos.push(item);
        self.input.clear();
        Some(id)
    }

    /// Submit whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Option<Uuid> {
        let raw = self.input.text.clone();
        self.add_todo(&raw)
    }

    pub fn toggle_todo(&mut self, id: Uuid) {
        if let Some(item) = self.todos.iter_mut().find(|t| t.id() == id) {
            item.toggle();
            tracing::debug!(%id, completed = item.completed(), "todo toggled");
        }
    }

    pub fn delete_todo(&mut self, id: Uuid) {
        let before = self.todos.len();
        self.todos.retain(|t| t.id() != id);
        if self.todos.len() != before {
            tracing::debug!(%id, "todo deleted");
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            tracing::debug!(filter = filter.as_str(), "filter changed");
        }
        self.filter = filter;
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Todos matching the current filter, in insertion order.
    pub fn filtered_todos(&self) -> Vec<&TodoItem> {
        self.todos
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// `(active, completed)` over the whole collection.
    pub fn counts(&self) -> (usize, usize) {
        let completed = self.todos.iter().filter(|t| t.completed()).count();
        (self.todos.len() - completed, completed)
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }
}
