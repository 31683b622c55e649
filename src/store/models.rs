use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo entry.
///
/// Fields are private: items are created, toggled and removed only through
/// [`TodoStore`](super::TodoStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    id: Uuid,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
}

impl TodoItem {
    /// Build a new, not-yet-completed item. `text` must already be trimmed
    /// and non-empty.
    pub(super) fn new(text: String) -> Self {
        debug_assert!(!text.trim().is_empty(), "todo text must not be blank");
        TodoItem {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(super) fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub fn symbol(&self) -> &'static str {
        if self.completed { "✓" } else { "☐" }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Tab display order.
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    /// Digit key that selects this filter from the task list.
    pub fn shortcut(&self) -> char {
        match self {
            Filter::All => '1',
            Filter::Active => '2',
            Filter::Completed => '3',
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.completed,
            Filter::Completed => item.completed,
        }
    }
}
