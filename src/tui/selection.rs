/// Highlighted row within the *filtered* todo list.
///
/// The tracker never sees the todos themselves, only the length of the
/// current filtered view. Callers must `reconcile` after anything that can
/// shrink that view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    index: usize,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1).min(len - 1);
        }
    }

    /// Clamp the index back into `0..len` (or 0 for an empty view).
    pub fn reconcile(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
        debug_assert!(len == 0 || self.index < len);
    }
}
