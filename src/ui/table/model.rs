//! Table data and per-row selection state.

use std::collections::HashMap;

use crate::error::PromptError;

/// A data column of the table.
///
/// The selection indicator column is not listed here; the projector prepends
/// it to every rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Column {
    /// Header text.
    pub name: String,
    /// Key used to look up the cell in each row. Falls back to `name`.
    pub key: Option<String>,
    /// Column-level override of the table's `word_wrap`.
    pub word_wrap: Option<bool>,
    /// Column-level override of the table's `wrap_on_word_boundary`.
    pub wrap_on_word_boundary: Option<bool>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn word_wrap(mut self, enabled: bool) -> Self {
        self.word_wrap = Some(enabled);
        self
    }

    pub fn wrap_on_word_boundary(mut self, enabled: bool) -> Self {
        self.wrap_on_word_boundary = Some(enabled);
        self
    }
}

/// One table row: display strings keyed by column plus the value returned
/// to the caller when the row is selected.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<V> {
    pub value: V,
    pub cells: HashMap<String, String>,
}

impl<V> Row<V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            cells: HashMap::new(),
        }
    }

    pub fn cell(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.cells.insert(key.into(), text.into());
        self
    }

    /// Display text for `column`, looked up by key and then by name.
    pub fn text_for(&self, column: &Column) -> &str {
        column
            .key
            .as_deref()
            .and_then(|key| self.cells.get(key))
            .or_else(|| self.cells.get(&column.name))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Per-row selection slots and the pointer.
///
/// `slots` has exactly one entry per row for the model's whole lifetime, and
/// `pointer` always indexes an existing row.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionModel<V> {
    values: Vec<V>,
    slots: Vec<Option<V>>,
    pointer: usize,
}

impl<V> Default for SelectionModel<V> {
    fn default() -> Self {
        Self {
            values: Vec::new(),
            slots: Vec::new(),
            pointer: 0,
        }
    }
}

impl<V: Clone + PartialEq> SelectionModel<V> {
    /// Create a model with every slot empty and the pointer on the first row.
    pub fn new(values: Vec<V>) -> Result<Self, PromptError> {
        if values.is_empty() {
            return Err(PromptError::EmptyRows);
        }
        let slots = vec![None; values.len()];
        Ok(Self {
            values,
            slots,
            pointer: 0,
        })
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn row_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    pub fn move_up(&mut self) {
        self.pointer = self.pointer.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.pointer + 1 < self.values.len() {
            self.pointer += 1;
        }
    }

    /// Flip the slot under the pointer between empty and the row's value.
    pub fn toggle_current(&mut self) {
        let Some(slot) = self.slots.get_mut(self.pointer) else {
            return;
        };
        *slot = match slot.take() {
            Some(_) => None,
            None => self.values.get(self.pointer).cloned(),
        };
    }

    /// Selected values in row order, each distinct value once.
    pub fn current_selection(&self) -> Vec<V> {
        let mut selected: Vec<V> = Vec::new();
        for value in self.slots.iter().flatten() {
            if !selected.contains(value) {
                selected.push(value.clone());
            }
        }
        selected
    }
}
