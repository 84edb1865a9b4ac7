//! State for the table prompt.

use crate::ui::mvi::UiState;

use super::model::SelectionModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptStatus {
    #[default]
    Active,
    /// Terminal. No further input is processed.
    Answered,
}

/// Everything the reducer owns between two events.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePromptState<V> {
    pub selection: SelectionModel<V>,
    pub status: PromptStatus,
    /// Set by the first toggle and never cleared.
    pub hint_suppressed: bool,
    /// Message from the last rejected submit, cleared by the next key.
    pub error: Option<String>,
}

impl<V> Default for TablePromptState<V> {
    fn default() -> Self {
        Self {
            selection: SelectionModel::default(),
            status: PromptStatus::Active,
            hint_suppressed: false,
            error: None,
        }
    }
}

impl<V: Clone + PartialEq + Send + 'static> UiState for TablePromptState<V> {}

impl<V> TablePromptState<V> {
    pub fn new(selection: SelectionModel<V>) -> Self {
        Self {
            selection,
            ..Self::default()
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.status, PromptStatus::Answered)
    }
}
