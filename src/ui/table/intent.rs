//! Intents for the table prompt.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the table reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIntent {
    MoveUp,
    MoveDown,

    /// Flip the row under the pointer. Also hides the key hint for good.
    Toggle,

    /// Submit passed validation; freezes the prompt.
    Accept,

    /// Submit failed validation. Selection is left untouched.
    Reject { message: String },
}

impl Intent for TableIntent {}
