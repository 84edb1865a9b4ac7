//! Reducer for the table prompt.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::TableIntent;
use super::state::{PromptStatus, TablePromptState};

/// Transition table of the prompt.
///
/// Pure function: running validation, painting frames and notifying the
/// caller all happen around the dispatch in
/// [`PromptController`](super::PromptController).
pub struct TableReducer<V>(PhantomData<V>);

impl<V: Clone + PartialEq + Send + 'static> Reducer for TableReducer<V> {
    type State = TablePromptState<V>;
    type Intent = TableIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        if state.status == PromptStatus::Answered {
            return state;
        }

        match intent {
            TableIntent::MoveUp => {
                state.selection.move_up();
                state.error = None;
            }
            TableIntent::MoveDown => {
                state.selection.move_down();
                state.error = None;
            }
            TableIntent::Toggle => {
                state.selection.toggle_current();
                state.hint_suppressed = true;
                state.error = None;
            }
            TableIntent::Accept => {
                state.status = PromptStatus::Answered;
                state.hint_suppressed = true;
                state.error = None;
            }
            TableIntent::Reject { message } => {
                state.error = Some(message);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::table::model::SelectionModel;

    fn state() -> TablePromptState<char> {
        TablePromptState::new(SelectionModel::new(vec!['a', 'b', 'c']).unwrap())
    }

    fn run(intents: Vec<TableIntent>) -> TablePromptState<char> {
        intents.into_iter().fold(state(), TableReducer::<char>::reduce)
    }

    #[test]
    fn toggle_suppresses_hint_permanently() {
        let s = run(vec![TableIntent::Toggle, TableIntent::Toggle]);
        assert!(s.hint_suppressed);
        assert!(s.selection.current_selection().is_empty());
    }

    #[test]
    fn navigation_does_not_suppress_hint() {
        let s = run(vec![TableIntent::MoveDown, TableIntent::MoveUp]);
        assert!(!s.hint_suppressed);
    }

    #[test]
    fn reject_keeps_selection_and_records_message() {
        let s = run(vec![
            TableIntent::MoveDown,
            TableIntent::Toggle,
            TableIntent::Reject {
                message: "pick two".to_string(),
            },
        ]);
        assert_eq!(s.status, PromptStatus::Active);
        assert_eq!(s.error.as_deref(), Some("pick two"));
        assert_eq!(s.selection.current_selection(), vec!['b']);
    }

    #[test]
    fn next_key_clears_error() {
        let s = run(vec![
            TableIntent::Reject {
                message: "nope".to_string(),
            },
            TableIntent::MoveDown,
        ]);
        assert!(s.error.is_none());
    }

    #[test]
    fn answered_state_is_frozen() {
        let answered = run(vec![TableIntent::Toggle, TableIntent::Accept]);
        let after = [
            TableIntent::MoveDown,
            TableIntent::Toggle,
            TableIntent::Reject {
                message: "late".to_string(),
            },
        ]
        .into_iter()
        .fold(answered.clone(), TableReducer::<char>::reduce);
        assert_eq!(after, answered);
    }
}
