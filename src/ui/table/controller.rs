//! Event-driven controller of the table prompt.

use crate::error::PromptError;
use crate::ui::events::PromptEvent;
use crate::ui::grid::{GridFormatter, TableFormatter};
use crate::ui::mvi::Reducer;
use crate::ui::surface::Surface;
use crate::ui::theme::Theme;

use super::intent::TableIntent;
use super::model::{Column, Row, SelectionModel};
use super::options::TableOptions;
use super::projector::{RenderProjector, RenderedFrame};
use super::reducer::TableReducer;
use super::state::TablePromptState;
use super::validation::{accept_all, Validator};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Outcome of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<A> {
    /// The prompt is already answered; nothing changed and nothing was painted.
    Ignored,
    /// State changed (or was re-validated) and a new frame was painted.
    Updated,
    /// Submit failed validation with this message.
    Rejected(String),
    /// Submit accepted. Returned once per prompt.
    Completed(A),
}

/// Surface the host lifecycle talks to.
pub trait PromptCore {
    type Answer;

    fn handle_event(&mut self, event: PromptEvent) -> Result<Step<Self::Answer>, PromptError>;

    fn is_terminal(&self) -> bool;

    fn current_render(&self) -> RenderedFrame;

    /// Paint the current frame again, e.g. on start or after a resize.
    fn redraw(&mut self) -> Result<(), PromptError>;
}

/// Owns the prompt state and drives it from discrete key events.
///
/// Every handled event runs one reducer step and paints exactly one frame.
/// Once a submit is accepted the prompt is frozen and later events are
/// ignored without painting.
pub struct PromptController<V, S> {
    columns: Vec<Column>,
    rows: Vec<Row<V>>,
    options: TableOptions,
    theme: Theme,
    formatter: Box<dyn GridFormatter + Send>,
    /// Set by `with_formatter`; `with_theme` then leaves the formatter alone.
    custom_formatter: bool,
    validator: Validator<V>,
    surface: S,
    state: TablePromptState<V>,
}

impl<V, S> PromptController<V, S>
where
    V: Clone + PartialEq + Send + 'static,
    S: Surface,
{
    pub fn new(
        columns: Vec<Column>,
        rows: Vec<Row<V>>,
        options: TableOptions,
        surface: S,
    ) -> Result<Self, PromptError> {
        if options.page_size == 0 {
            return Err(PromptError::InvalidPageSize {
                page_size: options.page_size,
            });
        }
        let selection = SelectionModel::new(rows.iter().map(|row| row.value.clone()).collect())?;
        let theme = Theme::default();
        let formatter = Box::new(TableFormatter::new(&options, columns.len(), &theme));

        Ok(Self {
            columns,
            rows,
            options,
            theme,
            formatter,
            custom_formatter: false,
            validator: accept_all(),
            surface,
            state: TablePromptState::new(selection),
        })
    }

    /// Replace the theme. The default table formatter is rebuilt with it; a
    /// formatter set through [`with_formatter`](Self::with_formatter) is kept.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        if !self.custom_formatter {
            self.formatter = Box::new(TableFormatter::new(
                &self.options,
                self.columns.len(),
                &theme,
            ));
        }
        self.theme = theme;
        self
    }

    pub fn with_formatter(mut self, formatter: impl GridFormatter + Send + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self.custom_formatter = true;
        self
    }

    pub fn with_validator(
        mut self,
        validator: impl Fn(&[V]) -> Result<(), String> + Send + 'static,
    ) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn state(&self) -> &TablePromptState<V> {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn dispatch(&mut self, intent: TableIntent) {
        dispatch_mvi!(self, state, TableReducer<V>, intent);
    }

    fn paint(&mut self) -> Result<(), PromptError> {
        let frame = self.current_render();
        self.surface.paint(&frame.message, &frame.bottom)?;
        Ok(())
    }

    fn submit(&mut self) -> Step<Vec<V>> {
        let candidate = self.state.selection.current_selection();
        match (self.validator)(&candidate) {
            Ok(()) => {
                self.dispatch(TableIntent::Accept);
                tracing::info!(selected = candidate.len(), "Table prompt answered");
                Step::Completed(candidate)
            }
            Err(message) => {
                tracing::debug!(%message, "Submit rejected by validation");
                self.dispatch(TableIntent::Reject {
                    message: message.clone(),
                });
                Step::Rejected(message)
            }
        }
    }
}

impl<V, S> PromptCore for PromptController<V, S>
where
    V: Clone + PartialEq + Send + 'static,
    S: Surface,
{
    type Answer = Vec<V>;

    fn handle_event(&mut self, event: PromptEvent) -> Result<Step<Vec<V>>, PromptError> {
        if self.state.is_answered() {
            tracing::trace!(?event, "Ignoring event after answer");
            return Ok(Step::Ignored);
        }

        let step = match event {
            PromptEvent::Up => {
                self.dispatch(TableIntent::MoveUp);
                Step::Updated
            }
            PromptEvent::Down => {
                self.dispatch(TableIntent::MoveDown);
                Step::Updated
            }
            PromptEvent::Space => {
                self.dispatch(TableIntent::Toggle);
                Step::Updated
            }
            PromptEvent::Submit => self.submit(),
        };
        tracing::debug!(
            ?event,
            pointer = self.state.selection.pointer(),
            "Handled prompt event"
        );

        if !matches!(step, Step::Completed(_)) {
            self.paint()?;
            return Ok(step);
        }

        // The prompt is already answered; a display failure must not lose
        // the answer.
        if let Err(err) = self.paint() {
            tracing::warn!(error = %err, "Failed to paint final frame");
        }
        if let Err(err) = self.surface.finish() {
            tracing::warn!(error = %err, "Failed to finish surface");
        }
        Ok(step)
    }

    fn is_terminal(&self) -> bool {
        self.state.is_answered()
    }

    fn current_render(&self) -> RenderedFrame {
        RenderProjector::new(&self.columns, &self.rows, &self.options, &self.theme)
            .render(&self.state, self.formatter.as_ref())
    }

    fn redraw(&mut self) -> Result<(), PromptError> {
        self.paint()
    }
}
