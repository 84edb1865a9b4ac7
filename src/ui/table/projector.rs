//! Projection of prompt state into a paintable frame.

use ratatui::text::{Line, Span, Text};

use crate::ui::grid::{CellEmphasis, Grid, GridCell, GridFormatter, GridRow};
use crate::ui::surface::plain_text;
use crate::ui::theme::Theme;

use super::model::{Column, Row};
use super::options::TableOptions;
use super::pagination::compute_window;
use super::state::TablePromptState;

pub const ERROR_MARKER: &str = ">> ";

/// Everything a frame shows, before styling and grid formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView {
    pub prefix: String,
    pub message: String,
    pub show_hint: bool,
    pub grid: Grid,
    pub bottom_content: Option<String>,
    pub error: Option<String>,
}

/// A composed frame as handed to the display surface.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderedFrame {
    pub message: Text<'static>,
    pub bottom: Text<'static>,
}

impl RenderedFrame {
    pub fn message_text(&self) -> String {
        plain_text(&self.message)
    }

    pub fn bottom_text(&self) -> String {
        plain_text(&self.bottom)
    }
}

/// Read-only view over the table used to build frames.
pub struct RenderProjector<'a, V> {
    columns: &'a [Column],
    rows: &'a [Row<V>],
    options: &'a TableOptions,
    theme: &'a Theme,
}

impl<'a, V: Clone + PartialEq> RenderProjector<'a, V> {
    pub fn new(
        columns: &'a [Column],
        rows: &'a [Row<V>],
        options: &'a TableOptions,
        theme: &'a Theme,
    ) -> Self {
        Self {
            columns,
            rows,
            options,
            theme,
        }
    }

    pub fn project(&self, state: &TablePromptState<V>) -> PromptView {
        PromptView {
            prefix: self.options.prefix.clone(),
            message: self.options.message.clone(),
            show_hint: !state.hint_suppressed,
            grid: self.grid(state),
            bottom_content: self.options.bottom_content.clone(),
            error: state.error.clone(),
        }
    }

    pub fn render(
        &self,
        state: &TablePromptState<V>,
        formatter: &dyn GridFormatter,
    ) -> RenderedFrame {
        let view = self.project(state);

        let mut message = vec![self.question_line(&view), Line::default()];
        message.extend(formatter.format(&view.grid).lines);

        let mut bottom = Vec::new();
        if let Some(content) = &view.bottom_content {
            bottom.extend(content.lines().map(|l| Line::from(l.to_string())));
        }
        if view.bottom_content.is_some() || view.error.is_some() {
            bottom.push(Line::default());
        }
        if let Some(error) = &view.error {
            bottom.push(Line::from(vec![
                Span::styled(ERROR_MARKER, self.theme.error_marker),
                Span::raw(error.clone()),
            ]));
        }

        RenderedFrame {
            message: Text::from(message),
            bottom: Text::from(bottom),
        }
    }

    fn question_line(&self, view: &PromptView) -> Line<'static> {
        let mut spans = vec![
            Span::styled(view.prefix.clone(), self.theme.prefix),
            Span::raw(" "),
            Span::styled(view.message.clone(), self.theme.message),
            Span::raw(" "),
        ];
        if view.show_hint {
            spans.extend([
                Span::raw("(Press "),
                Span::styled("<space>", self.theme.key_hint),
                Span::raw(" to select, "),
                Span::styled("<Up and Down>", self.theme.key_hint),
                Span::raw(" to move rows)"),
            ]);
        }
        Line::from(spans)
    }

    fn grid(&self, state: &TablePromptState<V>) -> Grid {
        let selection = &state.selection;
        let window = compute_window(
            selection.pointer(),
            self.options.page_size,
            selection.row_count(),
        );

        let header = std::iter::once(String::new())
            .chain(self.columns.iter().map(|c| c.name.clone()))
            .collect();

        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(index, _)| window.contains(*index))
            .map(|(index, row)| {
                let is_pointer = index == selection.pointer();
                let marker = self.selection_cell(is_pointer, selection.is_selected(index));
                let cells = std::iter::once(marker)
                    .chain(self.columns.iter().map(|column| self.data_cell(row, column)))
                    .collect();
                GridRow {
                    cells,
                    highlighted: is_pointer && !state.is_answered(),
                }
            })
            .collect();

        Grid { header, rows }
    }

    fn selection_cell(&self, is_pointer: bool, is_selected: bool) -> GridCell {
        let glyphs = &self.theme.glyphs;
        let mark = if is_selected {
            glyphs.selected
        } else {
            glyphs.unselected
        };
        let (lead, emphasis) = if is_pointer {
            (glyphs.pointer, CellEmphasis::Pointer)
        } else {
            (" ", CellEmphasis::Plain)
        };
        GridCell {
            content: format!("{}{}", lead, mark),
            word_wrap: false,
            wrap_on_word_boundary: false,
            emphasis,
        }
    }

    /// Column setting, then table setting, then `word_wrap = false` and
    /// `wrap_on_word_boundary = true`.
    fn data_cell(&self, row: &Row<V>, column: &Column) -> GridCell {
        let word_wrap = column
            .word_wrap
            .or(self.options.word_wrap)
            .unwrap_or(false);
        let wrap_on_word_boundary = column
            .wrap_on_word_boundary
            .or(self.options.wrap_on_word_boundary)
            .unwrap_or(true);
        GridCell {
            content: row.text_for(column).to_string(),
            word_wrap,
            wrap_on_word_boundary,
            emphasis: CellEmphasis::Plain,
        }
    }
}
