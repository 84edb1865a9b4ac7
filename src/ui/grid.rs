//! Grid description and the formatter that lays it out as text.

use std::str::FromStr;

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::table::{TableOptions, TableStyle};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellEmphasis {
    #[default]
    Plain,
    /// Selection indicator of the pointer row.
    Pointer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub content: String,
    pub word_wrap: bool,
    pub wrap_on_word_boundary: bool,
    pub emphasis: CellEmphasis,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub cells: Vec<GridCell>,
    /// Render the whole row with the pointer row style.
    pub highlighted: bool,
}

/// Header plus the visible body rows, selection column included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub header: Vec<String>,
    pub rows: Vec<GridRow>,
}

/// Widest a single column may get, fixed or auto-sized.
pub const MAX_COLUMN_WIDTH: u16 = 1024;

/// Turns a [`Grid`] into styled text lines.
pub trait GridFormatter {
    fn format(&self, grid: &Grid) -> Text<'static>;
}

/// Bordered grid drawn with ratatui's [`Table`] into an off-screen buffer.
#[derive(Debug, Clone)]
pub struct TableFormatter {
    widths: Vec<Option<u16>>,
    padding_left: u16,
    padding_right: u16,
    header_style: Style,
    border_style: Style,
    highlight_style: Style,
    pointer_style: Style,
}

impl TableFormatter {
    pub fn new(options: &TableOptions, data_columns: usize, theme: &Theme) -> Self {
        Self {
            widths: options.column_widths(data_columns),
            padding_left: options.style.padding_left,
            padding_right: options.style.padding_right,
            header_style: style_from_names(&options.style.head),
            border_style: style_from_names(&options.style.border),
            highlight_style: theme.pointer_row,
            pointer_style: theme.pointer_mark,
        }
    }

    /// Formatter with default styling and auto-sized columns.
    pub fn plain() -> Self {
        let style = TableStyle::default();
        Self {
            widths: Vec::new(),
            padding_left: style.padding_left,
            padding_right: style.padding_right,
            header_style: Style::default(),
            border_style: Style::default(),
            highlight_style: Style::default(),
            pointer_style: Style::default(),
        }
    }

    fn padding(&self) -> usize {
        (self.padding_left + self.padding_right) as usize
    }

    fn column_widths(&self, grid: &Grid) -> Vec<u16> {
        let columns = grid
            .header
            .len()
            .max(grid.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0));

        (0..columns)
            .map(|i| match self.widths.get(i).copied().flatten() {
                Some(width) => width.clamp(1, MAX_COLUMN_WIDTH),
                None => {
                    let header = grid.header.get(i).map(|h| h.width()).unwrap_or(0);
                    let content = grid
                        .rows
                        .iter()
                        .filter_map(|row| row.cells.get(i))
                        .flat_map(|cell| cell.content.split('\n'))
                        .map(UnicodeWidthStr::width)
                        .max()
                        .unwrap_or(0);
                    let width = header.max(content).saturating_add(self.padding());
                    clamp_u16(width).clamp(1, MAX_COLUMN_WIDTH)
                }
            })
            .collect()
    }

    fn inner_width(&self, width: u16) -> usize {
        (width as usize).saturating_sub(self.padding()).max(1)
    }

    fn padded(&self, line: String) -> Line<'static> {
        Line::from(format!("{}{}", " ".repeat(self.padding_left as usize), line))
    }

    /// Draw the inner rules ratatui's table does not: the header separator,
    /// separators between body rows and vertical lines between columns.
    fn draw_rules(&self, buf: &mut Buffer, widths: &[u16], heights: &[u16]) {
        let area = buf.area;
        if area.width < 2 || area.height < 2 {
            return;
        }
        let right = area.width - 1;
        let bottom = area.height - 1;

        let mut rule_rows = vec![2u16];
        let mut y = 3u16;
        for (i, height) in heights.iter().enumerate() {
            y = y.saturating_add(*height);
            if i + 1 < heights.len() {
                rule_rows.push(y);
                y = y.saturating_add(1);
            }
        }

        let mut rule_cols = Vec::new();
        let mut x = 1u16;
        for (i, width) in widths.iter().enumerate() {
            x = x.saturating_add(*width);
            if i + 1 < widths.len() {
                rule_cols.push(x);
                x = x.saturating_add(1);
            }
        }

        for &ry in &rule_rows {
            self.put(buf, 0, ry, "├");
            for rx in 1..right {
                self.put(buf, rx, ry, "─");
            }
            self.put(buf, right, ry, "┤");
        }
        for &rx in &rule_cols {
            self.put(buf, rx, 0, "┬");
            for ry in 1..bottom {
                let symbol = if rule_rows.contains(&ry) { "┼" } else { "│" };
                self.put(buf, rx, ry, symbol);
            }
            self.put(buf, rx, bottom, "┴");
        }
    }

    fn put(&self, buf: &mut Buffer, x: u16, y: u16, symbol: &str) {
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(self.border_style);
        }
    }
}

impl GridFormatter for TableFormatter {
    fn format(&self, grid: &Grid) -> Text<'static> {
        let widths = self.column_widths(grid);
        if widths.is_empty() {
            return Text::default();
        }

        let header = Row::new(grid.header.iter().zip(&widths).map(|(name, &width)| {
            Cell::from(self.padded(truncate(name, self.inner_width(width))))
        }))
        .style(self.header_style)
        .bottom_margin(1);

        let mut heights = Vec::with_capacity(grid.rows.len());
        let mut rows = Vec::with_capacity(grid.rows.len());
        for (index, row) in grid.rows.iter().enumerate() {
            let mut height = 1usize;
            let mut cells = Vec::with_capacity(row.cells.len());
            for (cell, &width) in row.cells.iter().zip(&widths) {
                let lines = layout_cell(cell, self.inner_width(width));
                height = height.max(lines.len());
                let text = Text::from(
                    lines
                        .into_iter()
                        .map(|line| self.padded(line))
                        .collect::<Vec<_>>(),
                );
                let mut rendered = Cell::from(text);
                if cell.emphasis == CellEmphasis::Pointer {
                    rendered = rendered.style(self.pointer_style);
                }
                cells.push(rendered);
            }

            let height = clamp_u16(height);
            let mut rendered = Row::new(cells).height(height);
            if index + 1 < grid.rows.len() {
                rendered = rendered.bottom_margin(1);
            }
            if row.highlighted {
                rendered = rendered.style(self.highlight_style);
            }
            heights.push(height);
            rows.push(rendered);
        }

        let width = widths.iter().map(|&w| w as usize).sum::<usize>() + widths.len() - 1 + 2;
        let body = heights.iter().map(|&h| h as usize).sum::<usize>()
            + heights.len().saturating_sub(1);
        let (width, height) = (clamp_u16(width), clamp_u16(body + 4));

        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let table = Table::new(rows, widths.iter().map(|&w| Constraint::Length(w)))
            .header(header)
            .column_spacing(1)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            );
        Widget::render(table, area, &mut buf);
        self.draw_rules(&mut buf, &widths, &heights);

        buffer_to_text(&buf)
    }
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Lines of one cell fitted into `width` columns.
fn layout_cell(cell: &GridCell, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in cell.content.split('\n') {
        if !cell.word_wrap {
            lines.push(truncate(raw, width));
        } else if raw.is_empty() {
            lines.push(String::new());
        } else if cell.wrap_on_word_boundary {
            lines.extend(
                textwrap::wrap(raw, width)
                    .into_iter()
                    .map(|line| line.into_owned()),
            );
        } else {
            lines.extend(hard_wrap(raw, width));
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Cut `text` to `width` columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Split `text` into chunks of at most `width` columns, ignoring word
/// boundaries.
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += w;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Style built from color and attribute names, e.g. `["bold", "cyan"]`.
pub fn style_from_names(names: &[String]) -> Style {
    names.iter().fold(Style::default(), |style, name| {
        match name.to_ascii_lowercase().as_str() {
            "bold" => style.add_modifier(Modifier::BOLD),
            "dim" => style.add_modifier(Modifier::DIM),
            "italic" => style.add_modifier(Modifier::ITALIC),
            "underline" => style.add_modifier(Modifier::UNDERLINED),
            "inverse" => style.add_modifier(Modifier::REVERSED),
            "grey" => style.fg(Color::Gray),
            other => match Color::from_str(other) {
                Ok(color) => style.fg(color),
                Err(_) => {
                    tracing::warn!(name = %name, "Ignoring unknown table style name");
                    style
                }
            },
        }
    })
}

/// Read a rendered buffer back as styled lines, merging runs of equal style.
pub fn buffer_to_text(buf: &Buffer) -> Text<'static> {
    let area = buf.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_style = Style::default();
        let mut skip = 0usize;
        for x in area.left()..area.right() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let Some(cell) = buf.cell((x, y)) else {
                continue;
            };
            if cell.skip {
                continue;
            }
            let symbol = cell.symbol();
            skip = symbol.width().saturating_sub(1);
            let style = cell.style();
            if style != run_style && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_style));
            }
            run_style = style;
            run.push_str(symbol);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_style));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn hard_wrap_splits_mid_word() {
        assert_eq!(hard_wrap("abcdefg", 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn word_boundary_wrap_keeps_words() {
        let cell = GridCell {
            content: "some thing long".to_string(),
            word_wrap: true,
            wrap_on_word_boundary: true,
            emphasis: CellEmphasis::Plain,
        };
        assert_eq!(layout_cell(&cell, 10), vec!["some thing", "long"]);
    }

    #[test]
    fn style_names_combine() {
        let style = style_from_names(&["bold".to_string(), "cyan".to_string()]);
        assert_eq!(style.fg, Some(Color::Cyan));
        assert!(style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(style_from_names(&[]), Style::default());
    }
}
