use table_select::ui::grid::{
    CellEmphasis, Grid, GridCell, GridFormatter, GridRow, TableFormatter, MAX_COLUMN_WIDTH,
};
use table_select::ui::surface::plain_text;
use table_select::ui::theme::Theme;
use table_select::TableOptions;

fn cell(content: &str, word_wrap: bool, wrap_on_word_boundary: bool) -> GridCell {
    GridCell {
        content: content.to_string(),
        word_wrap,
        wrap_on_word_boundary,
        emphasis: CellEmphasis::Plain,
    }
}

fn marker(content: &str) -> GridCell {
    GridCell {
        emphasis: CellEmphasis::Pointer,
        ..cell(content, false, false)
    }
}

fn single_column(content: GridCell) -> Grid {
    Grid {
        header: vec![String::new(), "Name".to_string()],
        rows: vec![GridRow {
            cells: vec![marker("❯◯"), content],
            highlighted: true,
        }],
    }
}

fn fixed_width_formatter(width: u16) -> TableFormatter {
    let options = TableOptions::new("Pick").col_widths(vec![width]);
    TableFormatter::new(&options, 1, &Theme::plain())
}

#[test]
fn auto_sized_grid_draws_all_rules() {
    let grid = Grid {
        header: vec![String::new(), "Name".to_string()],
        rows: vec![
            GridRow {
                cells: vec![marker("❯◯"), cell("A", false, true)],
                highlighted: true,
            },
            GridRow {
                cells: vec![cell(" ◯", false, false), cell("B", false, true)],
                highlighted: false,
            },
        ],
    };

    let text = plain_text(&TableFormatter::plain().format(&grid));
    let expected = [
        "┌────┬──────┐",
        "│    │ Name │",
        "├────┼──────┤",
        "│ ❯◯ │ A    │",
        "├────┼──────┤",
        "│  ◯ │ B    │",
        "└────┴──────┘",
    ]
    .join("\n");
    assert_eq!(text, expected);
}

#[test]
fn word_boundary_wrap_grows_the_row() {
    let grid = single_column(cell("alpha beta", true, true));
    let text = plain_text(&fixed_width_formatter(8).format(&grid));
    let lines: Vec<&str> = text.lines().collect();

    // Top border, header, rule, two body lines, bottom border.
    assert_eq!(lines.len(), 6);
    assert!(lines[3].contains(" alpha "));
    assert!(lines[4].contains(" beta "));
}

#[test]
fn hard_wrap_splits_inside_words() {
    let grid = single_column(cell("abcdefghij", true, false));
    let text = plain_text(&fixed_width_formatter(8).format(&grid));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert!(lines[3].contains(" abcdef "));
    assert!(lines[4].contains(" ghij "));
}

#[test]
fn unwrapped_content_is_truncated() {
    let grid = single_column(cell("abcdefghij", false, true));
    let text = plain_text(&fixed_width_formatter(8).format(&grid));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert!(lines[3].contains(" abcde… "));
}

#[test]
fn selection_column_keeps_fixed_width() {
    let grid = single_column(cell("x", false, true));
    let text = plain_text(&fixed_width_formatter(8).format(&grid));
    let top = text.lines().next().unwrap();

    // Borders plus a 6-wide selection column, a separator and the 8-wide column.
    assert_eq!(top, "┌──────┬────────┐");
}

#[test]
fn oversized_fixed_widths_are_capped() {
    let options = TableOptions::new("Pick").col_widths(vec![40000, 40000]);
    let formatter = TableFormatter::new(&options, 2, &Theme::plain());
    let grid = Grid {
        header: vec![String::new(), "A".to_string(), "B".to_string()],
        rows: vec![GridRow {
            cells: vec![marker("❯◯"), cell("a", false, true), cell("b", false, true)],
            highlighted: true,
        }],
    };

    let text = plain_text(&formatter.format(&grid));
    let top = text.lines().next().unwrap();
    let cap = MAX_COLUMN_WIDTH as usize;
    // Selection column, two capped columns, two separators, two borders.
    assert_eq!(top.chars().count(), 6 + cap * 2 + 2 + 2);
}

#[test]
fn oversized_content_is_capped_when_auto_sized() {
    let grid = single_column(cell(&"x".repeat(70_000), false, true));
    let text = plain_text(&TableFormatter::plain().format(&grid));
    let lines: Vec<&str> = text.lines().collect();

    let cap = MAX_COLUMN_WIDTH as usize;
    // Auto-sized selection column is 4 wide: "❯◯" plus padding.
    assert_eq!(lines[0].chars().count(), 4 + cap + 1 + 2);
    assert!(lines[3].contains('…'));
}
