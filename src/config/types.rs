use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ui::table::{
    Column, Row, SelectionRules, TableOptions, TableStyle, DEFAULT_PAGE_SIZE,
};
use crate::ui::theme::{Glyphs, Theme};

/// A table prompt described in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Question shown above the grid.
    pub message: String,
    /// Marker printed before the question (default: "?").
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Rows visible at once (default: 5).
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Widths of the data columns, in order.
    #[serde(default)]
    pub col_widths: Vec<u16>,
    #[serde(default)]
    pub word_wrap: Option<bool>,
    #[serde(default)]
    pub wrap_on_word_boundary: Option<bool>,
    /// Free text printed below the grid.
    #[serde(default)]
    pub bottom_content: Option<String>,
    /// Use `>`, `(*)`, `( )` instead of the unicode glyphs.
    #[serde(default)]
    pub ascii_glyphs: bool,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    pub columns: Vec<ColumnConfig>,
    pub rows: Vec<RowConfig>,
}

/// Grid styling, keyed the way the table options name them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StyleConfig {
    #[serde(default = "default_padding")]
    pub padding_left: u16,
    #[serde(default = "default_padding")]
    pub padding_right: u16,
    /// Color/attribute names for header cells. Empty means unstyled.
    #[serde(default = "default_head")]
    pub head: Vec<String>,
    #[serde(default = "default_border")]
    pub border: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub min_selected: Option<usize>,
    #[serde(default)]
    pub max_selected: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Header text.
    pub name: String,
    /// Row field holding this column's text. Falls back to `name`.
    #[serde(default, alias = "key")]
    pub value: Option<String>,
    #[serde(default)]
    pub word_wrap: Option<bool>,
    #[serde(default)]
    pub wrap_on_word_boundary: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowConfig {
    /// Value reported when the row is selected.
    pub value: String,
    /// Cell text keyed by column value or name.
    #[serde(flatten)]
    pub cells: HashMap<String, String>,
}

fn default_prefix() -> String {
    "?".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_padding() -> u16 {
    1
}

fn default_head() -> Vec<String> {
    vec!["red".to_string()]
}

fn default_border() -> Vec<String> {
    vec!["gray".to_string()]
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            padding_left: default_padding(),
            padding_right: default_padding(),
            head: default_head(),
            border: default_border(),
        }
    }
}

impl From<&StyleConfig> for TableStyle {
    fn from(style: &StyleConfig) -> Self {
        TableStyle {
            padding_left: style.padding_left,
            padding_right: style.padding_right,
            head: style.head.clone(),
            border: style.border.clone(),
        }
    }
}

impl From<&ColumnConfig> for Column {
    fn from(config: &ColumnConfig) -> Self {
        let mut column = Column::new(config.name.clone());
        if let Some(key) = &config.value {
            column = column.key(key.clone());
        }
        column.word_wrap = config.word_wrap;
        column.wrap_on_word_boundary = config.wrap_on_word_boundary;
        column
    }
}

impl From<&RowConfig> for Row<String> {
    fn from(config: &RowConfig) -> Self {
        config
            .cells
            .iter()
            .fold(Row::new(config.value.clone()), |row, (key, text)| {
                row.cell(key.clone(), text.clone())
            })
    }
}

impl PromptConfig {
    pub fn columns(&self) -> Vec<Column> {
        self.columns.iter().map(Column::from).collect()
    }

    pub fn rows(&self) -> Vec<Row<String>> {
        self.rows.iter().map(Row::from).collect()
    }

    pub fn table_options(&self) -> TableOptions {
        let mut options = TableOptions::new(self.message.clone())
            .page_size(self.page_size)
            .col_widths(self.col_widths.clone())
            .style(TableStyle::from(&self.style));
        options.prefix = self.prefix.clone();
        options.word_wrap = self.word_wrap;
        options.wrap_on_word_boundary = self.wrap_on_word_boundary;
        options.bottom_content = self.bottom_content.clone();
        options
    }

    pub fn selection_rules(&self) -> SelectionRules {
        SelectionRules {
            min_selected: self.validation.min_selected,
            max_selected: self.validation.max_selected,
        }
    }

    pub fn theme(&self) -> Theme {
        if self.ascii_glyphs {
            Theme::default().with_glyphs(Glyphs::ASCII)
        } else {
            Theme::default()
        }
    }
}
