pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Fixed width of the selection indicator column.
pub const SELECTION_COLUMN_WIDTH: u16 = 6;

/// Grid styling handed to the table formatter.
///
/// `head` and `border` hold color or attribute names ("red", "bold",
/// "#ff8800"). Empty lists leave the header and border unstyled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStyle {
    pub padding_left: u16,
    pub padding_right: u16,
    pub head: Vec<String>,
    pub border: Vec<String>,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            padding_left: 1,
            padding_right: 1,
            head: vec!["red".to_string()],
            border: vec!["gray".to_string()],
        }
    }
}

/// Prompt and table options.
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    pub message: String,
    pub prefix: String,
    pub page_size: usize,
    /// Widths of the data columns in order. Missing entries are sized to
    /// their content.
    pub col_widths: Vec<u16>,
    pub word_wrap: Option<bool>,
    pub wrap_on_word_boundary: Option<bool>,
    pub style: TableStyle,
    /// Static text painted below the grid.
    pub bottom_content: Option<String>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            message: String::new(),
            prefix: "?".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            col_widths: Vec::new(),
            word_wrap: None,
            wrap_on_word_boundary: None,
            style: TableStyle::default(),
            bottom_content: None,
        }
    }
}

impl TableOptions {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn col_widths(mut self, widths: Vec<u16>) -> Self {
        self.col_widths = widths;
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

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    pub fn bottom_content(mut self, content: impl Into<String>) -> Self {
        self.bottom_content = Some(content.into());
        self
    }

    /// Widths of every rendered column, selection column first.
    pub fn column_widths(&self, data_columns: usize) -> Vec<Option<u16>> {
        std::iter::once(Some(SELECTION_COLUMN_WIDTH))
            .chain((0..data_columns).map(|i| self.col_widths.get(i).copied()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_column_forced_to_six() {
        let options = TableOptions::default().col_widths(vec![30, 10]);
        assert_eq!(
            options.column_widths(3),
            vec![Some(6), Some(30), Some(10), None]
        );
    }

    #[test]
    fn defaults_match_prompt_conventions() {
        let options = TableOptions::default();
        assert_eq!(options.page_size, 5);
        assert_eq!(options.prefix, "?");
        assert!(options.word_wrap.is_none());
        assert_eq!(options.style.padding_left, 1);
    }
}
