use ratatui::style::{Color, Modifier, Style};

pub const QUESTION_PREFIX: Color = Color::Green;
pub const KEY_HINT: Color = Color::Cyan;
pub const POINTER_ROW: Color = Color::Cyan;
pub const POINTER_MARK: Color = Color::Blue;
pub const ERROR_MARKER: Color = Color::Red;

/// Symbols used in the selection column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub pointer: &'static str,
    pub selected: &'static str,
    pub unselected: &'static str,
}

impl Glyphs {
    pub const UNICODE: Glyphs = Glyphs {
        pointer: "❯",
        selected: "◉",
        unselected: "◯",
    };

    /// Fallback for terminals without the unicode figures.
    pub const ASCII: Glyphs = Glyphs {
        pointer: ">",
        selected: "(*)",
        unselected: "( )",
    };
}

impl Default for Glyphs {
    fn default() -> Self {
        if cfg!(windows) {
            Self::ASCII
        } else {
            Self::UNICODE
        }
    }
}

/// Styles and glyphs used when composing a frame.
///
/// Keeps color decisions out of the controller and projector so both can be
/// exercised with [`Theme::plain`].
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub prefix: Style,
    pub message: Style,
    pub key_hint: Style,
    /// Whole pointer row while the prompt is active.
    pub pointer_row: Style,
    /// Selection cell of the pointer row.
    pub pointer_mark: Style,
    pub error_marker: Style,
    pub glyphs: Glyphs,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prefix: Style::default().fg(QUESTION_PREFIX),
            message: Style::default().add_modifier(Modifier::BOLD),
            key_hint: Style::default().fg(KEY_HINT).add_modifier(Modifier::BOLD),
            pointer_row: Style::default().fg(POINTER_ROW).add_modifier(Modifier::BOLD),
            pointer_mark: Style::default().fg(POINTER_MARK),
            error_marker: Style::default().fg(ERROR_MARKER),
            glyphs: Glyphs::default(),
        }
    }
}

impl Theme {
    /// No colors or attributes; unicode glyphs.
    pub fn plain() -> Self {
        Self {
            prefix: Style::default(),
            message: Style::default(),
            key_hint: Style::default(),
            pointer_row: Style::default(),
            pointer_mark: Style::default(),
            error_marker: Style::default(),
            glyphs: Glyphs::UNICODE,
        }
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }
}
