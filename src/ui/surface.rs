//! Display surfaces that paint prompt frames.

use std::io::{self, Write};

use crossterm::cursor::{MoveToColumn, MoveUp};
use crossterm::style::{Attribute, Color as TermColor, ContentStyle};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{queue, style::Print};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use unicode_width::UnicodeWidthStr;

/// Paints whole frames: the message block and the bottom block below it.
pub trait Surface {
    /// Replace the previously painted frame.
    fn paint(&mut self, message: &Text<'_>, bottom: &Text<'_>) -> io::Result<()>;

    /// Leave the last frame on screen and move past it.
    fn finish(&mut self) -> io::Result<()>;
}

/// Inline surface that repaints in place, below the current cursor line.
pub struct TerminalSurface<W: Write> {
    out: W,
    /// Screen rows used by the last painted frame.
    painted_rows: u16,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            painted_rows: 0,
        }
    }

    fn erase_previous(&mut self) -> io::Result<()> {
        if self.painted_rows == 0 {
            return Ok(());
        }
        queue!(self.out, MoveToColumn(0))?;
        if self.painted_rows > 1 {
            queue!(self.out, MoveUp(self.painted_rows - 1))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn paint(&mut self, message: &Text<'_>, bottom: &Text<'_>) -> io::Result<()> {
        self.erase_previous()?;

        let lines: Vec<&Line<'_>> = if bottom.lines.is_empty() {
            message.lines.iter().collect()
        } else {
            message.lines.iter().chain(bottom.lines.iter()).collect()
        };

        let columns = crossterm::terminal::size()
            .map(|(cols, _)| cols.max(1))
            .unwrap_or(80);
        let mut rows = 0u16;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                queue!(self.out, Print("\r\n"))?;
            }
            queue!(self.out, Print(line_to_ansi(line)))?;
            rows = rows.saturating_add(screen_rows(line, columns));
        }
        self.painted_rows = rows;
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\r\n"))?;
        self.painted_rows = 0;
        self.out.flush()
    }
}

/// Rows a line occupies once the terminal soft-wraps it.
fn screen_rows(line: &Line<'_>, columns: u16) -> u16 {
    let width: usize = line.spans.iter().map(|s| s.content.width()).sum();
    let columns = columns as usize;
    width.div_ceil(columns).max(1) as u16
}

/// Encode a styled line as text with ANSI escape sequences.
pub fn line_to_ansi(line: &Line<'_>) -> String {
    let mut out = String::new();
    for span in &line.spans {
        let style = line.style.patch(span.style);
        if style == Style::default() {
            out.push_str(&span.content);
        } else {
            out.push_str(&content_style(style).apply(&span.content).to_string());
        }
    }
    out
}

/// Plain text of a frame block, lines joined with `\n`.
pub fn plain_text(text: &Text<'_>) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn content_style(style: Style) -> ContentStyle {
    let mut out = ContentStyle::default();
    out.foreground_color = style.fg.and_then(term_color);
    out.background_color = style.bg.and_then(term_color);
    let modifiers = [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::SLOW_BLINK, Attribute::SlowBlink),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ];
    for (modifier, attribute) in modifiers {
        if style.add_modifier.contains(modifier) {
            out.attributes.set(attribute);
        }
    }
    out
}

fn term_color(color: Color) -> Option<TermColor> {
    let mapped = match color {
        Color::Reset => return None,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Span;

    #[test]
    fn unstyled_line_has_no_escapes() {
        let line = Line::from("plain");
        assert_eq!(line_to_ansi(&line), "plain");
    }

    #[test]
    fn styled_span_is_wrapped_in_escapes() {
        let line = Line::from(vec![Span::styled(
            ">> ",
            Style::default().fg(Color::Red),
        )]);
        let encoded = line_to_ansi(&line);
        assert!(encoded.starts_with('\u{1b}'));
        assert!(encoded.contains(">> "));
    }

    #[test]
    fn wide_lines_count_extra_rows() {
        let line = Line::from("x".repeat(25));
        assert_eq!(screen_rows(&line, 10), 3);
        assert_eq!(screen_rows(&Line::default(), 10), 1);
    }

    #[test]
    fn paint_writes_all_lines() {
        let mut surface = TerminalSurface::new(Vec::new());
        let message = Text::from(vec![Line::from("? pick"), Line::from("")]);
        let bottom = Text::from("footer");
        surface.paint(&message, &bottom).unwrap();
        let written = String::from_utf8(surface.out.clone()).unwrap();
        assert!(written.contains("? pick\r\n\r\nfooter"));
        assert_eq!(surface.painted_rows, 3);
    }

    #[test]
    fn plain_text_joins_lines() {
        let text = Text::from(vec![Line::from("a"), Line::from("b")]);
        assert_eq!(plain_text(&text), "a\nb");
    }
}
