//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::io;

use ratatui::text::Text;
use table_select::ui::surface::{plain_text, Surface};
use table_select::ui::theme::Theme;
use table_select::{Column, PromptController, Row, TableOptions};

/// One painted frame as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaintedFrame {
    pub message: String,
    pub bottom: String,
}

/// Surface that records every frame instead of writing to a terminal.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<PaintedFrame>,
    pub finished: usize,
}

impl RecordingSurface {
    pub fn last(&self) -> &PaintedFrame {
        self.frames.last().expect("no frame painted yet")
    }
}

impl Surface for RecordingSurface {
    fn paint(&mut self, message: &Text<'_>, bottom: &Text<'_>) -> io::Result<()> {
        self.frames.push(PaintedFrame {
            message: plain_text(message),
            bottom: plain_text(bottom),
        });
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished += 1;
        Ok(())
    }
}

pub fn workout_columns() -> Vec<Column> {
    vec![
        Column::new("Arms").key("arms"),
        Column::new("Legs").key("legs"),
        Column::new("Cardio").key("cardio"),
    ]
}

/// Six rows valued "a" to "f".
pub fn workout_rows() -> Vec<Row<String>> {
    [
        ("a", "Pull-ups", "Squats", "Running"),
        ("b", "Push-ups", "Lunges", "Cycling"),
        ("c", "Dips", "Deadlifts", "Rowing"),
        ("d", "Curls", "Leg press", "Swimming"),
        ("e", "Rows", "Calf raises", "Jump rope"),
        ("f", "Presses", "Step-ups", "Stairs"),
    ]
    .into_iter()
    .map(|(value, arms, legs, cardio)| {
        Row::new(value.to_string())
            .cell("arms", arms)
            .cell("legs", legs)
            .cell("cardio", cardio)
    })
    .collect()
}

pub fn workout_prompt(page_size: usize) -> PromptController<String, RecordingSurface> {
    PromptController::new(
        workout_columns(),
        workout_rows(),
        TableOptions::new("Choose your workout").page_size(page_size),
        RecordingSurface::default(),
    )
    .expect("valid prompt")
    .with_theme(Theme::plain())
}
