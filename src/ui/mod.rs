//! Terminal side of the prompt: key mapping, grid formatting, painting and
//! the event loop, plus the MVI scaffolding the table prompt is built on.

pub mod events;
pub mod grid;
pub mod mvi;
pub mod runtime;
pub mod surface;
pub mod table;
pub mod terminal_guard;
pub mod theme;
