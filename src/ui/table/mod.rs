//! Multi-select table prompt.
//!
//! - [`SelectionModel`] - per-row selection slots and the pointer
//! - [`compute_window`] - which rows are visible on the current page
//! - [`TableReducer`] - pure transitions over [`TablePromptState`]
//! - [`RenderProjector`] - state to grid and frame
//! - [`PromptController`] - applies events, validates submits, paints frames

mod controller;
mod intent;
mod model;
mod options;
mod pagination;
mod projector;
mod reducer;
mod state;
mod validation;

pub use controller::{PromptController, PromptCore, Step};
pub use intent::TableIntent;
pub use model::{Column, Row, SelectionModel};
pub use options::{TableOptions, TableStyle, DEFAULT_PAGE_SIZE, SELECTION_COLUMN_WIDTH};
pub use pagination::{compute_window, PageWindow};
pub use projector::{PromptView, RenderProjector, RenderedFrame, ERROR_MARKER};
pub use reducer::TableReducer;
pub use state::{PromptStatus, TablePromptState};
pub use validation::{accept_all, SelectionRules, Validator};
