//! Interactive multi-select table prompt.
//!
//! Presents rows of tabular data in the terminal and lets the user pick any
//! number of them with the keyboard. The selected row values are returned in
//! row order once a submit passes validation.
//!
//! ```text
//! key event → PromptController → TableReducer → RenderProjector → Surface
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

pub use error::PromptError;
pub use ui::runtime::run;
pub use ui::table::{Column, PromptController, Row, SelectionRules, TableOptions};
