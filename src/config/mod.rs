//! TOML description of a table prompt.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ColumnConfig, PromptConfig, RowConfig, StyleConfig, ValidationConfig};
