use thiserror::Error;

/// Errors raised by the prompt outside of normal validation feedback.
///
/// A rejected submit is not an error: it is reported as
/// [`Step::Rejected`](crate::ui::table::Step::Rejected) and the prompt stays
/// active.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The prompt was constructed without any rows.
    #[error("Table prompt requires at least one row")]
    EmptyRows,

    /// A page must show at least one row.
    #[error("Page size must be at least 1 (got {page_size})")]
    InvalidPageSize { page_size: usize },

    /// The user pressed Ctrl+C.
    #[error("Prompt interrupted")]
    Interrupted,

    /// The event source ended before a submit was accepted.
    #[error("Input closed before the prompt was answered")]
    InputClosed,

    /// Terminal or display failure.
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptError {
    /// Process exit code used by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::Interrupted => 130,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_maps_to_sigint_exit_code() {
        assert_eq!(PromptError::Interrupted.exit_code(), 130);
        assert_eq!(PromptError::EmptyRows.exit_code(), 1);
    }

    #[test]
    fn io_error_converts() {
        let err: PromptError = std::io::Error::other("boom").into();
        assert!(matches!(err, PromptError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
