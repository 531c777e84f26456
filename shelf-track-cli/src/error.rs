use shelf_track_catalog::ValidationError;
use shelf_track_db::{OperationError, SchemaError};
use thiserror::Error;

/// Errors that can end a menu action.
///
/// Everything except `Io` and `EndOfInput` is reported to the operator and
/// the menu is shown again.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the terminal
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Operator input failed a type or length check
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Store operation failed (missing reference, duplicate id, SQLite)
    #[error("{0}")]
    Operation(#[from] OperationError),

    /// Database could not be opened
    #[error("Database error: {0}")]
    Database(#[from] SchemaError),

    /// Menu or field choice outside the listed options
    #[error("Invalid choice '{0}'")]
    InvalidChoice(String),

    /// Input closed while a prompt was waiting
    #[error("End of input")]
    EndOfInput,
}

impl CliError {
    pub(crate) fn invalid_choice(choice: impl Into<String>) -> Self {
        Self::InvalidChoice(choice.into())
    }

    /// Whether the menu can carry on after this error.
    pub(crate) fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::EndOfInput)
    }
}
