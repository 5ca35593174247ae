use std::io;

/// Everything that can go wrong while editing
///
/// Only `Io` ends the session; the rest surface as a notice in the status
/// line.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal draws, event polling and other OS level failures
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Key-value store failures
    ///
    /// Examples: store file unreadable, corrupt store contents, failed flush.
    /// Returned from save, save-as and open dispatches; the editor state is
    /// left untouched when this is raised.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration errors
    ///
    /// Examples: an explicitly requested config file that does not exist
    #[error("Config error: {0}")]
    Config(String),

    /// A key that makes no sense in the current focus
    ///
    /// Examples: opening a file while the file list is empty
    #[error("State error: {0}")]
    State(String),
}

impl AppError {
    /// Whether this error came from the key-value store
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
