//! Session error types

use switchboard_tabs::TabError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to persist session: {0}")]
    PersistenceWriteFailed(String),

    #[error("Persisted session is unreadable: {0}")]
    PersistenceReadCorrupt(String),
}

impl From<TabError> for SessionError {
    fn from(e: TabError) -> Self {
        match e {
            TabError::InvalidArgument(msg) => SessionError::InvalidArgument(msg),
            other => SessionError::InvalidArgument(other.to_string()),
        }
    }
}
