//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tab kind: {0}")]
    UnknownKind(String),
}
