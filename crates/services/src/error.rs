//! Shared error types for the services crate.

use thiserror::Error;

use vowel_core::DatasetError;

/// Errors emitted by session transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no option selected for the current question")]
    NoSelection,
    #[error("session already completed")]
    Completed,
    #[error("option is not offered for the current question: {0}")]
    UnknownOption(String),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}
