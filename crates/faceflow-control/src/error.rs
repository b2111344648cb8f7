//! Error types for the control layer
use thiserror::Error;

/// Control layer errors
///
/// Only the explicit registry API returns these; the dispatch path absorbs
/// its failures silently.
#[derive(Error, Debug)]
pub enum ControlError {
    /// No callback registered under the given name
    #[error("Action not found: {0}")]
    ActionNotFound(String),

    /// A registered callback returned an error
    #[error("Action failed: {0}")]
    ActionFailed(anyhow::Error),
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;
