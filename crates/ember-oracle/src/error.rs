//! Error types for the oracle crate.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, OracleError>;

/// Errors that can occur during an oracle session.
#[derive(Debug, Error)]
pub enum OracleError {
    /// A consultation was attempted with an empty question.
    #[error("empty oracle question")]
    EmptyQuestion,
}
