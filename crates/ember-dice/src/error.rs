//! Error types for the dice crate.

/// Alias for `Result<T, DiceError>`.
pub type DiceResult<T> = Result<T, DiceError>;

/// Errors that can occur while parsing or evaluating dice expressions.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// The input could not be parsed as a dice expression.
    #[error("invalid dice expression: \"{0}\"")]
    InvalidExpression(String),

    /// A stat named in an expression is absent from the stat block.
    #[error("unknown stat: {0}")]
    UnknownStat(String),
}
