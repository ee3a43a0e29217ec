//! Error types for the autoplay crate.

/// Alias for `Result<T, ActuateError>`.
pub type AutoplayResult<T> = Result<T, ActuateError>;

/// Rejection reasons from the actuator seam.
///
/// The scheduler never propagates these; a rejected directive is logged
/// and the actor's slot re-armed for the next eligible window.
#[derive(Debug, thiserror::Error)]
pub enum ActuateError {
    /// The directive refers to something no longer in the world.
    #[error("stale directive target: {0}")]
    StaleTarget(String),

    /// The world owner refused the directive.
    #[error("directive rejected: {0}")]
    Rejected(String),
}
