//! The actuator seam.
//!
//! The world owner applies directives (combat resolution, movement,
//! trade) behind this trait; the scheduler only needs to know how long
//! the action takes so it can re-arm the actor's slot.

use ember_core::{Actor, Directive};

use crate::error::AutoplayResult;

/// Applies a directive to world state.
pub trait Actuator {
    /// Carry out one directive for one actor. On success, returns the
    /// action's resolution time in milliseconds; the actor's slot
    /// re-arms that far in the future.
    fn apply(&mut self, actor: &Actor, directive: &Directive) -> AutoplayResult<u64>;
}

/// An actuator that accepts every directive with a fixed resolution
/// time. Useful for tests and dry runs.
#[derive(Debug, Clone)]
pub struct NoopActuator {
    /// Resolution time reported for every directive.
    pub delay_ms: u64,
}

impl NoopActuator {
    /// Create a no-op actuator with the given resolution time.
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Actuator for NoopActuator {
    fn apply(&mut self, _actor: &Actor, _directive: &Directive) -> AutoplayResult<u64> {
        Ok(self.delay_ms)
    }
}
