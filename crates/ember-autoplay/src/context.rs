//! The context object passed to scheduler passes.
//!
//! An explicit bundle of everything one pass may touch: the world
//! snapshot, the actuator, the RNG, and the event log. Passing it in
//! keeps the scheduler free of hidden process-wide state.

use rand::rngs::StdRng;

use ember_core::WorldSnapshot;

use crate::actuator::Actuator;
use crate::event::{AutoplayEvent, AutoplayEventKind, EventLog};

/// Mutable context for one scheduler pass.
pub struct TickContext<'a> {
    /// The world snapshot for this pass, assembled from the deciding
    /// actor's perspective by the world owner.
    pub snapshot: &'a WorldSnapshot,
    /// The actuator that applies directives.
    pub actuator: &'a mut dyn Actuator,
    /// Seeded RNG for jitter draws.
    pub rng: &'a mut StdRng,
    /// The autoplay event log.
    pub events: &'a mut EventLog,
}

impl TickContext<'_> {
    /// Emit an autoplay event at the given clock time.
    pub fn emit(&mut self, at: u64, kind: AutoplayEventKind, description: impl Into<String>) {
        self.events.push(AutoplayEvent::new(at, kind, description));
    }
}
