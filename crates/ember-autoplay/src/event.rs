//! Autoplay event types and the event log.
//!
//! The audit surface of automated play: every arm, dispatch, rejection,
//! and toggle lands here so the control layer can show what the agents
//! did and why without hooking into the scheduler itself.

use ember_core::{ActorId, Directive};

/// What kind of autoplay event occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoplayEventKind {
    /// An actor's slot was armed.
    SlotArmed {
        /// The actor whose slot was armed.
        actor: ActorId,
        /// When the slot becomes eligible.
        at: u64,
    },
    /// A tick fired: the pipeline produced a directive and the actuator
    /// accepted it.
    TickDispatched {
        /// The acting actor.
        actor: ActorId,
        /// The directive that was dispatched.
        directive: Directive,
    },
    /// The actuator rejected a directive.
    ActuationRejected {
        /// The acting actor.
        actor: ActorId,
        /// The rejection reason.
        reason: String,
    },
    /// The avatar's automated play was enabled.
    AvatarEnabled,
    /// The avatar's automated play was disabled.
    AvatarDisabled,
}

impl AutoplayEventKind {
    /// Check whether a given actor is involved in this event.
    pub fn involves(&self, id: ActorId) -> bool {
        match self {
            Self::SlotArmed { actor, .. }
            | Self::TickDispatched { actor, .. }
            | Self::ActuationRejected { actor, .. } => *actor == id,
            Self::AvatarEnabled | Self::AvatarDisabled => false,
        }
    }
}

/// A record of something that happened during automated play.
#[derive(Debug, Clone)]
pub struct AutoplayEvent {
    /// Clock time when the event occurred, in milliseconds.
    pub at: u64,
    /// The specific kind of event that occurred.
    pub kind: AutoplayEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl AutoplayEvent {
    /// Create a new event at the given clock time.
    pub fn new(at: u64, kind: AutoplayEventKind, description: impl Into<String>) -> Self {
        Self {
            at,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events during automated play.
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<AutoplayEvent>,
    max_events: usize,
}

impl EventLog {
    /// Create a log keeping at most `max_events` entries; 0 means
    /// unlimited. Oldest entries are dropped when the cap is exceeded.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest if over capacity.
    pub fn push(&mut self, event: AutoplayEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let overflow = self.events.len() - self.max_events;
            self.events.drain(..overflow);
        }
    }

    /// All retained events, oldest first.
    pub fn events(&self) -> &[AutoplayEvent] {
        &self.events
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events involving a specific actor, oldest first.
    pub fn involving(&self, id: ActorId) -> Vec<&AutoplayEvent> {
        self.events.iter().filter(|e| e.kind.involves(id)).collect()
    }
}
