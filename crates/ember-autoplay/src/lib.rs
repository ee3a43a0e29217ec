//! Agent tick scheduling and the decision pipeline.
//!
//! Decides when each autonomous actor acts and what it does when it
//! acts. A per-actor tick scheduler clears a slot, asks the two-tier
//! decision pipeline (focus-mode override, then behavior-tree fallback)
//! for exactly one directive, hands it to the actuator seam, and
//! re-arms the slot from the action's resolution time. The avatar's own
//! automated play uses the same primitive with a single slot and a
//! self-accelerating delay. Everything runs in one logical pass over a
//! caller-supplied monotonic millisecond clock; there is no hidden
//! global state.

/// The actuator seam to the world owner.
pub mod actuator;
/// The avatar's automated-play slot.
pub mod avatar;
/// The behavior-tree fallback tier.
pub mod behavior;
/// Focus and speed configuration.
pub mod config;
/// The context object passed to scheduler passes.
pub mod context;
/// Error types for the autoplay crate.
pub mod error;
/// Autoplay event types and the event log.
pub mod event;
/// The two-tier decision pipeline.
pub mod pipeline;
/// The per-actor tick scheduler.
pub mod scheduler;

pub use actuator::{Actuator, NoopActuator};
pub use avatar::AvatarAutoplay;
pub use config::{AutoplayConfig, FocusMode, SpeedMode};
pub use context::TickContext;
pub use error::{ActuateError, AutoplayResult};
pub use event::{AutoplayEvent, AutoplayEventKind, EventLog};
pub use pipeline::decide;
pub use scheduler::{Slot, TickScheduler};
