//! Shared domain types for the Emberdelve expedition core.
//!
//! Defines the actors that populate an expedition (the player avatar,
//! hostiles, hired companions), the directives their decision process
//! emits, the read-only world snapshot that process consumes, and the
//! per-class tuning profiles that parameterize it.

/// Actors and their identifiers.
pub mod actor;
/// Per-class behavior tuning profiles.
pub mod class;
/// The directive an actor's decision process outputs for one tick.
pub mod directive;
/// Read-only world-state snapshot consumed by decision logic.
pub mod snapshot;

pub use actor::{Actor, ActorId, ActorKind, Health, LocationId};
pub use class::{Aggression, ClassProfile, GearBias};
pub use directive::{Directive, DirectiveKind, Provenance};
pub use snapshot::WorldSnapshot;
