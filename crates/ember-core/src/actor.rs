//! Actors: the player avatar, hostiles, and hired companions.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub Uuid);

impl ActorId {
    /// Generate a new random actor ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Unique identifier for a location in the expedition world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub Uuid);

impl LocationId {
    /// Generate a new random location ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LocationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// The kind of an autonomous actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorKind {
    /// The player's avatar. A singleton: defeat triggers a respawn
    /// directive, never removal.
    Avatar,
    /// A hostile actor spawned during exploration.
    Hostile,
    /// A hired companion traveling with the avatar.
    Companion,
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avatar => write!(f, "avatar"),
            Self::Hostile => write!(f, "hostile"),
            Self::Companion => write!(f, "companion"),
        }
    }
}

/// Current and maximum health of an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Current health points.
    pub current: u32,
    /// Maximum health points.
    pub max: u32,
}

impl Health {
    /// Create a health value at full capacity.
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Fraction of health remaining, in `0.0..=1.0`. Zero max counts as empty.
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        f64::from(self.current.min(self.max)) / f64::from(self.max)
    }

    /// Whether any health remains.
    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

/// An autonomous actor in the expedition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Unique identifier.
    pub id: ActorId,
    /// Display name.
    pub name: String,
    /// Which variant of actor this is.
    pub kind: ActorKind,
    /// Class tag used for behavior tuning. Resolved through
    /// [`crate::class::ClassProfile::for_class`]; unknown tags fall into
    /// the default tuning bucket.
    pub class: String,
    /// Current and maximum health.
    pub health: Health,
    /// Where the actor currently is, if placed in the world.
    pub location: Option<LocationId>,
}

impl Actor {
    /// Create a new actor at full health with no location.
    pub fn new(kind: ActorKind, name: impl Into<String>, class: impl Into<String>, max_health: u32) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            kind,
            class: class.into(),
            health: Health::full(max_health),
            location: None,
        }
    }

    /// Whether the actor is alive.
    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actor_starts_at_full_health() {
        let a = Actor::new(ActorKind::Avatar, "Delver", "vanguard", 30);
        assert_eq!(a.health.current, 30);
        assert_eq!(a.health.max, 30);
        assert!(a.is_alive());
        assert!(a.location.is_none());
    }

    #[test]
    fn health_fraction() {
        let h = Health { current: 15, max: 30 };
        assert!((h.fraction() - 0.5).abs() < f64::EPSILON);
        assert!((Health::full(10).fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn health_fraction_zero_max() {
        let h = Health { current: 0, max: 0 };
        assert_eq!(h.fraction(), 0.0);
        assert!(h.is_depleted());
    }

    #[test]
    fn health_fraction_clamps_overheal() {
        let h = Health { current: 40, max: 30 };
        assert!((h.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn actor_ids_unique() {
        assert_ne!(ActorId::new(), ActorId::new());
    }

    #[test]
    fn short_display() {
        let id = ActorId::new();
        assert_eq!(id.to_string().len(), 8);
    }

    #[test]
    fn actor_kind_display() {
        assert_eq!(ActorKind::Avatar.to_string(), "avatar");
        assert_eq!(ActorKind::Hostile.to_string(), "hostile");
        assert_eq!(ActorKind::Companion.to_string(), "companion");
    }

    #[test]
    fn serde_roundtrip() {
        let a = Actor::new(ActorKind::Companion, "Sellsword", "reaver", 20);
        let json = serde_json::to_string(&a).unwrap();
        let b: Actor = serde_json::from_str(&json).unwrap();
        assert_eq!(b.id, a.id);
        assert_eq!(b.kind, ActorKind::Companion);
        assert_eq!(b.class, "reaver");
    }
}
