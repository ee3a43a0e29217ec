//! Read-only world snapshot consumed by the decision pipeline.
//!
//! The snapshot is a plain value assembled by the world owner each
//! scheduler pass. Decision logic only reads it; mutation happens
//! through the actuator seam.

use serde::{Deserialize, Serialize};

use crate::actor::{ActorId, LocationId};

/// What the deciding actor can see of the world this tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// The location the deciding actor occupies, if any. Absence is a
    /// hard precondition failure that short-circuits decisions to idle.
    pub location: Option<LocationId>,
    /// Exits leading out of the current location.
    pub exits: Vec<LocationId>,
    /// Live hostile actors present at the location.
    pub hostiles: Vec<ActorId>,
    /// Whether a vendor is present.
    pub vendor_present: bool,
    /// Whether this location is a base camp.
    pub camp_present: bool,
    /// Lootable remains or containers at the location.
    pub lootable_count: u32,
    /// Harvestable resource nodes at the location.
    pub harvestable_count: u32,
    /// Crafting materials held by the deciding actor.
    pub material_count: u32,
    /// Healing supplies held by the deciding actor.
    pub healing_supplies: u32,
    /// Sellable loot held by the deciding actor.
    pub sellable_count: u32,
    /// Resource currency held by the deciding actor.
    pub currency: u32,
}

impl WorldSnapshot {
    /// A snapshot centered on a location with nothing else in it.
    pub fn at(location: LocationId) -> Self {
        Self {
            location: Some(location),
            ..Self::default()
        }
    }

    /// First hostile at the location, if any.
    pub fn first_hostile(&self) -> Option<ActorId> {
        self.hostiles.first().copied()
    }

    /// First exit from the location, if any.
    pub fn first_exit(&self) -> Option<LocationId> {
        self.exits.first().copied()
    }

    /// Whether any hostiles are present.
    pub fn hostiles_present(&self) -> bool {
        !self.hostiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let s = WorldSnapshot::default();
        assert!(s.location.is_none());
        assert!(!s.hostiles_present());
        assert!(s.first_exit().is_none());
        assert_eq!(s.currency, 0);
    }

    #[test]
    fn at_sets_location_only() {
        let loc = LocationId::new();
        let s = WorldSnapshot::at(loc);
        assert_eq!(s.location, Some(loc));
        assert!(s.exits.is_empty());
    }

    #[test]
    fn first_hostile_order() {
        let a = ActorId::new();
        let b = ActorId::new();
        let s = WorldSnapshot {
            hostiles: vec![a, b],
            ..WorldSnapshot::default()
        };
        assert_eq!(s.first_hostile(), Some(a));
        assert!(s.hostiles_present());
    }

    #[test]
    fn serde_roundtrip() {
        let s = WorldSnapshot {
            location: Some(LocationId::new()),
            vendor_present: true,
            currency: 12,
            ..WorldSnapshot::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        let s2: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(s2.location, s.location);
        assert!(s2.vendor_present);
        assert_eq!(s2.currency, 12);
    }
}
