//! Directives: the single concrete action an actor's decision process
//! outputs for one tick.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::actor::{ActorId, LocationId};

/// The concrete action to perform. A closed enumeration: decision logic
/// always produces exactly one of these, with [`DirectiveKind::Idle`] as
/// the terminal default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectiveKind {
    /// Move to an adjacent location.
    Move {
        /// Destination location.
        to: LocationId,
    },
    /// Attack a hostile actor.
    Engage {
        /// The actor to attack.
        target: ActorId,
    },
    /// Invoke a named capability, optionally at a target.
    Cast {
        /// Capability name.
        capability: String,
        /// Optional target actor.
        target: Option<ActorId>,
    },
    /// Consume a healing supply.
    Heal,
    /// Purchase an item from a vendor.
    Buy {
        /// Item name.
        item: String,
    },
    /// Sell an item to a vendor.
    Sell {
        /// Item name.
        item: String,
    },
    /// Pick up lootable remains or containers here.
    Loot,
    /// Gather a harvestable resource node here.
    Harvest,
    /// Craft a recipe at a base camp.
    Craft {
        /// Recipe name.
        recipe: String,
    },
    /// Put a question to the oracle.
    Commune {
        /// The question text.
        question: String,
    },
    /// Survey the current location.
    Scan,
    /// Withdraw from combat.
    Flee,
    /// Return to life after defeat (avatar only).
    Respawn,
    /// Do nothing this tick.
    Idle,
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { to } => write!(f, "move to {to}"),
            Self::Engage { target } => write!(f, "engage {target}"),
            Self::Cast { capability, .. } => write!(f, "cast {capability}"),
            Self::Heal => write!(f, "heal"),
            Self::Buy { item } => write!(f, "buy {item}"),
            Self::Sell { item } => write!(f, "sell {item}"),
            Self::Loot => write!(f, "loot"),
            Self::Harvest => write!(f, "harvest"),
            Self::Craft { recipe } => write!(f, "craft {recipe}"),
            Self::Commune { .. } => write!(f, "commune"),
            Self::Scan => write!(f, "scan"),
            Self::Flee => write!(f, "flee"),
            Self::Respawn => write!(f, "respawn"),
            Self::Idle => write!(f, "idle"),
        }
    }
}

/// Which decision tier produced a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Proposed by a focus-mode override menu.
    FocusOverride,
    /// Produced by the behavior-tree fallback.
    BehaviorTree,
}

/// One tick's worth of intent for one actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// The action to perform.
    pub kind: DirectiveKind,
    /// Advisory priority for the actuator. Not consulted by the
    /// scheduler.
    pub priority: u8,
    /// Which tier produced this directive.
    pub provenance: Provenance,
}

impl Directive {
    /// Create a directive from a focus-mode override.
    pub fn from_override(kind: DirectiveKind, priority: u8) -> Self {
        Self {
            kind,
            priority,
            provenance: Provenance::FocusOverride,
        }
    }

    /// Create a directive from the behavior-tree fallback.
    pub fn from_tree(kind: DirectiveKind, priority: u8) -> Self {
        Self {
            kind,
            priority,
            provenance: Provenance::BehaviorTree,
        }
    }

    /// The do-nothing directive, provenance behavior-tree.
    pub fn idle() -> Self {
        Self::from_tree(DirectiveKind::Idle, 0)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
