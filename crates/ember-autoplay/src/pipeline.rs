//! The two-tier decision pipeline.
//!
//! Tier one is the focus-mode override: a restricted, ordered candidate
//! menu for the active focus, walked until a candidate's precondition
//! holds. Tier two is the behavior-tree fallback, which always produces
//! a directive. Both tiers are parameterized by the same class profile
//! so a role behaves consistently whichever tier decides. The pipeline
//! is called from a polling loop and must never panic: missing world
//! data short-circuits to idle.

use ember_core::{Actor, ActorKind, ClassProfile, Directive, DirectiveKind, GearBias, WorldSnapshot};

use crate::behavior;
use crate::config::FocusMode;

/// Currency a vendor purchase requires.
pub const VENDOR_PRICE: u32 = 10;

/// The question automated play puts to the oracle.
pub const AUTO_QUESTION: &str = "What waits ahead?";

/// Decide what an actor does this tick.
///
/// Returns exactly one directive. Missing world data (no current
/// location) is a hard precondition failure answered with idle, never a
/// panic.
pub fn decide(actor: &Actor, snapshot: &WorldSnapshot, focus: FocusMode) -> Directive {
    if snapshot.location.is_none() {
        return Directive::idle();
    }
    let profile = ClassProfile::for_class(&actor.class);
    match actor.kind {
        ActorKind::Avatar => {
            if let Some(directive) = focus_override(actor, snapshot, focus, &profile) {
                return directive;
            }
            behavior::fallback(actor, snapshot, &profile)
        }
        ActorKind::Hostile | ActorKind::Companion => {
            if let Some(directive) = combat_override(actor, snapshot, focus) {
                return directive;
            }
            behavior::combat_fallback(actor, snapshot, &profile)
        }
    }
}

/// Walk the focus menu for the avatar. Returns the first candidate
/// whose precondition holds; `None` falls through to the tree.
fn focus_override(
    actor: &Actor,
    snapshot: &WorldSnapshot,
    focus: FocusMode,
    profile: &ClassProfile,
) -> Option<Directive> {
    let candidates: &[CandidateKind] = match focus {
        FocusMode::Combat => &[CandidateKind::Engage, CandidateKind::Scan],
        FocusMode::Explore => &[CandidateKind::Move, CandidateKind::Scan],
        FocusMode::Trade => &[CandidateKind::Sell, CandidateKind::Buy],
        FocusMode::Heal => &[CandidateKind::Heal],
        FocusMode::Oracle => &[CandidateKind::Commune],
        FocusMode::Loot => &[CandidateKind::Loot, CandidateKind::Harvest],
        FocusMode::BaseCamp => &[CandidateKind::Craft, CandidateKind::Harvest],
        FocusMode::Full => return None,
    };

    candidates
        .iter()
        .find_map(|c| c.propose(actor, snapshot, profile))
        .map(|(kind, priority)| Directive::from_override(kind, priority))
}

/// The combat-restricted override for hostiles and companions: only the
/// combat focus has a menu for them, and it only offers engagement.
fn combat_override(actor: &Actor, snapshot: &WorldSnapshot, focus: FocusMode) -> Option<Directive> {
    if focus != FocusMode::Combat {
        return None;
    }
    (actor.is_alive() && snapshot.hostiles_present())
        .then(|| snapshot.first_hostile())
        .flatten()
        .map(|target| Directive::from_override(DirectiveKind::Engage { target }, 8))
}

/// A focus-menu candidate: a directive kind plus its precondition.
#[derive(Debug, Clone, Copy)]
enum CandidateKind {
    Engage,
    Scan,
    Move,
    Sell,
    Buy,
    Heal,
    Commune,
    Loot,
    Harvest,
    Craft,
}

impl CandidateKind {
    /// Evaluate the candidate's precondition; on success return the
    /// concrete directive kind and its advisory priority.
    fn propose(
        self,
        actor: &Actor,
        snapshot: &WorldSnapshot,
        profile: &ClassProfile,
    ) -> Option<(DirectiveKind, u8)> {
        match self {
            Self::Engage => (actor.is_alive() && snapshot.hostiles_present())
                .then(|| snapshot.first_hostile())
                .flatten()
                .map(|target| (DirectiveKind::Engage { target }, 8)),
            Self::Scan => snapshot.location.map(|_| (DirectiveKind::Scan, 1)),
            Self::Move => snapshot
                .first_exit()
                .map(|to| (DirectiveKind::Move { to }, 2)),
            Self::Sell => (snapshot.vendor_present && snapshot.sellable_count > 0).then(|| {
                (
                    DirectiveKind::Sell {
                        item: "salvage".to_string(),
                    },
                    3,
                )
            }),
            Self::Buy => (snapshot.vendor_present && snapshot.currency >= VENDOR_PRICE).then(|| {
                (
                    DirectiveKind::Buy {
                        item: preferred_purchase(profile).to_string(),
                    },
                    3,
                )
            }),
            Self::Heal => (snapshot.healing_supplies > 0
                && profile.wants_heal(actor.health.fraction()))
            .then_some((DirectiveKind::Heal, 7)),
            Self::Commune => snapshot.location.map(|_| {
                (
                    DirectiveKind::Commune {
                        question: AUTO_QUESTION.to_string(),
                    },
                    2,
                )
            }),
            Self::Loot => (snapshot.lootable_count > 0).then_some((DirectiveKind::Loot, 5)),
            Self::Harvest => {
                (snapshot.harvestable_count > 0).then_some((DirectiveKind::Harvest, 4))
            }
            Self::Craft => (snapshot.camp_present && snapshot.material_count > 0).then(|| {
                (
                    DirectiveKind::Craft {
                        recipe: "field kit".to_string(),
                    },
                    4,
                )
            }),
        }
    }
}

/// What a class shops for, by gear bias.
pub fn preferred_purchase(profile: &ClassProfile) -> &'static str {
    match profile.gear_bias {
        GearBias::Defensive => "ward charm",
        GearBias::Offensive => "whetstone",
        GearBias::Balanced => "provisions",
    }
}
