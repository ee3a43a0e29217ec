//! The behavior-tree fallback tier.
//!
//! A fixed-priority rule tree that evaluates actor and world state
//! unconditionally and always returns exactly one directive; idle is
//! the terminal default. Hostiles and companions get a restricted tree
//! limited to engage, flee, and idle.

use ember_core::{Actor, ClassProfile, Directive, DirectiveKind, WorldSnapshot};

use crate::pipeline::{VENDOR_PRICE, preferred_purchase};

/// The avatar's fallback tree. Survival first, then opportunity, then
/// movement; idle when nothing applies.
pub fn fallback(actor: &Actor, snapshot: &WorldSnapshot, profile: &ClassProfile) -> Directive {
    if !actor.is_alive() {
        return Directive::from_tree(DirectiveKind::Respawn, 10);
    }

    let fraction = actor.health.fraction();

    if profile.wants_heal(fraction) && snapshot.healing_supplies > 0 {
        return Directive::from_tree(DirectiveKind::Heal, 8);
    }

    if let Some(target) = snapshot.first_hostile() {
        if profile.wants_flee(fraction) {
            return Directive::from_tree(DirectiveKind::Flee, 9);
        }
        return Directive::from_tree(DirectiveKind::Engage { target }, 8);
    }

    if snapshot.lootable_count > 0 {
        return Directive::from_tree(DirectiveKind::Loot, 5);
    }

    if snapshot.harvestable_count > 0 {
        return Directive::from_tree(DirectiveKind::Harvest, 4);
    }

    if snapshot.vendor_present && snapshot.currency >= VENDOR_PRICE {
        return Directive::from_tree(
            DirectiveKind::Buy {
                item: preferred_purchase(profile).to_string(),
            },
            3,
        );
    }

    if let Some(to) = snapshot.first_exit() {
        return Directive::from_tree(DirectiveKind::Move { to }, 2);
    }

    if snapshot.location.is_some() {
        return Directive::from_tree(DirectiveKind::Scan, 1);
    }

    Directive::idle()
}

/// The restricted tree for hostiles and companions: engage, flee, or
/// idle.
pub fn combat_fallback(
    actor: &Actor,
    snapshot: &WorldSnapshot,
    profile: &ClassProfile,
) -> Directive {
    if !actor.is_alive() {
        return Directive::idle();
    }

    let Some(target) = snapshot.first_hostile() else {
        return Directive::idle();
    };

    if profile.wants_flee(actor.health.fraction()) {
        return Directive::from_tree(DirectiveKind::Flee, 9);
    }

    Directive::from_tree(DirectiveKind::Engage { target }, 8)
}
