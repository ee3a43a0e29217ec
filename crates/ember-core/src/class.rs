//! Per-class behavior tuning.
//!
//! Named classes get hand-tuned aggression, healing-eagerness, and gear
//! preferences; every unlisted class tag resolves to a default bucket.
//! The same profile parameterizes both decision tiers so focus overrides
//! and the behavior-tree fallback stay consistent for a given role.

use serde::{Deserialize, Serialize};

/// How readily an actor commits to combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggression {
    /// Engages whenever hostiles are present; never flees.
    Bold,
    /// Engages when healthy, withdraws when badly hurt.
    Measured,
    /// Avoids combat below half health.
    Wary,
}

/// Whether an actor shops for protection or for damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearBias {
    /// Prefers armor and wards.
    Defensive,
    /// Prefers weapons and foci.
    Offensive,
    /// No preference.
    Balanced,
}

/// Tuning knobs for one character class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassProfile {
    /// Combat commitment level.
    pub aggression: Aggression,
    /// Health fraction below which the actor wants to heal. Aggressive
    /// roles heal later (lower threshold), defensive roles earlier.
    pub heal_threshold: f64,
    /// Shopping preference.
    pub gear_bias: GearBias,
}

impl ClassProfile {
    /// Resolve the profile for a class tag. Unlisted tags get the
    /// default bucket.
    pub fn for_class(class: &str) -> Self {
        match class.to_lowercase().as_str() {
            "vanguard" => Self {
                aggression: Aggression::Bold,
                heal_threshold: 0.3,
                gear_bias: GearBias::Offensive,
            },
            "reaver" => Self {
                aggression: Aggression::Bold,
                heal_threshold: 0.25,
                gear_bias: GearBias::Offensive,
            },
            "warden" => Self {
                aggression: Aggression::Measured,
                heal_threshold: 0.6,
                gear_bias: GearBias::Defensive,
            },
            "mender" => Self {
                aggression: Aggression::Wary,
                heal_threshold: 0.7,
                gear_bias: GearBias::Defensive,
            },
            "arcanist" => Self {
                aggression: Aggression::Measured,
                heal_threshold: 0.5,
                gear_bias: GearBias::Offensive,
            },
            _ => Self::default(),
        }
    }

    /// Whether an actor at the given health fraction should seek healing.
    pub fn wants_heal(&self, health_fraction: f64) -> bool {
        health_fraction < self.heal_threshold
    }

    /// Whether an actor at the given health fraction should withdraw
    /// from combat rather than engage.
    pub fn wants_flee(&self, health_fraction: f64) -> bool {
        match self.aggression {
            Aggression::Bold => false,
            Aggression::Measured => health_fraction < 0.2,
            Aggression::Wary => health_fraction < 0.5,
        }
    }
}

impl Default for ClassProfile {
    /// The default bucket for unlisted classes.
    fn default() -> Self {
        Self {
            aggression: Aggression::Measured,
            heal_threshold: 0.5,
            gear_bias: GearBias::Balanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_classes_resolve() {
        assert_eq!(ClassProfile::for_class("vanguard").aggression, Aggression::Bold);
        assert_eq!(ClassProfile::for_class("warden").gear_bias, GearBias::Defensive);
        assert_eq!(ClassProfile::for_class("mender").aggression, Aggression::Wary);
    }

    #[test]
    fn lookup_case_insensitive() {
        assert_eq!(
            ClassProfile::for_class("Reaver"),
            ClassProfile::for_class("reaver")
        );
    }

    #[test]
    fn unlisted_class_gets_default_bucket() {
        let p = ClassProfile::for_class("pit fighter");
        assert_eq!(p, ClassProfile::default());
        assert_eq!(p.aggression, Aggression::Measured);
        assert!((p.heal_threshold - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn aggressive_roles_heal_later() {
        let reaver = ClassProfile::for_class("reaver");
        let mender = ClassProfile::for_class("mender");
        assert!(reaver.heal_threshold < mender.heal_threshold);
        // At 40% health the reaver fights on, the mender wants out.
        assert!(!reaver.wants_heal(0.4));
        assert!(mender.wants_heal(0.4));
    }

    #[test]
    fn bold_never_flees() {
        let p = ClassProfile::for_class("vanguard");
        assert!(!p.wants_flee(0.01));
    }

    #[test]
    fn wary_flees_below_half() {
        let p = ClassProfile::for_class("mender");
        assert!(p.wants_flee(0.49));
        assert!(!p.wants_flee(0.5));
    }
}
