//! The oracle resolution engine.
//!
//! A d100 roll, adjusted by the surge counter, lands in one of eight
//! bands: Yes or No, optionally qualified by `and`, `but`, or
//! `unexpectedly`. Rolls above 50 are pushed further up by surge, rolls
//! at or below 50 further down, so high surge makes both extremes more
//! likely. The `unexpectedly` bands trigger an independent d20 roll on
//! the twist side table. The engine is pure: it mutates nothing, and the
//! same seed produces the same answer sequence.

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use ember_dice::Die;

use crate::twist::{TwistRoll, twist_outcome};

/// The oracle's answer to a yes/no question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleAnswer {
    /// Affirmative.
    Yes,
    /// Negative.
    No,
}

impl std::fmt::Display for OracleAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// A nuance attached to an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Qualifier {
    /// The answer goes further than asked.
    And,
    /// The answer comes with a cost or an opening.
    But,
    /// A major complication: the twist table fires.
    Unexpectedly,
}

impl std::fmt::Display for Qualifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::But => write!(f, "but"),
            Self::Unexpectedly => write!(f, "unexpectedly"),
        }
    }
}

/// The full result of one oracle consultation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleResult {
    /// The yes/no answer.
    pub answer: OracleAnswer,
    /// Optional qualifier. `Some(Unexpectedly)` always carries a twist;
    /// every other value never does.
    pub qualifier: Option<Qualifier>,
    /// Human-readable narrative line for the answer.
    pub narrative: String,
    /// The die roll actually used: surge-adjusted and clamped to
    /// `1..=100`.
    pub roll: u32,
    /// Signed surge delta for the caller to apply: +2 on an unqualified
    /// answer, -1 on any qualified one.
    pub surge_delta: i32,
    /// The twist roll, present exactly when the qualifier is
    /// `unexpectedly`.
    pub twist: Option<TwistRoll>,
}

/// Adjust a raw d100 roll by the surge counter and clamp to `1..=100`.
///
/// Raw rolls above 50 move up (toward more dramatic yes), the rest move
/// down (toward more dramatic no).
pub fn adjust_roll(raw: u32, surge: u32) -> u32 {
    debug_assert!((1..=100).contains(&raw), "raw roll out of range: {raw}");
    let adjusted = if raw > 50 {
        i64::from(raw) + i64::from(surge)
    } else {
        i64::from(raw) - i64::from(surge)
    };
    adjusted.clamp(1, 100) as u32
}

/// Map an adjusted roll to its answer band.
///
/// The thresholds are exact game-balance constants:
/// 96-100 Yes/unexpectedly, 86-95 Yes/but, 81-85 Yes/and, 51-80 Yes,
/// 21-50 No, 16-20 No/and, 6-15 No/but, 1-5 No/unexpectedly.
pub fn answer_band(adjusted: u32) -> (OracleAnswer, Option<Qualifier>) {
    match adjusted {
        96..=100 => (OracleAnswer::Yes, Some(Qualifier::Unexpectedly)),
        86..=95 => (OracleAnswer::Yes, Some(Qualifier::But)),
        81..=85 => (OracleAnswer::Yes, Some(Qualifier::And)),
        51..=80 => (OracleAnswer::Yes, None),
        21..=50 => (OracleAnswer::No, None),
        16..=20 => (OracleAnswer::No, Some(Qualifier::And)),
        6..=15 => (OracleAnswer::No, Some(Qualifier::But)),
        1..=5 => (OracleAnswer::No, Some(Qualifier::Unexpectedly)),
        _ => unreachable!("adjusted roll out of range: {adjusted}"),
    }
}

/// Consult the oracle with a yes/no question at the given surge level.
pub fn resolve(question: &str, surge: u32, rng: &mut StdRng) -> OracleResult {
    let raw = Die::D100.roll(rng);
    resolve_raw(question, surge, raw, rng)
}

/// Resolve a consultation from a known raw d100 roll.
///
/// Split out from [`resolve`] so tests can pin the raw roll; the RNG is
/// still needed for the twist d20.
pub fn resolve_raw(question: &str, surge: u32, raw: u32, rng: &mut StdRng) -> OracleResult {
    let roll = adjust_roll(raw, surge);
    let (answer, qualifier) = answer_band(roll);

    let surge_delta = if qualifier.is_none() { 2 } else { -1 };

    let twist = if qualifier == Some(Qualifier::Unexpectedly) {
        let d20 = Die::D20.roll(rng);
        Some(TwistRoll {
            roll: d20,
            outcome: twist_outcome(d20),
        })
    } else {
        None
    };

    let narrative = narrative_line(question, answer, qualifier, twist.as_ref());

    OracleResult {
        answer,
        qualifier,
        narrative,
        roll,
        surge_delta,
        twist,
    }
}

/// Compose the narrative line for an answer.
fn narrative_line(
    question: &str,
    answer: OracleAnswer,
    qualifier: Option<Qualifier>,
    twist: Option<&TwistRoll>,
) -> String {
    let q = question.trim().trim_end_matches('?');
    let base = match (answer, qualifier) {
        (OracleAnswer::Yes, None) => "Yes.".to_string(),
        (OracleAnswer::Yes, Some(Qualifier::And)) => "Yes, and more besides.".to_string(),
        (OracleAnswer::Yes, Some(Qualifier::But)) => "Yes, but at a cost.".to_string(),
        (OracleAnswer::No, None) => "No.".to_string(),
        (OracleAnswer::No, Some(Qualifier::And)) => "No, and it gets worse.".to_string(),
        (OracleAnswer::No, Some(Qualifier::But)) => "No, but there is an opening.".to_string(),
        (_, Some(Qualifier::Unexpectedly)) => match twist {
            Some(t) => format!("{answer}, and something unexpected: {}.", t.outcome),
            None => format!("{answer}, unexpectedly."),
        },
    };
    if q.is_empty() {
        base
    } else {
        format!("\"{q}?\" {base}")
    }
}
