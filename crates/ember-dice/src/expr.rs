//! Composite dice expressions.
//!
//! Grammar: `[N]dM[+k|-k|+STAT]`: an optional die count, a die size,
//! and an optional flat or stat-substituted modifier. Stat names are
//! resolved through a [`StatBlock`] at evaluation time, so the same
//! expression can be reused across actors with different stats.

use std::collections::HashMap;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};

/// The modifier part of a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// No modifier.
    None,
    /// A flat signed modifier.
    Flat(i32),
    /// A named stat to substitute at evaluation time. Sign applies to
    /// the looked-up value.
    Stat {
        /// Stat name, stored uppercase.
        name: String,
        /// Whether the stat is subtracted rather than added.
        negative: bool,
    },
}

/// A named collection of actor stats used for substitution.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatBlock {
    stats: HashMap<String, i32>,
}

impl StatBlock {
    /// Create an empty stat block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a stat value. Names are case-insensitive.
    pub fn set(&mut self, name: impl Into<String>, value: i32) {
        self.stats.insert(name.into().to_uppercase(), value);
    }

    /// Look up a stat value. Names are case-insensitive.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.stats.get(&name.to_uppercase()).copied()
    }
}

/// A parsed dice expression: `NdM` plus an optional modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// Number of dice to roll (at least 1).
    pub count: u32,
    /// The die to roll.
    pub die: Die,
    /// The modifier applied to the summed roll.
    pub modifier: Modifier,
}

/// The result of evaluating a dice expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExprRoll {
    /// Individual die values, in roll order.
    pub values: Vec<u32>,
    /// The resolved modifier that was applied.
    pub modifier: i32,
    /// Sum of all dice plus the modifier.
    pub total: i32,
}

impl DiceExpr {
    /// Construct an expression directly.
    pub fn new(count: u32, die: Die, modifier: Modifier) -> Self {
        Self {
            count: count.max(1),
            die,
            modifier,
        }
    }

    /// Parse an expression like `2d6+3`, `d20`, `1d8+MIGHT`, `3d4-1`.
    pub fn parse(input: &str) -> DiceResult<Self> {
        let s: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        let lower = s.to_lowercase();

        let d_pos = lower
            .find('d')
            .ok_or_else(|| DiceError::InvalidExpression(input.to_string()))?;

        let count = if d_pos == 0 {
            1
        } else {
            lower[..d_pos]
                .parse::<u32>()
                .ok()
                .filter(|&n| n >= 1)
                .ok_or_else(|| DiceError::InvalidExpression(input.to_string()))?
        };

        let rest = &lower[d_pos + 1..];
        let modifier_pos = rest.find(['+', '-']);

        let (sides_str, modifier) = match modifier_pos {
            None => (rest, Modifier::None),
            Some(pos) => {
                let negative = rest.as_bytes()[pos] == b'-';
                let tail = &rest[pos + 1..];
                if tail.is_empty() {
                    return Err(DiceError::InvalidExpression(input.to_string()));
                }
                let modifier = match tail.parse::<i32>() {
                    Ok(k) => Modifier::Flat(if negative { -k } else { k }),
                    Err(_) => {
                        if !tail.chars().all(|c| c.is_ascii_alphabetic() || c == '_') {
                            return Err(DiceError::InvalidExpression(input.to_string()));
                        }
                        Modifier::Stat {
                            name: tail.to_uppercase(),
                            negative,
                        }
                    }
                };
                (&rest[..pos], modifier)
            }
        };

        let sides = sides_str
            .parse::<u32>()
            .map_err(|_| DiceError::InvalidExpression(input.to_string()))?;
        let die =
            Die::with_sides(sides).ok_or_else(|| DiceError::InvalidExpression(input.to_string()))?;

        Ok(Self {
            count,
            die,
            modifier,
        })
    }

    /// Roll the expression, resolving any stat modifier from `stats`.
    pub fn evaluate(&self, stats: &StatBlock, rng: &mut StdRng) -> DiceResult<ExprRoll> {
        let modifier = match &self.modifier {
            Modifier::None => 0,
            Modifier::Flat(k) => *k,
            Modifier::Stat { name, negative } => {
                let v = stats
                    .get(name)
                    .ok_or_else(|| DiceError::UnknownStat(name.clone()))?;
                if *negative { -v } else { v }
            }
        };

        let values: Vec<u32> = (0..self.count).map(|_| self.die.roll(rng)).collect();
        let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
        let total = sum + i64::from(modifier);

        Ok(ExprRoll {
            values,
            modifier,
            total: total as i32,
        })
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match &self.modifier {
            Modifier::None => Ok(()),
            Modifier::Flat(k) if *k >= 0 => write!(f, "+{k}"),
            Modifier::Flat(k) => write!(f, "{k}"),
            Modifier::Stat { name, negative } => {
                write!(f, "{}{name}", if *negative { '-' } else { '+' })
            }
        }
    }
}
