//! Surge counter tracking for the oracle.
//!
//! Surge is an accumulating risk gauge. Unqualified answers push it up;
//! qualified answers bleed it off. Higher surge biases later rolls
//! toward the dramatic ends of the chart, and past a threshold it gates
//! a separate surge-event table owned by the control layer.

use serde::{Deserialize, Serialize};

/// Surge value at or above which the surge-event table is armed.
pub const SURGE_EVENT_THRESHOLD: u32 = 10;

/// The surge counter. Non-negative; starts at 0 by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurgeCounter {
    value: u32,
}

impl SurgeCounter {
    /// Create a counter at the given value.
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    /// Get the current surge value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Apply a signed delta, flooring at 0.
    pub fn apply(&mut self, delta: i32) {
        let next = i64::from(self.value) + i64::from(delta);
        self.value = next.max(0) as u32;
    }

    /// Whether surge has reached the surge-event threshold.
    pub fn at_event_threshold(&self) -> bool {
        self.value >= SURGE_EVENT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        assert_eq!(SurgeCounter::default().value(), 0);
    }

    #[test]
    fn apply_accumulates() {
        let mut s = SurgeCounter::default();
        s.apply(2);
        s.apply(2);
        assert_eq!(s.value(), 4);
        s.apply(-1);
        assert_eq!(s.value(), 3);
    }

    #[test]
    fn apply_floors_at_zero() {
        let mut s = SurgeCounter::new(1);
        s.apply(-1);
        assert_eq!(s.value(), 0);
        s.apply(-5);
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn threshold_gate() {
        let mut s = SurgeCounter::new(9);
        assert!(!s.at_event_threshold());
        s.apply(2);
        assert!(s.at_event_threshold());
    }

    #[test]
    fn round_trip_serde() {
        let s = SurgeCounter::new(7);
        let json = serde_json::to_string(&s).unwrap();
        let s2: SurgeCounter = serde_json::from_str(&json).unwrap();
        assert_eq!(s2.value(), 7);
    }
}
