//! Focus and speed configuration for automated play.

use serde::{Deserialize, Serialize};

/// A restricted action menu that overrides the full decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    /// Engage hostiles and survey.
    Combat,
    /// Move between locations and survey.
    Explore,
    /// Sell and buy at vendors.
    Trade,
    /// Use healing supplies.
    Heal,
    /// Put questions to the oracle.
    Oracle,
    /// Loot remains and harvest nodes.
    Loot,
    /// Craft and gather at a base camp.
    BaseCamp,
    /// No override; the behavior tree decides everything.
    Full,
}

impl FocusMode {
    /// Parse a focus mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "combat" => Some(Self::Combat),
            "explore" => Some(Self::Explore),
            "trade" => Some(Self::Trade),
            "heal" => Some(Self::Heal),
            "oracle" => Some(Self::Oracle),
            "loot" => Some(Self::Loot),
            "base camp" | "basecamp" | "camp" => Some(Self::BaseCamp),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

impl std::fmt::Display for FocusMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Combat => write!(f, "combat"),
            Self::Explore => write!(f, "explore"),
            Self::Trade => write!(f, "trade"),
            Self::Heal => write!(f, "heal"),
            Self::Oracle => write!(f, "oracle"),
            Self::Loot => write!(f, "loot"),
            Self::BaseCamp => write!(f, "base-camp"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// How fast automated play runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedMode {
    /// 1000 ms base interval.
    Fast,
    /// 2600 ms base interval.
    Normal,
    /// 5000 ms base interval.
    Slow,
}

impl SpeedMode {
    /// Base tick interval in milliseconds.
    pub fn base_interval_ms(self) -> u64 {
        match self {
            Self::Fast => 1000,
            Self::Normal => 2600,
            Self::Slow => 5000,
        }
    }

    /// Per-tick delay decay factor for the avatar slot.
    pub fn decay(self) -> f64 {
        match self {
            Self::Fast => 0.90,
            Self::Normal => 0.95,
            Self::Slow => 0.98,
        }
    }

    /// Lower bound on the avatar delay in milliseconds.
    pub fn floor_ms(self) -> u64 {
        match self {
            Self::Fast | Self::Normal => 200,
            Self::Slow => 500,
        }
    }

    /// Parse a speed mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "fast" => Some(Self::Fast),
            "normal" => Some(Self::Normal),
            "slow" => Some(Self::Slow),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpeedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fast => write!(f, "fast"),
            Self::Normal => write!(f, "normal"),
            Self::Slow => write!(f, "slow"),
        }
    }
}

/// Configuration for automated play.
#[derive(Debug, Clone)]
pub struct AutoplayConfig {
    /// Active focus mode.
    pub focus: FocusMode,
    /// Active speed mode.
    pub speed: SpeedMode,
    /// Whether the avatar slot arms itself on the first pass.
    pub auto_start: bool,
    /// Lower bound of the registration jitter window, in milliseconds.
    pub jitter_min_ms: u64,
    /// Upper bound of the registration jitter window, in milliseconds.
    pub jitter_max_ms: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            focus: FocusMode::Full,
            speed: SpeedMode::Normal,
            auto_start: false,
            jitter_min_ms: 1000,
            jitter_max_ms: 4000,
        }
    }
}

impl AutoplayConfig {
    /// Set the focus mode.
    pub fn with_focus(mut self, focus: FocusMode) -> Self {
        self.focus = focus;
        self
    }

    /// Set the speed mode.
    pub fn with_speed(mut self, speed: SpeedMode) -> Self {
        self.speed = speed;
        self
    }

    /// Set the auto-start flag.
    pub fn with_auto_start(mut self, auto_start: bool) -> Self {
        self.auto_start = auto_start;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_parse_variants() {
        assert_eq!(FocusMode::parse("combat"), Some(FocusMode::Combat));
        assert_eq!(FocusMode::parse("BASE-CAMP"), Some(FocusMode::BaseCamp));
        assert_eq!(FocusMode::parse("base_camp"), Some(FocusMode::BaseCamp));
        assert_eq!(FocusMode::parse("full"), Some(FocusMode::Full));
        assert_eq!(FocusMode::parse("gibberish"), None);
    }

    #[test]
    fn focus_display_round_trip() {
        for mode in [
            FocusMode::Combat,
            FocusMode::Explore,
            FocusMode::Trade,
            FocusMode::Heal,
            FocusMode::Oracle,
            FocusMode::Loot,
            FocusMode::BaseCamp,
            FocusMode::Full,
        ] {
            assert_eq!(FocusMode::parse(&mode.to_string()), Some(mode));
        }
    }

    #[test]
    fn speed_constants() {
        assert_eq!(SpeedMode::Fast.base_interval_ms(), 1000);
        assert_eq!(SpeedMode::Normal.base_interval_ms(), 2600);
        assert_eq!(SpeedMode::Slow.base_interval_ms(), 5000);
        assert!((SpeedMode::Fast.decay() - 0.90).abs() < f64::EPSILON);
        assert!((SpeedMode::Normal.decay() - 0.95).abs() < f64::EPSILON);
        assert!((SpeedMode::Slow.decay() - 0.98).abs() < f64::EPSILON);
        assert_eq!(SpeedMode::Fast.floor_ms(), 200);
        assert_eq!(SpeedMode::Normal.floor_ms(), 200);
        assert_eq!(SpeedMode::Slow.floor_ms(), 500);
    }

    #[test]
    fn default_config() {
        let cfg = AutoplayConfig::default();
        assert_eq!(cfg.focus, FocusMode::Full);
        assert_eq!(cfg.speed, SpeedMode::Normal);
        assert!(!cfg.auto_start);
        assert_eq!(cfg.jitter_min_ms, 1000);
        assert_eq!(cfg.jitter_max_ms, 4000);
    }

    #[test]
    fn builder_methods() {
        let cfg = AutoplayConfig::default()
            .with_focus(FocusMode::Loot)
            .with_speed(SpeedMode::Fast)
            .with_auto_start(true);
        assert_eq!(cfg.focus, FocusMode::Loot);
        assert_eq!(cfg.speed, SpeedMode::Fast);
        assert!(cfg.auto_start);
    }
}
