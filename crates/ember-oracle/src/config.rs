//! Configuration for an oracle session.

/// Configuration for an [`crate::session::OracleSession`].
#[derive(Debug, Clone)]
pub struct OracleConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Initial surge counter value.
    pub initial_surge: u32,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            initial_surge: 0,
        }
    }
}

impl OracleConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the initial surge value.
    pub fn with_surge(mut self, surge: u32) -> Self {
        self.initial_surge = surge;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = OracleConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.initial_surge, 0);
    }

    #[test]
    fn builder_methods() {
        let cfg = OracleConfig::default().with_seed(123).with_surge(8);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.initial_surge, 8);
    }
}
