//! Configuration for a play session.

use std::path::PathBuf;

/// Default file the CLI saves to.
pub const DEFAULT_SAVE_PATH: &str = "sparta_save.json";

/// Configuration for a town session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible dungeon runs. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Gold charged for a night at the inn.
    pub rest_cost: f64,
    /// Fraction of the price refunded when selling.
    pub sell_rate: f64,
    /// Where the session is saved.
    pub save_path: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rest_cost: 500.0,
            sell_rate: 0.85,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the rest cost (negative values become 0).
    pub fn with_rest_cost(mut self, cost: f64) -> Self {
        self.rest_cost = cost.max(0.0);
        self
    }

    /// Set the sell rate (clamped to 0-1).
    pub fn with_sell_rate(mut self, rate: f64) -> Self {
        self.sell_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.rest_cost, 500.0);
        assert_eq!(cfg.sell_rate, 0.85);
        assert_eq!(cfg.save_path, PathBuf::from("sparta_save.json"));
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_rest_cost(250.0)
            .with_save_path("/tmp/hero.json");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.rest_cost, 250.0);
        assert_eq!(cfg.save_path, PathBuf::from("/tmp/hero.json"));
    }

    #[test]
    fn values_clamped() {
        assert_eq!(SessionConfig::default().with_sell_rate(1.5).sell_rate, 1.0);
        assert_eq!(SessionConfig::default().with_sell_rate(-1.0).sell_rate, 0.0);
        assert_eq!(SessionConfig::default().with_rest_cost(-5.0).rest_cost, 0.0);
    }
}
