//! Configuration for a game session.

use std::time::Duration;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible narration.
    pub seed: u64,
    /// Artificial latency before each narration, standing in for a network
    /// round trip. Tests set this to zero.
    pub narration_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            narration_delay: Duration::from_millis(1500),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the artificial narration delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.narration_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.narration_delay, Duration::from_millis(1500));
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(123)
            .with_delay(Duration::ZERO);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.narration_delay, Duration::ZERO);
    }
}
