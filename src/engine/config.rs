//! Engine configuration.

use super::clock::LagPolicy;
use std::time::Duration;

/// Tunables for an engine session.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Grid width in columns.
    pub width: u16,
    /// Grid height in rows.
    pub height: u16,
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Maximum rendered frames per second.
    pub max_fps: u32,
    /// What to do with leftover lag after a capped tick drain.
    pub lag_policy: LagPolicy,
    /// Input poll timeout; bounds how long shutdown takes to observe.
    pub input_poll_timeout: Duration,
    /// Run on the alternate screen buffer instead of clearing the
    /// primary screen in place.
    pub alternate_screen: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            tick_rate: 60,
            max_fps: 60,
            lag_policy: LagPolicy::default(),
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 24);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.max_fps, 60);
        assert_eq!(config.lag_policy, LagPolicy::Retain);
        assert_eq!(config.input_poll_timeout, Duration::from_millis(10));
        assert!(!config.alternate_screen);
    }
}
