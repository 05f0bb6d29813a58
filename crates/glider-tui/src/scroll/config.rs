//! Duration and tick utilities over the core animation configuration

use std::time::Duration;

// Re-export config types from core
pub use glider_core::{AnimationConfig, EasingType};

/// Extension trait for AnimationConfig with utility methods
pub trait AnimationConfigExt {
    /// Transition duration as a Duration
    fn duration(&self) -> Duration;

    /// Poll interval while a transition is in flight
    fn tick_interval(&self) -> Duration;

    /// Whether transitions are effectively animated
    fn is_animated(&self) -> bool;
}

impl AnimationConfigExt for AnimationConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn tick_interval(&self) -> Duration {
        if self.fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.fps as u64)
        }
    }

    #[inline]
    fn is_animated(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let config = AnimationConfig {
            duration_ms: 1000,
            ..Default::default()
        };
        assert_eq!(config.duration(), Duration::from_millis(1000));
    }

    #[test]
    fn test_tick_interval() {
        let config = AnimationConfig {
            fps: 50,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(20));

        let config = AnimationConfig {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_is_animated() {
        let mut config = AnimationConfig::default();
        assert!(config.is_animated());

        config.enabled = false;
        assert!(!config.is_animated());

        config.enabled = true;
        config.duration_ms = 0;
        assert!(!config.is_animated());
    }
}
