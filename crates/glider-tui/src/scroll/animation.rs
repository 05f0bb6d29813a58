//! Scroll animation controller
//!
//! Combines easing and timing into the single animate/cancel slot that
//! drives the strip's horizontal scroll position.

use std::time::{Duration, Instant};

use super::config::{AnimationConfig, AnimationConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp_cols, progress};

/// In-flight transition state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    /// Transition start time
    start: Instant,
    /// Starting scroll position
    from: u16,
    /// Target scroll position
    to: u16,
    /// Transition duration
    duration: Duration,
    /// Easing function
    easing: EasingType,
}

/// Eased scroll animator
///
/// At most one transition is in flight at a time. Starting a new one while
/// another runs settles the old one at its own target before the new one
/// begins; there is no queue. Call [`ScrollAnimator::animate_to`] to start a
/// transition and [`ScrollAnimator::update`] once per tick to advance it.
///
/// Completion is exact: the first `update` at or past the deadline reports
/// the target value itself, never an interpolation of it, so a stalled tick
/// stream still lands precisely on target.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    /// Current transition (if any)
    animation: Option<ActiveAnimation>,
    /// Configuration
    config: AnimationConfig,
    /// Current scroll position
    position: u16,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self {
            animation: None,
            config: AnimationConfig::default(),
            position: 0,
        }
    }
}

impl ScrollAnimator {
    /// Create a new animator with configuration
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            animation: None,
            config,
            position: 0,
        }
    }

    /// Create with default configuration
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Check if a transition is currently in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Current interpolated scroll position
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Effective scroll position: the in-flight target while animating,
    /// else the actual position
    pub fn target(&self) -> u16 {
        self.animation
            .as_ref()
            .map(|anim| anim.to)
            .unwrap_or(self.position)
    }

    /// Set the scroll position immediately, dropping any transition
    pub fn set_position(&mut self, position: u16) {
        self.animation = None;
        self.position = position;
    }

    /// Start a transition from the current position to `to`
    ///
    /// A transition already in flight is cancelled and settled at its own
    /// target first; the new transition then starts from that settled value.
    /// With animation disabled (or a zero duration) the position jumps
    /// straight to `to`.
    pub fn animate_to(&mut self, to: u16) {
        if let Some(prev) = self.animation.take() {
            self.position = prev.to;
        }

        if !self.config.is_animated() || self.position == to {
            self.position = to;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: Instant::now(),
            from: self.position,
            to,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    /// Advance the transition and return the current scroll position
    ///
    /// Call once per tick. The deadline check runs before interpolation, so
    /// the first call at or past the deadline settles exactly on the target.
    pub fn update(&mut self) -> u16 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration) {
                self.position = anim.to;
                self.animation = None;
            } else {
                let t = anim.easing.apply(progress(anim.start, anim.duration));
                self.position = lerp_cols(anim.from, anim.to, t);
            }
        }
        self.position
    }

    /// Cancel the transition, settling at its target
    ///
    /// Returns the settled position. No-op when idle.
    pub fn finish(&mut self) -> u16 {
        if let Some(anim) = self.animation.take() {
            self.position = anim.to;
        }
        self.position
    }
}
