//! Carousel driver
//!
//! Pairs the deck's strip geometry with the scroll animator and implements
//! slide navigation on top of them: the current slide is resolved from
//! geometry alone, and next/previous animate the scroll position to the
//! adjacent slide's offset.

use glider_core::{AppConfig, Deck, Result, StripLayout};
use tracing::debug;

use crate::scroll::ScrollAnimator;

/// Slide navigation state for one deck
///
/// Owns the strip layout (fixed at construction, like the deck it came
/// from) and the animator driving the strip's scroll position.
pub struct Slider {
    layout: StripLayout,
    animator: ScrollAnimator,
}

impl Slider {
    pub fn new(deck: &Deck, config: &AppConfig) -> Self {
        let widths = deck.slide_widths(config.ui.slide_width);
        let layout = StripLayout::from_widths(widths, config.ui.slide_gap);
        let animator = ScrollAnimator::new(config.animation.clone());
        Self { layout, animator }
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    /// Current interpolated scroll position of the strip
    pub fn scroll(&self) -> u16 {
        self.animator.position()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Resolve the current slide
    ///
    /// The first slide whose left offset is at or beyond the effective
    /// scroll position - the in-flight target while a transition runs, so
    /// rapid navigation chains from where the strip is headed, not where it
    /// happens to be mid-transition. Fails with
    /// [`glider_core::Error::NoCurrentSlide`] when the geometry invariant is
    /// broken; callers let that propagate.
    pub fn current_slide(&self) -> Result<usize> {
        self.layout.slide_at(self.animator.target())
    }

    /// Advance one slide; a no-op at the last slide
    pub fn next(&mut self) -> Result<()> {
        let current = self.current_slide()?;
        if let Some(index) = self.layout.next_index(current) {
            self.scroll_to_slide(index);
        }
        Ok(())
    }

    /// Go back one slide; a no-op at the first slide
    pub fn previous(&mut self) -> Result<()> {
        let current = self.current_slide()?;
        if let Some(index) = self.layout.prev_index(current) {
            self.scroll_to_slide(index);
        }
        Ok(())
    }

    /// Animate to an arbitrary slide (used for first/last jumps)
    pub fn jump_to(&mut self, index: usize) {
        let index = match self.layout.last_index() {
            Some(last) => index.min(last),
            None => return,
        };
        self.scroll_to_slide(index);
    }

    /// Advance the animator; call once per tick
    pub fn tick(&mut self) -> u16 {
        self.animator.update()
    }

    fn scroll_to_slide(&mut self, index: usize) {
        if let Some(extent) = self.layout.extent(index) {
            debug!(index, offset = extent.offset, "slide transition");
            self.animator.animate_to(extent.offset);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glider_core::config::EasingType;
    use glider_core::{AnimationConfig, Error};

    fn test_config(animated: bool) -> AppConfig {
        let mut config = AppConfig::default();
        config.ui.slide_width = 10;
        config.ui.slide_gap = 2;
        config.animation = AnimationConfig {
            enabled: animated,
            // Long enough that nothing completes during a test
            duration_ms: 60_000,
            easing: EasingType::CubicInOut,
            fps: 60,
        };
        config
    }

    fn three_slide_deck() -> Deck {
        Deck::from_toml_str(
            r#"
            [[slides]]
            title = "a"
            [[slides]]
            title = "b"
            [[slides]]
            title = "c"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_starts_on_first_slide() {
        let slider = Slider::new(&three_slide_deck(), &test_config(false));
        assert_eq!(slider.current_slide().unwrap(), 0);
        assert_eq!(slider.scroll(), 0);
    }

    #[test]
    fn test_next_advances_to_adjacent_offset() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(false));
        slider.next().unwrap();
        // Instant mode: scroll lands on slide 1's offset (width 10 + gap 2)
        assert_eq!(slider.scroll(), 12);
        assert_eq!(slider.current_slide().unwrap(), 1);
    }

    #[test]
    fn test_next_at_last_slide_is_noop() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(false));
        slider.jump_to(2);
        slider.next().unwrap();
        assert_eq!(slider.current_slide().unwrap(), 2);
        assert_eq!(slider.scroll(), 24);
        assert!(!slider.is_animating());
    }

    #[test]
    fn test_previous_at_first_slide_is_noop() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(false));
        slider.previous().unwrap();
        assert_eq!(slider.current_slide().unwrap(), 0);
        assert_eq!(slider.scroll(), 0);
        assert!(!slider.is_animating());
    }

    #[test]
    fn test_next_starts_animation() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(true));
        slider.next().unwrap();
        assert!(slider.is_animating());
        // Mid-transition the current slide is already the destination
        assert_eq!(slider.current_slide().unwrap(), 1);
    }

    #[test]
    fn test_rapid_next_chains_from_target() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(true));
        // Two clicks in quick succession: the second resolves the current
        // slide from the first transition's target
        slider.next().unwrap();
        slider.next().unwrap();
        assert_eq!(slider.current_slide().unwrap(), 2);
    }

    #[test]
    fn test_rapid_next_stops_at_last() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(true));
        for _ in 0..5 {
            slider.next().unwrap();
        }
        assert_eq!(slider.current_slide().unwrap(), 2);
    }

    #[test]
    fn test_jump_to_clamps_to_last() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(false));
        slider.jump_to(99);
        assert_eq!(slider.current_slide().unwrap(), 2);
    }

    #[test]
    fn test_no_current_slide_propagates() {
        let mut slider = Slider::new(&three_slide_deck(), &test_config(false));
        // Force the scroll past every slide offset
        slider.animator.set_position(1000);
        let err = slider.current_slide().unwrap_err();
        assert!(matches!(err, Error::NoCurrentSlide(1000)));
        assert!(slider.next().is_err());
    }
}
