//! Smooth horizontal scrolling for the carousel
//!
//! A single eased, interruptible animation drives the strip's scroll
//! position. The pieces:
//!
//! - `easing` - pure easing curves
//! - `timing` - elapsed-fraction and interpolation helpers
//! - `config` - duration/tick utilities over [`glider_core::AnimationConfig`]
//! - `animation` - the [`ScrollAnimator`] combining the above
//!
//! # Usage
//!
//! ```ignore
//! use glider_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::with_defaults();
//!
//! // Kick off a transition to column 120
//! animator.animate_to(120);
//!
//! // In the main loop, advance once per tick
//! let scroll = animator.update();
//! ```

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::ScrollAnimator;
pub use config::{AnimationConfig, AnimationConfigExt};
pub use easing::{EasingType, EasingTypeExt};
