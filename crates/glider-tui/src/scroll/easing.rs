//! Pure easing curves for slide transitions
//!
//! Monotonic mappings from progress [0, 1] to eased progress [0, 1].

// Re-export EasingType from core
pub use glider_core::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value in [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::CubicInOut => cubic_ease_in_out(t),
        }
    }
}

/// Cubic ease-in-out: f(t) = 4t³ below the midpoint, 1 - (-2t+2)³/2 above
///
/// Accelerates through the first half, decelerates through the second;
/// f(0.5) = 0.5 exactly, so the in and out halves meet at the midpoint.
#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_boundaries() {
        for easing in [EasingType::None, EasingType::Linear, EasingType::CubicInOut] {
            // t=0 should give 0 (except None which holds until completion)
            if easing != EasingType::None {
                assert!((easing.apply(0.0)).abs() < 1e-9, "{:?} at t=0", easing);
            }
            // t=1 should give 1
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-9, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_cubic_in_out_midpoint() {
        assert!((EasingType::CubicInOut.apply(0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_in_out_known_values() {
        // f(0.25) = 4 * 0.25³ = 0.0625
        assert!((EasingType::CubicInOut.apply(0.25) - 0.0625).abs() < 1e-9);
        // f(0.75) = 1 - (0.5³)/2 = 0.9375
        assert!((EasingType::CubicInOut.apply(0.75) - 0.9375).abs() < 1e-9);
    }

    #[test]
    fn test_cubic_in_out_symmetry() {
        // The in and out halves mirror each other: f(t) + f(1-t) = 1
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let sum = EasingType::CubicInOut.apply(t) + EasingType::CubicInOut.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-9, "asymmetric at t={}", t);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in [EasingType::None, EasingType::Linear, EasingType::CubicInOut] {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let t = i as f64 / 100.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_out_of_range_input_clamped() {
        assert!((EasingType::CubicInOut.apply(-0.5)).abs() < 1e-9);
        assert!((EasingType::CubicInOut.apply(1.5) - 1.0).abs() < 1e-9);
    }
}
