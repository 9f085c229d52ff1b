//! Easing functions for camera transitions.
//!
//! All curves map progress `t` in `[0, 1]` to eased progress in `[0, 1]`
//! with `f(0) = 0` and `f(1) = 1`.

use serde::{Deserialize, Serialize};

/// Easing function variants for transition curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-out. Same curve as GSAP's `power2.out`.
    CubicOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing for camera fly-to transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::CubicOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 6] = [
        EasingFunction::Linear,
        EasingFunction::QuadraticIn,
        EasingFunction::QuadraticOut,
        EasingFunction::CubicOut,
        EasingFunction::SqrtOut,
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 },
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.evaluate(0.0), 0.0, "{easing:?} at 0");
            assert!(
                (easing.evaluate(1.0) - 1.0).abs() < 1e-6,
                "{easing:?} at 1"
            );
        }
    }

    #[test]
    fn input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.evaluate(-0.5), easing.evaluate(0.0));
            assert_eq!(easing.evaluate(1.5), easing.evaluate(1.0));
        }
    }

    #[test]
    fn cubic_out_matches_power2_out() {
        let easing = EasingFunction::CubicOut;
        // 1 - 0.5³
        assert!((easing.evaluate(0.5) - 0.875).abs() < 1e-6);
        assert!(easing.evaluate(0.25) > 0.25);
    }

    #[test]
    fn quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for step in 1..=100 {
                let value = easing.evaluate(step as f32 / 100.0);
                assert!(value >= prev - 1e-6, "{easing:?} dipped at {step}");
                prev = value;
            }
        }
    }

    #[test]
    fn default_is_cubic_out() {
        assert_eq!(EasingFunction::default(), EasingFunction::CubicOut);
    }

    #[test]
    fn deserializes_from_snake_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            easing: EasingFunction,
        }
        let parsed: Wrapper =
            toml::from_str(r#"easing = "cubic_out""#).unwrap();
        assert_eq!(parsed.easing, EasingFunction::CubicOut);
    }
}
