//! Easing functions for animation interpolation.
//!
//! Provides the curves used by timeline segments: fades, camera pans and
//! the overshooting scale-in of a newly revealed molecule.

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic ease-in-out (slow at both ends).
    CubicInOut,
    /// Sinusoidal ease-in-out, gentler than cubic.
    SineInOut,
    /// Ease-out that overshoots past 1.0 before settling.
    /// `overshoot` of 1.70158 gives the classic ~10% overshoot.
    BackOut {
        /// Overshoot strength.
        overshoot: f32,
    },
}

impl EasingFunction {
    /// Standard back-out overshoot.
    pub const BACK_OUT: EasingFunction =
        EasingFunction::BackOut { overshoot: 1.701_58 };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. The result starts at 0.0 and ends
    /// at 1.0; only `BackOut` leaves that range in between.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match *self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            EasingFunction::SineInOut => {
                -((std::f32::consts::PI * t).cos() - 1.0) / 2.0
            }
            EasingFunction::BackOut { overshoot } => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + overshoot * u * u
            }
        }
    }
}
