//! Easing curves and exponential smoothing.

use std::f64::consts::TAU;

/// Move `current` toward `target` by `factor` of the remaining distance.
///
/// With `factor` in (0, 1) the distance to a stationary target shrinks every
/// step and the result never passes the target.
#[inline]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Named easing curves mapping normalized time `t` in \[0, 1\] to progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    /// Cubic ease-in.
    Power2In,
    /// Cubic ease-out.
    Power2Out,
    /// Quartic ease-out.
    Power3Out,
    /// Damped sine settling on 1; overshoots while settling.
    ElasticOut { amplitude: f64, period: f64 },
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    let amp = amplitude.max(1.0);
    let period = period / amplitude.min(1.0).max(f64::EPSILON);
    let phase = period / TAU * (1.0 / amp).asin();
    let omega = TAU / period;
    amp * 2f64.powf(-10.0 * t) * ((t - phase) * omega).sin() + 1.0
}
