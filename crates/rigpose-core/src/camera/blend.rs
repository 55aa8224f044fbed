//! Timed, eased transition between two orbit states.

use super::preset::OrbitParams;
use crate::angle::smoothstep;

/// Shortest allowed blend duration in seconds.
pub const MIN_BLEND_TIME: f64 = 1e-4;

/// Slack on the completion test so that frame times summing to the duration
/// finish the blend despite rounding.
const COMPLETION_EPSILON: f64 = 1e-9;

/// An in-flight preset transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendState {
    /// Seconds since the blend started.
    pub elapsed: f64,
    /// Total blend time in seconds.
    pub duration: f64,
    pub from: OrbitParams,
    pub to: OrbitParams,
}

impl BlendState {
    /// Starts a blend; `duration` is raised to [`MIN_BLEND_TIME`].
    pub fn new(from: OrbitParams, to: OrbitParams, duration: f64) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(MIN_BLEND_TIME),
            from,
            to,
        }
    }

    /// Fraction of the duration elapsed, in [0, 1].
    pub fn progress(&self) -> f64 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// True once the elapsed time has reached the duration.
    pub fn is_finished(&self) -> bool {
        self.elapsed + COMPLETION_EPSILON >= self.duration
    }

    /// Advances by `dt` seconds and returns the interpolated parameters.
    ///
    /// Once finished this returns `to` exactly.
    pub fn advance(&mut self, dt: f64) -> OrbitParams {
        self.elapsed += dt;
        if self.is_finished() {
            self.to
        } else {
            self.from.lerp(&self.to, smoothstep(self.progress()))
        }
    }
}
