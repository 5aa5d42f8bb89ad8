// SPDX-License-Identifier: MPL-2.0
//! Time-based opacity animation for the product image.

use crate::ui::design_tokens::opacity;
use std::time::{Duration, Instant};

/// Linear opacity ramp from `from` to `to` starting at `started`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl Fade {
    /// A fade resting at `value`.
    #[must_use]
    pub fn settled(value: f32, now: Instant) -> Self {
        Self {
            from: value,
            to: value,
            started: now,
            duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn visible(now: Instant) -> Self {
        Self::settled(opacity::OPAQUE, now)
    }

    /// Restarts the ramp toward `target` from wherever it is at `now`.
    pub fn retarget(&mut self, target: f32, duration: Duration, now: Instant) {
        *self = Self {
            from: self.value_at(now),
            to: target,
            started: now,
            duration,
        };
    }

    #[must_use]
    pub fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        let progress = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * progress
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) < self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn settled_fade_is_constant() {
        let now = Instant::now();
        let fade = Fade::visible(now);
        assert!((fade.value_at(now + Duration::from_secs(1)) - 1.0).abs() < EPSILON);
        assert!(!fade.is_animating(now));
    }

    #[test]
    fn ramp_interpolates_linearly() {
        let now = Instant::now();
        let mut fade = Fade::visible(now);
        fade.retarget(0.0, Duration::from_millis(500), now);

        assert!(fade.is_animating(now));
        assert!((fade.value_at(now + Duration::from_millis(250)) - 0.5).abs() < EPSILON);
        assert!(fade.value_at(now + Duration::from_secs(2)).abs() < EPSILON);
        assert!(!fade.is_animating(now + Duration::from_millis(500)));
    }

    #[test]
    fn retarget_mid_ramp_starts_from_current_value() {
        let now = Instant::now();
        let mut fade = Fade::visible(now);
        fade.retarget(0.0, Duration::from_millis(400), now);

        let midway = now + Duration::from_millis(100);
        fade.retarget(1.0, Duration::from_millis(400), midway);
        assert!((fade.value_at(midway) - 0.75).abs() < EPSILON);
        assert!((fade.target() - 1.0).abs() < EPSILON);
    }
}
