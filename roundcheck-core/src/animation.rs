//! Retargetable value animation sampled against a monotonic clock.
//!
//! A [Tween] is a pure function of elapsed time plus its last retarget
//! event: widgets sample it once per frame with the frame timestamp from
//! [AppInfo](crate::app::info::AppInfo) instead of blocking or scheduling
//! anything themselves.

use std::time::{Duration, Instant};
use vello::peniko::Color;

/// Types which can be linearly interpolated for animation.
pub trait Interpolate: Copy {
    /// Interpolate between `self` and `other` at `t` in `[0, 1]`.
    fn interpolate(self, other: Self, t: f32) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t as f64
    }
}

impl Interpolate for f32 {
    fn interpolate(self, other: Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for Color {
    fn interpolate(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let a = self.components;
        let b = other.components;
        Color::new([
            a[0].interpolate(b[0], t),
            a[1].interpolate(b[1], t),
            a[2].interpolate(b[2], t),
            a[3].interpolate(b[3], t),
        ])
    }
}

/// Easing applied to the normalized progress of a [Tween].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant-rate interpolation.
    #[default]
    Linear,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
        }
    }
}

/// A single retargetable interpolation toward a target value.
///
/// At most one interpolation is active per tween. Retargeting mid-flight
/// restarts from the value currently in flight, so the sampled value never
/// jumps; requests are never queued.
#[derive(Debug, Clone)]
pub struct Tween<T: Interpolate> {
    start_value: T,
    target: T,
    started: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    /// Creates a tween resting at `value` with the given duration for
    /// subsequent retargets.
    pub fn new(value: T, duration: Duration) -> Self {
        Self {
            start_value: value,
            target: value,
            started: None,
            duration,
            easing: Easing::default(),
        }
    }

    /// Sets the easing function and returns the tween.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// The value the tween is heading toward.
    pub fn target(&self) -> T {
        self.target
    }

    /// Retarget toward `target`, continuing from the value in flight at
    /// `now`.
    pub fn retarget(&mut self, target: T, now: Instant) {
        self.start_value = self.sample(now);
        self.target = target;
        self.started = Some(now);
    }

    /// Snap to `value` immediately, cancelling any active interpolation.
    pub fn snap(&mut self, value: T) {
        self.start_value = value;
        self.target = value;
        self.started = None;
    }

    /// Sample the tween at the given timestamp.
    pub fn sample(&self, now: Instant) -> T {
        match self.started {
            None => self.target,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                if elapsed >= self.duration {
                    self.target
                } else {
                    let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
                    self.start_value.interpolate(self.target, self.easing.apply(t))
                }
            }
        }
    }

    /// Whether an interpolation is still in flight at the given timestamp.
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started {
            None => false,
            Some(started) => now.saturating_duration_since(started) < self.duration,
        }
    }
}
