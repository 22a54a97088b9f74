//! Time-based progress interpolation.
//!
//! An animation is a start value, an end value, a duration and a pacing
//! curve. The widget samples it on every frame tick and feeds the result to
//! `set_progress`. Nothing here schedules anything; frames are driven by
//! `bubbletea_rs::tick` from the component.

use std::time::{Duration, Instant};

/// Frames per second used when scheduling animation ticks.
pub const FPS: u32 = 60;

/// Shortest animation, applied however small the distance.
pub const MIN_DURATION: Duration = Duration::from_millis(500);

/// Time taken to travel the full `0..=max` range.
pub const FULL_RANGE_DURATION: Duration = Duration::from_millis(2000);

/// Pacing curve mapping elapsed fraction to value fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolator {
    /// Constant speed.
    Linear,
    /// Starts slow and speeds up. A factor of `1.0` gives `t²`; larger
    /// factors exaggerate the effect.
    Accelerate(f32),
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator::Accelerate(1.0)
    }
}

impl Interpolator {
    /// Maps `t` in `[0, 1]` to a pacing fraction.
    pub fn interpolate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Interpolator::Linear => t,
            Interpolator::Accelerate(factor) if factor == 1.0 => t * t,
            Interpolator::Accelerate(factor) => t.powf(2.0 * factor),
        }
    }
}

/// How long an animation from `from` to `to` should take.
///
/// A full-range traversal takes [`FULL_RANGE_DURATION`], shorter ones scale
/// linearly down to [`MIN_DURATION`].
///
/// # Examples
///
/// ```rust
/// use bubble_progress::animation::animation_duration;
/// use std::time::Duration;
///
/// assert_eq!(animation_duration(0, 100, 100), Duration::from_millis(2000));
/// assert_eq!(animation_duration(0, 25, 100), Duration::from_millis(500));
/// assert_eq!(animation_duration(0, 10, 100), Duration::from_millis(500));
/// assert_eq!(animation_duration(0, 0, 0), Duration::from_millis(500));
/// ```
pub fn animation_duration(from: i32, to: i32, max: i32) -> Duration {
    if max <= 0 {
        return MIN_DURATION;
    }
    let distance = (i64::from(from) - i64::from(to)).unsigned_abs();
    let full = FULL_RANGE_DURATION.as_millis() as u64;
    let scaled = Duration::from_millis(full.saturating_mul(distance) / max as u64);
    scaled.max(MIN_DURATION)
}

/// A running progress animation.
#[derive(Debug, Clone)]
pub struct ProgressAnimation {
    from: i32,
    to: i32,
    duration: Duration,
    interpolator: Interpolator,
    started: Instant,
}

impl ProgressAnimation {
    /// Starts an animation at `started`.
    pub fn new(
        from: i32,
        to: i32,
        duration: Duration,
        interpolator: Interpolator,
        started: Instant,
    ) -> Self {
        Self {
            from,
            to,
            duration,
            interpolator,
            started,
        }
    }

    /// Value the animation started from.
    pub fn from(&self) -> i32 {
        self.from
    }

    /// Value the animation ends at.
    pub fn to(&self) -> i32 {
        self.to
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Instant the animation started.
    pub fn started(&self) -> Instant {
        self.started
    }

    /// Paced fraction after `elapsed`.
    pub fn fraction_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.interpolator.interpolate(t)
    }

    /// Integer value after `elapsed`, truncated toward zero.
    ///
    /// Once the duration has passed this is exactly the end value.
    pub fn value_at(&self, elapsed: Duration) -> i32 {
        if self.is_finished(elapsed) {
            return self.to;
        }
        let span = (self.to - self.from) as f32;
        self.from + (span * self.fraction_at(elapsed)) as i32
    }

    /// Whether the animation has run its full duration.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Frame tick for a running animation.
///
/// Carries the identity of the widget and the animation generation that
/// scheduled it. A frame whose tag no longer matches belongs to a superseded
/// animation and is dropped.
#[derive(Debug, Clone)]
pub struct FrameMsg {
    pub(crate) id: i64,
    pub(crate) tag: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anim(from: i32, to: i32, millis: u64) -> ProgressAnimation {
        ProgressAnimation::new(
            from,
            to,
            Duration::from_millis(millis),
            Interpolator::default(),
            Instant::now(),
        )
    }

    #[test]
    fn test_duration_scales_with_distance() {
        assert_eq!(animation_duration(0, 100, 100), Duration::from_millis(2000));
        assert_eq!(animation_duration(100, 0, 100), Duration::from_millis(2000));
        assert_eq!(animation_duration(0, 50, 100), Duration::from_millis(1000));
        assert_eq!(animation_duration(20, 95, 100), Duration::from_millis(1500));
    }

    #[test]
    fn test_duration_floor() {
        assert_eq!(animation_duration(0, 25, 100), MIN_DURATION);
        assert_eq!(animation_duration(0, 10, 100), MIN_DURATION);
        assert_eq!(animation_duration(40, 40, 100), MIN_DURATION);
        assert_eq!(animation_duration(0, 0, 0), MIN_DURATION);
    }

    #[test]
    fn test_duration_does_not_overflow() {
        assert_eq!(
            animation_duration(0, i32::MAX, i32::MAX),
            FULL_RANGE_DURATION
        );
    }

    #[test]
    fn test_accelerate_is_slow_then_fast() {
        let ease = Interpolator::default();
        assert_eq!(ease.interpolate(0.0), 0.0);
        assert_eq!(ease.interpolate(0.5), 0.25);
        assert_eq!(ease.interpolate(1.0), 1.0);
        // Second half covers more ground than the first.
        assert!(ease.interpolate(1.0) - ease.interpolate(0.5) > ease.interpolate(0.5));
    }

    #[test]
    fn test_accelerate_factor() {
        let strong = Interpolator::Accelerate(2.0);
        assert!((strong.interpolate(0.5) - 0.0625).abs() < 1e-6);
        assert_eq!(Interpolator::Linear.interpolate(0.3), 0.3);
        assert_eq!(Interpolator::Linear.interpolate(1.7), 1.0);
    }

    #[test]
    fn test_value_at_progresses_with_ease_in() {
        let a = anim(0, 100, 1000);
        assert_eq!(a.value_at(Duration::ZERO), 0);
        assert_eq!(a.value_at(Duration::from_millis(500)), 25);
        assert_eq!(a.value_at(Duration::from_millis(1000)), 100);
        assert_eq!(a.value_at(Duration::from_millis(5000)), 100);
    }

    #[test]
    fn test_value_at_counts_down() {
        let a = anim(80, 20, 1000);
        assert_eq!(a.value_at(Duration::ZERO), 80);
        assert_eq!(a.value_at(Duration::from_millis(500)), 65);
        assert_eq!(a.value_at(Duration::from_secs(1)), 20);
        assert!(a.is_finished(Duration::from_secs(1)));
        assert!(!a.is_finished(Duration::from_millis(999)));
    }
}
