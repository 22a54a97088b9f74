//! Animated progress transitions.

use super::model::Model;
use crate::animation::{animation_duration, FrameMsg, Interpolator, ProgressAnimation, FPS};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::time::{Duration, Instant};
use tracing::{debug, trace};

impl Model {
    /// Animates progress to `target`, clamped to `0..=max`.
    ///
    /// Takes two seconds for the full range and at least 500 ms, paced with an
    /// ease-in curve. Any running animation is superseded. Returns the command
    /// that schedules the first frame, or `None` when progress is already at
    /// the target.
    ///
    /// ```rust
    /// use bubble_progress::bubble_progress::{new, with_max};
    /// use std::time::Duration;
    ///
    /// let mut bar = new(&[with_max(100)]);
    /// let cmd = bar.animate_progress(100);
    /// assert!(cmd.is_some());
    /// assert_eq!(bar.animation_duration(), Some(Duration::from_millis(2000)));
    /// ```
    pub fn animate_progress(&mut self, target: i32) -> Option<Cmd> {
        self.animate_progress_at(target, Instant::now())
    }

    pub(super) fn animate_progress_at(&mut self, target: i32, now: Instant) -> Option<Cmd> {
        let from = self.progress;
        let to = target.clamp(0, self.max);
        self.supersede();

        if from == to {
            return None;
        }

        let duration = animation_duration(from, to, self.max);
        debug!(id = self.id, from, to, ?duration, "animating progress");
        self.animation = Some(ProgressAnimation::new(
            from,
            to,
            duration,
            self.interpolator,
            now,
        ));
        Some(self.next_frame())
    }

    /// Drops any running animation. Progress stays where it is.
    pub fn stop_animation(&mut self) {
        self.supersede();
    }

    /// Whether an animation is driving progress.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Duration of the running animation, if any.
    pub fn animation_duration(&self) -> Option<Duration> {
        self.animation.as_ref().map(ProgressAnimation::duration)
    }

    /// Pacing curve used by future animations.
    pub fn set_interpolator(&mut self, interpolator: Interpolator) {
        self.interpolator = interpolator;
    }

    /// Pacing curve used by future animations.
    pub fn interpolator(&self) -> Interpolator {
        self.interpolator
    }

    pub(super) fn handle_frame(&mut self, frame: &FrameMsg) -> Option<Cmd> {
        if frame.id != self.id || frame.tag != self.tag {
            return None;
        }
        self.advance(Instant::now())
    }

    /// Samples the running animation at `now` and applies the value.
    pub(super) fn advance(&mut self, now: Instant) -> Option<Cmd> {
        let animation = self.animation.as_ref()?;
        let elapsed = now.saturating_duration_since(animation.started());
        let value = animation.value_at(elapsed);
        let finished = animation.is_finished(elapsed);

        trace!(id = self.id, value, "animation frame");
        self.set_progress(value);

        if finished {
            self.animation = None;
            return None;
        }
        Some(self.next_frame())
    }

    // Bumping the tag orphans every frame already scheduled.
    fn supersede(&mut self) {
        if let Some(animation) = self.animation.take() {
            debug!(
                id = self.id,
                to = animation.to(),
                "superseding running animation"
            );
        }
        self.tag += 1;
    }

    fn next_frame(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        let duration = Duration::from_nanos(1_000_000_000 / FPS as u64);

        bubbletea_tick(duration, move |_| Box::new(FrameMsg { id, tag }) as Msg)
    }
}
