use log::{debug, warn};

use super::easing::Easing;
use super::error::{AnimationError, Result};

/// Durations at or below zero are clamped to this.
pub const MIN_DURATION_MS: f64 = 1.0;

/// Next-frame callbacks supplied by the host.
///
/// The animator asks for exactly one pending frame at a time. The host calls
/// [`CountUp::on_frame`] with the frame timestamp when it fires.
pub trait FrameScheduler {
    type Handle;

    fn request_frame(&mut self) -> Result<Self::Handle>;
    fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUpConfig {
    target: f64,
    start_value: f64,
    duration_ms: f64,
    easing: Easing,
}

impl CountUpConfig {
    pub fn new(target: f64, duration_ms: f64) -> Result<Self> {
        if !target.is_finite() {
            return Err(AnimationError::InvalidConfiguration(format!(
                "count-up target must be finite, got {}",
                target
            )));
        }
        if !duration_ms.is_finite() {
            return Err(AnimationError::InvalidConfiguration(format!(
                "count-up duration must be finite, got {}",
                duration_ms
            )));
        }
        let duration_ms = if duration_ms < MIN_DURATION_MS {
            warn!(
                "Count-up duration {}ms is too short, using {}ms",
                duration_ms, MIN_DURATION_MS
            );
            MIN_DURATION_MS
        } else {
            duration_ms
        };

        Ok(Self {
            target,
            start_value: 0.0,
            duration_ms,
            easing: Easing::default(),
        })
    }

    pub fn starting_at(mut self, start_value: f64) -> Result<Self> {
        if !start_value.is_finite() {
            return Err(AnimationError::InvalidConfiguration(format!(
                "count-up start value must be finite, got {}",
                start_value
            )));
        }
        self.start_value = start_value;
        Ok(self)
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn start_value(&self) -> f64 {
        self.start_value
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountUpState {
    Idle,
    Running { started_at: f64 },
    Completed,
}

/// Interpolates from the start value to the target once a start signal
/// rises. Only the false→true edge starts it; the level is ignored.
pub struct CountUp<S: FrameScheduler> {
    config: CountUpConfig,
    state: CountUpState,
    current: f64,
    last_signal: bool,
    pending: Option<S::Handle>,
    disposed: bool,
}

impl<S: FrameScheduler> CountUp<S> {
    pub fn new(config: CountUpConfig) -> Self {
        Self {
            current: config.start_value,
            config,
            state: CountUpState::Idle,
            last_signal: false,
            pending: None,
            disposed: false,
        }
    }

    /// Feeds the current level of the start signal. Returns `true` when this
    /// call started the animation.
    pub fn set_signal(&mut self, signal: bool, now_ms: f64, scheduler: &mut S) -> bool {
        if self.disposed {
            return false;
        }
        let rising = signal && !self.last_signal;
        self.last_signal = signal;

        if !rising || self.state != CountUpState::Idle {
            return false;
        }

        debug!(
            "Counting up to {} over {}ms",
            self.config.target, self.config.duration_ms
        );
        self.state = CountUpState::Running { started_at: now_ms };
        self.schedule(scheduler);
        true
    }

    /// Advances one frame. Returns the new value, or `None` if nothing was
    /// running (idle, finished or disposed).
    pub fn on_frame(&mut self, now_ms: f64, scheduler: &mut S) -> Option<f64> {
        // The frame we were waiting for has fired.
        self.pending = None;
        if self.disposed {
            return None;
        }
        let CountUpState::Running { started_at } = self.state else {
            return None;
        };

        let elapsed = (now_ms - started_at).max(0.0);
        if elapsed >= self.config.duration_ms {
            self.finish();
            return Some(self.current);
        }

        let CountUpConfig {
            target,
            start_value,
            duration_ms,
            easing,
        } = self.config;
        let eased = start_value + (target - start_value) * easing.apply(elapsed / duration_ms);
        // Never step backwards, even on out-of-order timestamps.
        self.current = if target >= start_value {
            eased.max(self.current).min(target)
        } else {
            eased.min(self.current).max(target)
        };

        self.schedule(scheduler);
        Some(self.current)
    }

    /// Back to `Idle` at the start value. The next rising edge starts over.
    pub fn reset(&mut self, scheduler: &mut S) {
        if self.disposed {
            return;
        }
        self.cancel_pending(scheduler);
        self.state = CountUpState::Idle;
        self.current = self.config.start_value;
        self.last_signal = false;
    }

    /// Cancels any pending frame. Later frames and signals are ignored.
    /// Safe to call any number of times.
    pub fn dispose(&mut self, scheduler: &mut S) {
        self.cancel_pending(scheduler);
        self.disposed = true;
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn state(&self) -> CountUpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountUpState::Running { .. })
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    pub fn config(&self) -> &CountUpConfig {
        &self.config
    }

    fn schedule(&mut self, scheduler: &mut S) {
        match scheduler.request_frame() {
            Ok(handle) => self.pending = Some(handle),
            Err(e) => {
                warn!("{}; jumping to final value", e);
                self.finish();
            }
        }
    }

    fn finish(&mut self) {
        self.current = self.config.target;
        self.state = CountUpState::Completed;
    }

    fn cancel_pending(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeFrames {
        available: bool,
        requested: u32,
        cancelled: Vec<u32>,
    }

    impl FakeFrames {
        fn new() -> Self {
            Self {
                available: true,
                requested: 0,
                cancelled: Vec::new(),
            }
        }
    }

    impl FrameScheduler for FakeFrames {
        type Handle = u32;

        fn request_frame(&mut self) -> Result<u32> {
            if !self.available {
                return Err(AnimationError::EnvironmentUnavailable(
                    "no animation frames".to_string(),
                ));
            }
            self.requested += 1;
            Ok(self.requested)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.push(handle);
        }
    }

    fn animator(target: f64, duration_ms: f64) -> (CountUp<FakeFrames>, FakeFrames) {
        let config = CountUpConfig::new(target, duration_ms).unwrap();
        (CountUp::new(config), FakeFrames::new())
    }

    #[test]
    fn stays_idle_until_signal_rises() {
        let (mut count, mut frames) = animator(42.5, 2000.0);
        assert!(!count.set_signal(false, 0.0, &mut frames));
        assert_eq!(count.on_frame(500.0, &mut frames), None);
        assert_eq!(count.current(), 0.0);
        assert_eq!(count.state(), CountUpState::Idle);
        assert_eq!(frames.requested, 0);
    }

    #[test]
    fn reaches_target_exactly_at_duration() {
        let (mut count, mut frames) = animator(99.25, 2000.0);
        assert!(count.set_signal(true, 0.0, &mut frames));
        assert!(count.is_running());

        let halfway = count.on_frame(1000.0, &mut frames).unwrap();
        assert!(halfway > 0.0 && halfway < 99.25, "halfway was {}", halfway);

        assert_eq!(count.on_frame(2000.0, &mut frames), Some(99.25));
        assert_eq!(count.current(), 99.25);
        assert_eq!(count.state(), CountUpState::Completed);
        assert!(!count.is_running());
    }

    #[test]
    fn stops_requesting_frames_after_completion() {
        let (mut count, mut frames) = animator(7.0, 100.0);
        count.set_signal(true, 0.0, &mut frames);
        count.on_frame(50.0, &mut frames);
        count.on_frame(150.0, &mut frames);
        let requested = frames.requested;

        assert!(!count.has_pending_frame());
        assert_eq!(count.on_frame(200.0, &mut frames), None);
        assert_eq!(frames.requested, requested);
    }

    #[test]
    fn samples_never_decrease_and_end_on_target() {
        for target in [0.0, 0.5, 7.0, 42.5, 99.25, 982_000.0, 1.0e9] {
            for duration in [1.0, 16.0, 300.0, 2000.0] {
                let (mut count, mut frames) = animator(target, duration);
                count.set_signal(true, 10.0, &mut frames);

                let mut previous = 0.0;
                let mut now = 10.0;
                let mut last = None;
                while let Some(value) = count.on_frame(now, &mut frames) {
                    assert!(value >= previous, "target {} duration {}", target, duration);
                    assert!(value <= target);
                    previous = value;
                    last = Some(value);
                    now += 16.7;
                }
                assert_eq!(last, Some(target));
            }
        }
    }

    #[test]
    fn out_of_order_timestamps_do_not_step_back() {
        let (mut count, mut frames) = animator(100.0, 1000.0);
        count.set_signal(true, 0.0, &mut frames);
        let later = count.on_frame(600.0, &mut frames).unwrap();
        let earlier = count.on_frame(300.0, &mut frames).unwrap();
        assert_eq!(earlier, later);
    }

    #[test]
    fn toggling_signal_does_not_restart() {
        let (mut count, mut frames) = animator(100.0, 1000.0);
        count.set_signal(true, 0.0, &mut frames);
        let first = count.on_frame(400.0, &mut frames).unwrap();

        assert!(!count.set_signal(false, 450.0, &mut frames));
        assert!(!count.set_signal(true, 500.0, &mut frames));
        assert_eq!(count.state(), CountUpState::Running { started_at: 0.0 });

        let second = count.on_frame(600.0, &mut frames).unwrap();
        assert!(second > first);

        let (mut reference, mut ref_frames) = animator(100.0, 1000.0);
        reference.set_signal(true, 0.0, &mut ref_frames);
        assert_eq!(reference.on_frame(600.0, &mut ref_frames), Some(second));
    }

    #[test]
    fn completed_is_terminal_without_reset() {
        let (mut count, mut frames) = animator(5.0, 100.0);
        count.set_signal(true, 0.0, &mut frames);
        count.on_frame(100.0, &mut frames);
        count.set_signal(false, 200.0, &mut frames);
        assert!(!count.set_signal(true, 300.0, &mut frames));
        assert_eq!(count.current(), 5.0);
        assert_eq!(count.state(), CountUpState::Completed);
    }

    #[test]
    fn reset_allows_a_fresh_run() {
        let (mut count, mut frames) = animator(10.0, 1000.0);
        count.set_signal(true, 0.0, &mut frames);
        count.on_frame(500.0, &mut frames);

        count.reset(&mut frames);
        assert_eq!(count.state(), CountUpState::Idle);
        assert_eq!(count.current(), 0.0);
        assert_eq!(frames.cancelled, vec![2]);

        assert!(count.set_signal(true, 5000.0, &mut frames));
        assert_eq!(
            count.state(),
            CountUpState::Running { started_at: 5000.0 }
        );
    }

    #[test]
    fn dispose_cancels_pending_frame_once() {
        let (mut count, mut frames) = animator(10.0, 1000.0);
        count.set_signal(true, 0.0, &mut frames);
        assert!(count.has_pending_frame());

        count.dispose(&mut frames);
        count.dispose(&mut frames);
        assert_eq!(frames.cancelled, vec![1]);
        assert!(count.is_disposed());

        // A frame that was already in flight is swallowed.
        assert_eq!(count.on_frame(500.0, &mut frames), None);
        assert!(!count.set_signal(true, 600.0, &mut frames));
        assert_eq!(frames.requested, 1);
    }

    #[test]
    fn counts_from_configured_start_value() {
        let config = CountUpConfig::new(50.0, 1000.0)
            .unwrap()
            .starting_at(10.0)
            .unwrap();
        let mut count: CountUp<FakeFrames> = CountUp::new(config);
        let mut frames = FakeFrames::new();
        assert_eq!(count.current(), 10.0);

        count.set_signal(true, 0.0, &mut frames);
        let mid = count.on_frame(500.0, &mut frames).unwrap();
        assert!(mid > 10.0 && mid < 50.0);
        assert_eq!(count.on_frame(1000.0, &mut frames), Some(50.0));
    }

    #[test]
    fn counts_down_toward_lower_targets() {
        let config = CountUpConfig::new(-20.0, 100.0).unwrap();
        let mut count: CountUp<FakeFrames> = CountUp::new(config);
        let mut frames = FakeFrames::new();
        count.set_signal(true, 0.0, &mut frames);
        let mid = count.on_frame(50.0, &mut frames).unwrap();
        assert!(mid < 0.0 && mid > -20.0);
        assert_eq!(count.on_frame(100.0, &mut frames), Some(-20.0));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(CountUpConfig::new(f64::NAN, 2000.0).is_err());
        assert!(CountUpConfig::new(f64::INFINITY, 2000.0).is_err());
        assert!(CountUpConfig::new(10.0, f64::NAN).is_err());
        assert!(CountUpConfig::new(10.0, 1000.0)
            .unwrap()
            .starting_at(f64::NEG_INFINITY)
            .is_err());
    }

    #[test]
    fn clamps_non_positive_duration() {
        let config = CountUpConfig::new(3.0, 0.0).unwrap();
        assert_eq!(config.duration_ms(), MIN_DURATION_MS);
        assert_eq!(CountUpConfig::new(3.0, -50.0).unwrap().duration_ms(), MIN_DURATION_MS);

        let mut count: CountUp<FakeFrames> = CountUp::new(config);
        let mut frames = FakeFrames::new();
        count.set_signal(true, 0.0, &mut frames);
        assert_eq!(count.on_frame(1.0, &mut frames), Some(3.0));
    }

    #[test]
    fn missing_frame_scheduler_jumps_to_target() {
        let (mut count, mut frames) = animator(982_000.0, 2000.0);
        frames.available = false;
        assert!(count.set_signal(true, 0.0, &mut frames));
        assert_eq!(count.current(), 982_000.0);
        assert_eq!(count.state(), CountUpState::Completed);
        assert!(!count.has_pending_frame());
    }
}
