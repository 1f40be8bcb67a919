use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::animation::{AnimationError, CountUp, CountUpConfig, CountUpState, FrameScheduler, Result};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` as a [`FrameScheduler`]. All requests reuse one
/// JS closure, owned by the hook that created the scheduler.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Result<i32> {
        let window = web_sys::window().ok_or_else(|| {
            AnimationError::EnvironmentUnavailable("no window to animate in".to_string())
        })?;
        let callback = self.callback.borrow();
        let callback = callback.as_ref().ok_or_else(|| {
            AnimationError::EnvironmentUnavailable("frame callback already released".to_string())
        })?;
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| {
                AnimationError::EnvironmentUnavailable(format!(
                    "requestAnimationFrame failed: {:?}",
                    e
                ))
            })
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

struct FrameLoop<S: FrameScheduler> {
    animator: CountUp<S>,
    scheduler: S,
}

type LoopSlot<S> = Rc<RefCell<Option<FrameLoop<S>>>>;

/// Runs one frame, if a loop is still installed.
fn step<S: FrameScheduler>(slot: &RefCell<Option<FrameLoop<S>>>, now_ms: f64) -> Option<f64> {
    let mut guard = slot.borrow_mut();
    let FrameLoop { animator, scheduler } = guard.as_mut()?;
    animator.on_frame(now_ms, scheduler)
}

/// Back to the start value, then re-applies `signal` so a trigger that is
/// still high replays straight away.
fn restart<S: FrameScheduler>(
    slot: &RefCell<Option<FrameLoop<S>>>,
    signal: bool,
    now_ms: f64,
) -> Option<f64> {
    let mut guard = slot.borrow_mut();
    let FrameLoop { animator, scheduler } = guard.as_mut()?;
    debug!(
        "Replaying count-up to {} over {}ms",
        animator.config().target(),
        animator.config().duration_ms()
    );
    animator.reset(scheduler);
    animator.set_signal(signal, now_ms, scheduler);
    Some(animator.current())
}

/// Uninstalls the loop and cancels its pending frame. Safe to repeat.
fn shut_down<S: FrameScheduler>(slot: &RefCell<Option<FrameLoop<S>>>) {
    if let Some(mut running) = slot.borrow_mut().take() {
        let FrameLoop { animator, scheduler } = &mut running;
        if animator.is_running() && animator.has_pending_frame() {
            debug!("Cancelling count-up mid-animation");
        }
        if !animator.is_disposed() {
            animator.dispose(scheduler);
        }
    }
}

fn state_of<S: FrameScheduler>(slot: &RefCell<Option<FrameLoop<S>>>) -> CountUpState {
    slot.borrow()
        .as_ref()
        .map(|running| running.animator.state())
        .unwrap_or(CountUpState::Idle)
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[derive(Clone, PartialEq)]
pub struct UseCountUpHandle {
    value: f64,
    state: CountUpState,
    reset: Callback<()>,
}

impl UseCountUpHandle {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, CountUpState::Running { .. })
    }

    pub fn is_completed(&self) -> bool {
        self.state == CountUpState::Completed
    }

    /// Returns to the start value. Counts again at once if `start` is high.
    pub fn reset(&self) {
        self.reset.emit(());
    }
}

/// Counts from the configured start value to the target once `start` rises.
///
/// The value updates every animation frame while running. A new `config`
/// tears the old animation down and waits for a fresh rising edge; a
/// `start` that is already high counts as one. Toggling `start` never
/// restarts a run; only [`UseCountUpHandle::reset`] does.
#[hook]
pub fn use_count_up(config: CountUpConfig, start: bool) -> UseCountUpHandle {
    let value = use_state(|| config.start_value());
    let frame_loop: LoopSlot<RafScheduler> = use_mut_ref(|| None);
    let signal = use_mut_ref(|| start);
    *signal.borrow_mut() = start;

    {
        let value = value.clone();
        let frame_loop = frame_loop.clone();
        let signal = signal.clone();
        use_effect_with_deps(
            move |config: &CountUpConfig| {
                let callback: FrameCallback = Rc::new(RefCell::new(None));
                {
                    let frame_loop = frame_loop.clone();
                    let value = value.clone();
                    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                        if let Some(current) = step(&frame_loop, timestamp) {
                            value.set(current);
                        }
                    }));
                }

                let mut animator = CountUp::new(*config);
                let mut scheduler = RafScheduler {
                    callback: callback.clone(),
                };
                animator.set_signal(*signal.borrow(), now_ms(), &mut scheduler);
                value.set(animator.current());
                *frame_loop.borrow_mut() = Some(FrameLoop { animator, scheduler });

                move || {
                    shut_down(&frame_loop);
                    // Breaks the closure -> loop -> scheduler -> closure cycle.
                    callback.borrow_mut().take();
                }
            },
            config,
        );
    }

    {
        let value = value.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with_deps(
            move |start: &bool| {
                if let Some(FrameLoop { animator, scheduler }) = frame_loop.borrow_mut().as_mut() {
                    if animator.set_signal(*start, now_ms(), scheduler) {
                        value.set(animator.current());
                    }
                }
                || ()
            },
            start,
        );
    }

    let reset = {
        let value = value.clone();
        let frame_loop = frame_loop.clone();
        let signal = signal.clone();
        Callback::from(move |_: ()| {
            if let Some(current) = restart(&frame_loop, *signal.borrow(), now_ms()) {
                value.set(current);
            }
        })
    };

    UseCountUpHandle {
        value: *value,
        state: state_of(&frame_loop),
        reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Shares its cancel log so it can be read after the loop is dropped.
    #[derive(Default)]
    struct CountingFrames {
        requested: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl FrameScheduler for CountingFrames {
        type Handle = u32;

        fn request_frame(&mut self) -> Result<u32> {
            self.requested += 1;
            Ok(self.requested)
        }

        fn cancel_frame(&mut self, handle: u32) {
            self.cancelled.borrow_mut().push(handle);
        }
    }

    fn running_loop(target: f64) -> (RefCell<Option<FrameLoop<CountingFrames>>>, Rc<RefCell<Vec<u32>>>) {
        let mut animator = CountUp::new(CountUpConfig::new(target, 1000.0).unwrap());
        let mut scheduler = CountingFrames::default();
        let cancelled = scheduler.cancelled.clone();
        assert!(animator.set_signal(true, 0.0, &mut scheduler));
        (RefCell::new(Some(FrameLoop { animator, scheduler })), cancelled)
    }

    #[test]
    fn step_advances_installed_loop() {
        let (slot, _) = running_loop(10.0);
        let mid = step(&slot, 500.0).unwrap();
        assert!(mid > 0.0 && mid < 10.0);
        assert_eq!(step(&slot, 1000.0), Some(10.0));
        assert_eq!(state_of(&slot), CountUpState::Completed);
    }

    #[test]
    fn shut_down_cancels_pending_frame_once() {
        let (slot, cancelled) = running_loop(10.0);
        step(&slot, 200.0);
        shut_down(&slot);
        shut_down(&slot);
        assert!(slot.borrow().is_none());
        assert_eq!(*cancelled.borrow(), vec![2]);
    }

    #[test]
    fn frames_after_shut_down_find_nothing_to_drive() {
        let (slot, _) = running_loop(10.0);
        shut_down(&slot);
        assert_eq!(step(&slot, 300.0), None);
        assert_eq!(state_of(&slot), CountUpState::Idle);
    }

    #[test]
    fn shut_down_after_completion_cancels_nothing() {
        let (slot, cancelled) = running_loop(10.0);
        step(&slot, 1000.0);
        shut_down(&slot);
        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn restart_with_high_signal_replays_from_start() {
        let (slot, _) = running_loop(10.0);
        assert_eq!(step(&slot, 1000.0), Some(10.0));

        assert_eq!(restart(&slot, true, 2000.0), Some(0.0));
        assert_eq!(state_of(&slot), CountUpState::Running { started_at: 2000.0 });
        assert_eq!(step(&slot, 3000.0), Some(10.0));
    }

    #[test]
    fn restart_with_low_signal_waits_for_next_edge() {
        let (slot, cancelled) = running_loop(10.0);
        step(&slot, 400.0);
        assert_eq!(restart(&slot, false, 500.0), Some(0.0));
        assert_eq!(state_of(&slot), CountUpState::Idle);
        assert_eq!(*cancelled.borrow(), vec![2]);
        assert_eq!(step(&slot, 600.0), None);
    }

    #[test]
    fn restart_without_loop_is_a_no_op() {
        let slot: RefCell<Option<FrameLoop<CountingFrames>>> = RefCell::new(None);
        assert_eq!(restart(&slot, true, 0.0), None);
    }
}
