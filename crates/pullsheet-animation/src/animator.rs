//! Frame-driven value animators grouped into cancellable sets.
//!
//! An [`AnimatorSet`] is a cheap `Rc` handle. Once started it keeps itself
//! alive through its pending frame callback, so callers may drop their
//! handle and the animation still runs to the end.

use crate::animation::{AnimationSpec, Easing, Lerp};
use pullsheet_core::{FrameCallbackRegistration, FrameClock};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// How a repeated animator plays its later iterations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RepeatMode {
    /// Every iteration runs from start to end.
    #[default]
    Restart,
    /// Odd iterations run backwards.
    Reverse,
}

/// Tweens a single `f32` and pushes every sample into a setter.
pub struct ValueAnimator {
    from: f32,
    to: f32,
    spec: AnimationSpec,
    repeat_count: u32,
    repeat_mode: RepeatMode,
    update: Box<dyn FnMut(f32)>,
}

impl ValueAnimator {
    pub fn of_float(from: f32, to: f32, update: impl FnMut(f32) + 'static) -> Self {
        Self {
            from,
            to,
            spec: AnimationSpec::default(),
            repeat_count: 0,
            repeat_mode: RepeatMode::Restart,
            update: Box::new(update),
        }
    }

    pub fn with_spec(mut self, spec: AnimationSpec) -> Self {
        self.spec = spec;
        self
    }

    pub fn with_duration(mut self, duration_millis: u64) -> Self {
        self.spec.duration_millis = duration_millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.spec.easing = easing;
        self
    }

    /// Plays the tween `count` extra times after the first run.
    pub fn with_repeat(mut self, count: u32, mode: RepeatMode) -> Self {
        self.repeat_count = count;
        self.repeat_mode = mode;
        self
    }

    pub fn from(&self) -> f32 {
        self.from
    }

    pub fn to(&self) -> f32 {
        self.to
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn total_duration_millis(&self) -> u64 {
        self.spec.delay_millis + self.spec.duration_millis * (self.repeat_count as u64 + 1)
    }

    /// Samples the animator `play_time_millis` after its set started.
    ///
    /// Returns `None` while the start delay is still running, otherwise the
    /// value together with whether the animator reached its end.
    pub fn value_at(&self, play_time_millis: f64) -> Option<(f32, bool)> {
        let delay = self.spec.delay_millis as f64;
        if play_time_millis < delay {
            return None;
        }
        let elapsed = play_time_millis - delay;
        let duration = self.spec.duration_millis as f64;
        let iterations = self.repeat_count as f64 + 1.0;

        if duration <= 0.0 || elapsed >= duration * iterations {
            let ends_reversed =
                self.repeat_mode == RepeatMode::Reverse && self.repeat_count % 2 == 1;
            let linear = if ends_reversed { 0.0 } else { 1.0 };
            return Some((self.sample(linear), true));
        }

        let iteration = (elapsed / duration).floor();
        let mut linear = ((elapsed - iteration * duration) / duration) as f32;
        if self.repeat_mode == RepeatMode::Reverse && (iteration as u64) % 2 == 1 {
            linear = 1.0 - linear;
        }
        Some((self.sample(linear), false))
    }

    fn sample(&self, linear: f32) -> f32 {
        let eased = self.spec.easing.transform(linear.clamp(0.0, 1.0));
        self.from.lerp(&self.to, eased)
    }

    fn apply(&mut self, value: f32) {
        (self.update)(value);
    }
}

impl std::fmt::Debug for ValueAnimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueAnimator")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("spec", &self.spec)
            .field("repeat_count", &self.repeat_count)
            .field("repeat_mode", &self.repeat_mode)
            .finish()
    }
}

/// Lifecycle callbacks of an [`AnimatorSet`].
///
/// `on_animation_end` fires after both natural completion and
/// cancellation; a cancel is always reported first through
/// `on_animation_cancel`.
pub trait AnimatorListener {
    fn on_animation_start(&self) {}
    fn on_animation_cancel(&self) {}
    fn on_animation_end(&self) {}
}

/// Shared flag a listener checks so that a cancelled run skips its
/// terminal effects.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimatorState {
    Idle,
    Running,
    Finished,
    Canceled,
}

struct AnimatorSetInner {
    animators: SmallVec<[ValueAnimator; 2]>,
    listeners: SmallVec<[Rc<dyn AnimatorListener>; 2]>,
    state: AnimatorState,
    start_time_nanos: Option<u64>,
    frame_clock: Option<FrameClock>,
    registration: Option<FrameCallbackRegistration>,
}

/// A group of value animators that start, tick and end together.
#[derive(Clone)]
pub struct AnimatorSet {
    inner: Rc<RefCell<AnimatorSetInner>>,
}

impl AnimatorSet {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(AnimatorSetInner {
                animators: SmallVec::new(),
                listeners: SmallVec::new(),
                state: AnimatorState::Idle,
                start_time_nanos: None,
                frame_clock: None,
                registration: None,
            })),
        }
    }

    pub fn play(&self, animator: ValueAnimator) -> &Self {
        self.inner.borrow_mut().animators.push(animator);
        self
    }

    pub fn add_listener(&self, listener: impl AnimatorListener + 'static) -> &Self {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
        self
    }

    pub fn state(&self) -> AnimatorState {
        self.inner.borrow().state
    }

    pub fn is_running(&self) -> bool {
        self.state() == AnimatorState::Running
    }

    /// Longest total duration among the played animators.
    pub fn duration_millis(&self) -> u64 {
        self.inner
            .borrow()
            .animators
            .iter()
            .map(ValueAnimator::total_duration_millis)
            .max()
            .unwrap_or(0)
    }

    pub fn ptr_eq(&self, other: &AnimatorSet) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Starts the set; the first sample is taken on the next frame.
    ///
    /// Starting a set that already ran or was cancelled does nothing.
    pub fn start(&self, frame_clock: &FrameClock) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.state != AnimatorState::Idle {
                log::debug!("ignoring start of animator set in state {:?}", inner.state);
                return;
            }
            inner.state = AnimatorState::Running;
            inner.frame_clock = Some(frame_clock.clone());
            inner.listeners.clone()
        };
        for listener in listeners.iter() {
            listener.on_animation_start();
        }
        Self::schedule_next_frame(&self.inner);
    }

    /// Stops the set where it is.
    ///
    /// A running set reports `on_animation_cancel` followed by
    /// `on_animation_end`. A set that never started is marked cancelled
    /// silently and can no longer be started.
    pub fn cancel(&self) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            let was_running = match inner.state {
                AnimatorState::Finished | AnimatorState::Canceled => return,
                AnimatorState::Running => true,
                AnimatorState::Idle => false,
            };
            inner.state = AnimatorState::Canceled;
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            if !was_running {
                return;
            }
            inner.listeners.clone()
        };
        for listener in listeners.iter() {
            listener.on_animation_cancel();
        }
        for listener in listeners.iter() {
            listener.on_animation_end();
        }
    }

    fn schedule_next_frame(this: &Rc<RefCell<AnimatorSetInner>>) {
        let frame_clock = {
            let inner = this.borrow();
            if inner.state != AnimatorState::Running || inner.registration.is_some() {
                return;
            }
            match inner.frame_clock.as_ref() {
                Some(clock) => clock.clone(),
                None => return,
            }
        };
        let set = Rc::clone(this);
        let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
            Self::on_frame(&set, frame_time_nanos);
        });
        if !registration.is_active() {
            log::warn!("frame runtime is gone; animator set cannot advance");
        }
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatorSetInner>>, frame_time_nanos: u64) {
        let (mut animators, start_time_nanos) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if inner.state != AnimatorState::Running {
                return;
            }
            let start_time_nanos = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            (std::mem::take(&mut inner.animators), start_time_nanos)
        };

        // Setters may call back into the set, so no borrow is held here.
        let play_time_millis = frame_time_nanos.saturating_sub(start_time_nanos) as f64 / 1e6;
        let mut finished = true;
        for animator in animators.iter_mut() {
            match animator.value_at(play_time_millis) {
                Some((value, done)) => {
                    animator.apply(value);
                    finished &= done;
                }
                None => finished = false,
            }
            if this.borrow().state != AnimatorState::Running {
                break;
            }
        }

        let ended_listeners = {
            let mut inner = this.borrow_mut();
            let added_meanwhile: SmallVec<[ValueAnimator; 2]> = inner.animators.drain(..).collect();
            animators.extend(added_meanwhile);
            inner.animators = animators;
            match inner.state {
                AnimatorState::Running if finished => {
                    inner.state = AnimatorState::Finished;
                    Some(inner.listeners.clone())
                }
                AnimatorState::Running => None,
                _ => return,
            }
        };

        match ended_listeners {
            Some(listeners) => {
                for listener in listeners.iter() {
                    listener.on_animation_end();
                }
            }
            None => Self::schedule_next_frame(this),
        }
    }
}

impl Default for AnimatorSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnimatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AnimatorSet")
            .field("state", &inner.state)
            .field("animators", &inner.animators.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
