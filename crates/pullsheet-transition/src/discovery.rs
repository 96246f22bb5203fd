//! Discovery bounce: a short nudge of the apps surface that hints it can be
//! pulled up. The workspace, caret and status bar stay untouched.

use crate::controller::{AppsTransitionController, ControllerInner};
use pullsheet_animation::{
    AnimationSpec, AnimatorListener, AnimatorSet, CancellationToken, Easing, RepeatMode,
    ValueAnimator,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct BounceListener {
    controller: Weak<RefCell<ControllerInner>>,
    cancelled: CancellationToken,
}

impl AnimatorListener for BounceListener {
    fn on_animation_cancel(&self) {
        self.cancelled.cancel();
    }

    fn on_animation_end(&self) {
        // A cancelled bounce is reset by whoever cancelled it.
        if self.cancelled.is_cancelled() {
            return;
        }
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let mut inner = controller.borrow_mut();
        inner.discovery_animation = None;
        inner.finish_discovery();
        log::debug!("discovery bounce finished");
    }
}

impl AppsTransitionController {
    /// Plays the discovery bounce, replacing one that is already running.
    ///
    /// Does nothing while a drag or a settle is in progress.
    pub fn show_discovery_bounce(&self) {
        if self.inner.borrow().is_busy() {
            log::debug!("discovery bounce skipped during a transition");
            return;
        }
        self.cancel_discovery_animation();

        let controller = Rc::downgrade(&self.inner);
        let bounce = AnimatorSet::new();
        let frame_clock = {
            let mut inner = self.inner.borrow_mut();
            if !inner.has_views() {
                log::warn!("discovery bounce requested before views were bound");
                return;
            }
            inner.translate_without_workspace = true;
            inner.prepare_pull(true);

            let spec = inner.config.discovery_bounce;
            let setter = controller.clone();
            bounce.play(
                ValueAnimator::of_float(1.0, spec.peak_progress, move |progress| {
                    if let Some(controller) = setter.upgrade() {
                        controller.borrow_mut().set_progress(progress);
                    }
                })
                .with_spec(
                    AnimationSpec::tween(spec.leg_duration_millis, Easing::FastOutSlowInEasing)
                        .with_delay(spec.start_delay_millis),
                )
                .with_repeat(spec.repeat_count, RepeatMode::Reverse),
            );
            bounce.add_listener(BounceListener {
                controller,
                cancelled: CancellationToken::new(),
            });
            inner.discovery_animation = Some(bounce.clone());
            inner.frame_clock.clone()
        };

        log::debug!("discovery bounce over {}ms", bounce.duration_millis());
        bounce.start(&frame_clock);
    }

    /// Stops a running bounce and snaps back to the pulled-down state.
    pub fn cancel_discovery_animation(&self) {
        let bounce = self.inner.borrow_mut().discovery_animation.take();
        let Some(bounce) = bounce else {
            return;
        };
        bounce.cancel();
        log::debug!("discovery bounce cancelled");
        self.inner.borrow_mut().finish_discovery();
    }

    pub fn is_discovery_running(&self) -> bool {
        self.inner.borrow().discovery_animation.is_some()
    }
}
