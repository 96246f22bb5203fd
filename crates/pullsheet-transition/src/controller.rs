//! Pull-up transition controller.
//!
//! Owns the progress model and the pull detector, decides when to claim a
//! gesture, turns drags into progress and settles releases with an
//! animation. Every visual write goes through
//! [`AppsTransitionController::set_progress`].

use crate::config::{ConfigError, TransitionConfig};
use crate::duration::DurationCalculator;
use crate::progress::ProgressModel;
use crate::surfaces::{
    AppsSurface, CaretController, Host, Hotseat, TransitionAction, TransitionEvent, Workspace,
};
use crate::visuals::VisualBinder;
use pullsheet_animation::{AnimatorListener, AnimatorSet, CancellationToken, Easing, ValueAnimator};
use pullsheet_core::{Clock, FrameClock, SystemClock};
use pullsheet_foundation::{
    DetectorState, DragEvents, DragListener, PointerEvent, PullDetector, ScrollDirections,
    VelocitySmoother,
};
use pullsheet_ui_graphics::Rect;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// End state a settle animation runs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleTarget {
    /// Apps surface fully pulled up, progress 0.
    AllApps,
    /// Apps surface hidden below the viewport, progress 1.
    Workspace,
}

impl SettleTarget {
    pub fn progress(self) -> f32 {
        match self {
            SettleTarget::AllApps => 0.0,
            SettleTarget::Workspace => 1.0,
        }
    }
}

#[derive(Clone)]
pub(crate) struct BoundViews {
    pub(crate) apps: Rc<RefCell<dyn AppsSurface>>,
    pub(crate) hotseat: Rc<RefCell<dyn Hotseat>>,
    pub(crate) workspace: Rc<RefCell<dyn Workspace>>,
    pub(crate) caret: Rc<RefCell<dyn CaretController>>,
}

pub(crate) struct ControllerInner {
    pub(crate) config: TransitionConfig,
    pub(crate) host: Rc<RefCell<dyn Host>>,
    pub(crate) views: Option<BoundViews>,
    pub(crate) frame_clock: FrameClock,
    clock: Rc<dyn Clock>,
    detector: PullDetector,
    /// Velocity of progress writes made while no finger is dragging.
    frame_velocity: VelocitySmoother,
    model: ProgressModel,
    visuals: VisualBinder,
    durations: DurationCalculator,
    animation_duration_millis: u64,
    current_animation: Option<AnimatorSet>,
    animation_generation: u64,
    pub(crate) discovery_animation: Option<AnimatorSet>,
    pub(crate) translate_without_workspace: bool,
    no_intercept: bool,
}

impl ControllerInner {
    fn new(host: Rc<RefCell<dyn Host>>, frame_clock: FrameClock, config: TransitionConfig) -> Self {
        Self {
            detector: PullDetector::new(config.touch_slop, config.fling_threshold),
            frame_velocity: VelocitySmoother::new(),
            model: ProgressModel::new(config.default_shift_range, config.recatch_rejection_fraction),
            visuals: VisualBinder::new(config.apps_background_color, config.parallax_coefficient),
            durations: DurationCalculator::new(
                config.animation_duration_millis,
                config.min_animation_duration_millis,
            ),
            animation_duration_millis: config.animation_duration_millis,
            config,
            host,
            views: None,
            frame_clock,
            clock: Rc::new(SystemClock),
            current_animation: None,
            animation_generation: 0,
            discovery_animation: None,
            translate_without_workspace: false,
            no_intercept: false,
        }
    }

    pub(crate) fn has_views(&self) -> bool {
        self.views.is_some()
    }

    /// A finger is on the surface, or a settle is still running.
    pub(crate) fn is_busy(&self) -> bool {
        self.detector.is_dragging_or_settling()
            || self
                .current_animation
                .as_ref()
                .is_some_and(AnimatorSet::is_running)
    }

    /// Single write path of the progress scalar and every visual derived
    /// from it.
    pub(crate) fn set_progress(&mut self, progress: f32) {
        let frame = self.model.set_progress(progress);
        let Some(views) = self.views.as_ref() else {
            log::debug!("progress {progress} stored before views were bound");
            return;
        };
        let vertical_bar = self.host.borrow().device_profile().is_vertical_bar_layout;

        self.visuals.apply_apps(&frame, &mut *views.apps.borrow_mut());
        self.visuals
            .apply_hotseat(&frame, vertical_bar, &mut *views.workspace.borrow_mut());

        if self.translate_without_workspace {
            return;
        }
        self.visuals
            .apply_workspace(&frame, &mut *views.workspace.borrow_mut());

        let dragging = self.detector.is_dragging();
        if !dragging {
            let velocity = self
                .frame_velocity
                .compute(frame.shift_delta(), self.clock.now_millis());
            self.model.set_container_velocity(velocity);
        }
        views
            .caret
            .borrow_mut()
            .update_caret(progress, self.model.container_velocity(), dragging);
        self.visuals.update_light_status_bar(
            frame.shift_current,
            vertical_bar,
            &mut *self.host.borrow_mut(),
        );
    }

    /// Readies the surfaces for a pull. Only a fresh start (`start == true`)
    /// captures anything.
    pub(crate) fn prepare_pull(&mut self, start: bool) {
        if !start {
            return;
        }
        let Some(views) = self.views.as_ref() else {
            return;
        };
        let status_bar_height = self.host.borrow().insets().top;
        self.visuals.set_status_bar_height(status_bar_height);
        views.hotseat.borrow_mut().set_visible(true);

        if !self.host.borrow().is_apps_visible() {
            self.host.borrow_mut().try_and_update_predicted_apps();
            let hotseat_color = views.hotseat.borrow().background_color();
            self.visuals.capture_hotseat_background(hotseat_color);
            views.hotseat.borrow_mut().set_background_transparent(true);
            let mut apps = views.apps.borrow_mut();
            apps.set_visible(true);
            apps.set_reveal_color(hotseat_color);
        }
    }

    pub(crate) fn finish_pull_up(&mut self) {
        if let Some(views) = self.views.as_ref() {
            views.hotseat.borrow_mut().set_visible(false);
        }
        self.set_progress(0.0);
    }

    pub(crate) fn finish_pull_down(&mut self) {
        if let Some(views) = self.views.as_ref() {
            views.apps.borrow_mut().set_visible(false);
            {
                let mut hotseat = views.hotseat.borrow_mut();
                hotseat.set_background_transparent(false);
                hotseat.set_visible(true);
            }
            views.apps.borrow_mut().reset();
        }
        self.set_progress(1.0);
    }

    /// Terminal state of a discovery bounce, whether it completed or was
    /// cancelled.
    pub(crate) fn finish_discovery(&mut self) {
        self.finish_pull_down();
        self.translate_without_workspace = false;
    }

    fn should_reject_gesture(&self, event: &PointerEvent) -> bool {
        let Some(views) = self.views.as_ref() else {
            return true;
        };
        let host = self.host.borrow();
        if host.is_overview_mode() || host.is_widgets_visible() {
            return true;
        }
        if host.is_apps_visible() {
            return !views.apps.borrow().should_container_scroll(event.position);
        }
        !self.should_possibly_intercept(&*host, event)
    }

    fn should_possibly_intercept(&self, host: &dyn Host, event: &PointerEvent) -> bool {
        if !self.detector.is_idle() {
            return true;
        }
        let profile = host.device_profile();
        if profile.is_vertical_bar_layout {
            event.y() > profile.height_px - self.config.bezel_swipe_up_height
        } else {
            host.is_event_over_hotseat(event.position)
                || host.is_event_over_page_indicator(event.position)
        }
    }

    fn configure_detector(&mut self) {
        let (directions, ignore_slop_when_settling) = if self.detector.is_idle() {
            if self.host.borrow().is_apps_visible() {
                (ScrollDirections::DOWN, false)
            } else {
                (ScrollDirections::UP, false)
            }
        } else if self.model.is_in_bottom_dead_zone() {
            (ScrollDirections::UP, false)
        } else if self.model.is_in_top_dead_zone() {
            (ScrollDirections::DOWN, false)
        } else {
            (ScrollDirections::BOTH, true)
        };
        log::trace!(
            "detecting {directions:?}, ignore slop when settling: {ignore_slop_when_settling}"
        );
        self.detector
            .set_detectable_scroll_conditions(directions, ignore_slop_when_settling);
    }
}

/// Runs the terminal side effects of a settle that was not cancelled.
struct SettleListener {
    controller: Weak<RefCell<ControllerInner>>,
    target: SettleTarget,
    generation: u64,
    cancelled: CancellationToken,
}

impl AnimatorListener for SettleListener {
    fn on_animation_cancel(&self) {
        self.cancelled.cancel();
    }

    fn on_animation_end(&self) {
        if self.cancelled.is_cancelled() {
            return;
        }
        let Some(controller) = self.controller.upgrade() else {
            return;
        };
        let mut inner = controller.borrow_mut();
        match self.target {
            SettleTarget::AllApps => inner.finish_pull_up(),
            SettleTarget::Workspace => inner.finish_pull_down(),
        }
        if inner.animation_generation == self.generation {
            inner.current_animation = None;
        }
        inner.detector.finished_scrolling();
        log::debug!("settled at {:?}", self.target);
    }
}

/// Handle to the transition controller. Clones share the same state.
#[derive(Clone)]
pub struct AppsTransitionController {
    pub(crate) inner: Rc<RefCell<ControllerInner>>,
}

impl AppsTransitionController {
    pub fn new(host: Rc<RefCell<dyn Host>>, frame_clock: FrameClock) -> Self {
        Self::from_inner(ControllerInner::new(
            host,
            frame_clock,
            TransitionConfig::default(),
        ))
    }

    pub fn try_new(
        host: Rc<RefCell<dyn Host>>,
        frame_clock: FrameClock,
        config: TransitionConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_inner(ControllerInner::new(
            host,
            frame_clock,
            config,
        )))
    }

    fn from_inner(inner: ControllerInner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Replaces the clock that timestamps programmatic and animation-driven
    /// progress writes. Only those writes read it; pointer velocity uses the
    /// event timestamps.
    pub fn with_clock(self, clock: Rc<dyn Clock>) -> Self {
        self.inner.borrow_mut().clock = clock;
        self
    }

    pub fn setup_views(
        &self,
        apps: Rc<RefCell<dyn AppsSurface>>,
        hotseat: Rc<RefCell<dyn Hotseat>>,
        workspace: Rc<RefCell<dyn Workspace>>,
        caret: Rc<RefCell<dyn CaretController>>,
    ) {
        self.inner.borrow_mut().views = Some(BoundViews {
            apps,
            hotseat,
            workspace,
            caret,
        });
    }

    pub fn config(&self) -> TransitionConfig {
        self.inner.borrow().config.clone()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.inner.borrow().frame_clock.clone()
    }

    pub fn progress(&self) -> f32 {
        self.inner.borrow().model.progress()
    }

    pub fn shift_range(&self) -> f32 {
        self.inner.borrow().model.shift_range()
    }

    /// Current translation of the apps surface, `progress * shift_range`.
    pub fn translation_y(&self) -> f32 {
        self.inner.borrow().model.shift_current()
    }

    pub fn container_velocity(&self) -> f32 {
        self.inner.borrow().model.container_velocity()
    }

    pub fn detector_state(&self) -> DetectorState {
        self.inner.borrow().detector.state()
    }

    pub fn is_transitioning(&self) -> bool {
        self.inner.borrow().detector.is_dragging_or_settling()
    }

    /// Duration the next (or current) settle animation uses.
    pub fn animation_duration_millis(&self) -> u64 {
        self.inner.borrow().animation_duration_millis
    }

    pub fn current_animation(&self) -> Option<AnimatorSet> {
        self.inner.borrow().current_animation.clone()
    }

    pub fn is_animating(&self) -> bool {
        self.inner
            .borrow()
            .current_animation
            .as_ref()
            .is_some_and(AnimatorSet::is_running)
    }

    pub fn set_progress(&self, progress: f32) {
        self.inner.borrow_mut().set_progress(progress);
    }

    /// Decides whether the gesture belongs to the controller.
    ///
    /// The decision to ignore a gesture is taken on DOWN and holds until the
    /// next DOWN.
    pub fn on_intercept_touch_event(&self, event: &PointerEvent) -> bool {
        let events = {
            let mut inner = self.inner.borrow_mut();
            if event.is_down() {
                let reject = inner.should_reject_gesture(event);
                inner.no_intercept = reject;
                if !reject {
                    inner.configure_detector();
                }
                log::trace!("intercept decision on down: reject = {reject}");
            }
            if inner.no_intercept {
                return false;
            }
            inner.detector.on_touch_event(event)
        };
        self.dispatch(events);

        let inner = self.inner.borrow();
        if inner.detector.is_settling() && inner.model.is_in_dead_zone() {
            return false;
        }
        inner.detector.is_dragging_or_settling()
    }

    pub fn on_touch_event(&self, event: &PointerEvent) -> bool {
        let events = self.inner.borrow_mut().detector.on_touch_event(event);
        self.dispatch(events);
        true
    }

    fn dispatch(&self, events: DragEvents) {
        let mut listener = self.clone();
        for event in events {
            event.dispatch(&mut listener);
        }
    }

    pub fn on_drag_start(&self, start: bool) {
        let caret = self
            .inner
            .borrow()
            .views
            .as_ref()
            .map(|views| Rc::clone(&views.caret));
        let Some(caret) = caret else {
            log::warn!("drag started before views were bound");
            return;
        };
        caret.borrow_mut().on_drag_start();
        self.cancel_animation();

        let mut inner = self.inner.borrow_mut();
        inner.model.capture_shift_start();
        inner.prepare_pull(start);
    }

    pub fn on_drag(&self, displacement: f32, velocity: f32) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.has_views() {
            log::warn!("drag before views were bound");
            return false;
        }
        inner.model.set_container_velocity(velocity);
        let progress = inner.model.drag_progress(displacement);
        inner.set_progress(progress);
        true
    }

    /// Settles a released drag at one of the two ends.
    pub fn on_drag_end(&self, velocity: f32, fling: bool) {
        let (target, telemetry, host) = {
            let mut inner = self.inner.borrow_mut();
            if !inner.has_views() {
                log::warn!("drag ended before views were bound");
                return;
            }
            let translation = inner.model.shift_current();
            let shift_range = inner.model.shift_range();

            let (target, remaining, action) = if fling {
                if velocity < 0.0 {
                    (SettleTarget::AllApps, translation, TransitionAction::Fling)
                } else {
                    (
                        SettleTarget::Workspace,
                        (shift_range - translation).abs(),
                        TransitionAction::Fling,
                    )
                }
            } else if translation > shift_range / 2.0 {
                (
                    SettleTarget::Workspace,
                    (shift_range - translation).abs(),
                    TransitionAction::Swipe,
                )
            } else {
                (SettleTarget::AllApps, translation.abs(), TransitionAction::Swipe)
            };

            let duration = inner.durations.calculate(velocity, remaining, shift_range);
            inner.animation_duration_millis = duration;
            let apps_visible = inner.host.borrow().is_apps_visible();
            let telemetry = (target == SettleTarget::AllApps && !apps_visible)
                .then(|| TransitionEvent::hotseat_up(action));
            log::debug!(
                "release at {translation}/{shift_range} with velocity {velocity} (fling: {fling}) settles to {target:?} in {duration}ms"
            );
            (target, telemetry, Rc::clone(&inner.host))
        };

        {
            let mut host = host.borrow_mut();
            if let Some(event) = telemetry {
                host.log_action_on_container(event);
            }
            match target {
                SettleTarget::AllApps => host.show_apps_view(true, false, false),
                SettleTarget::Workspace => host.show_workspace(true),
            }
        }

        let animation = AnimatorSet::new();
        let duration = self.animation_duration_millis();
        self.animate_to(target, Some(&animation), duration);
        animation.start(&self.frame_clock());
    }

    /// Adds the tween to `animation` that pulls the apps surface up. The
    /// caller starts the set.
    pub fn animate_to_all_apps(&self, animation: Option<&AnimatorSet>, duration_millis: u64) {
        self.animate_to(SettleTarget::AllApps, animation, duration_millis);
    }

    /// Adds the tween to `animation` that pushes the apps surface down. The
    /// caller starts the set.
    pub fn animate_to_workspace(&self, animation: Option<&AnimatorSet>, duration_millis: u64) {
        self.animate_to(SettleTarget::Workspace, animation, duration_millis);
    }

    fn animate_to(
        &self,
        target: SettleTarget,
        animation: Option<&AnimatorSet>,
        duration_millis: u64,
    ) {
        let Some(animation) = animation else {
            return;
        };
        if !self.inner.borrow().has_views() {
            log::warn!("cannot animate to {target:?} before views were bound");
            return;
        }

        let previous = self.inner.borrow_mut().current_animation.take();
        if let Some(previous) = previous {
            if !previous.ptr_eq(animation) {
                log::debug!("cancelling settle animation");
                previous.cancel();
            }
        }
        self.cancel_discovery_animation();

        let controller = Rc::downgrade(&self.inner);
        let mut inner = self.inner.borrow_mut();
        let easing = if inner.detector.is_idle() {
            inner.prepare_pull(true);
            inner.animation_duration_millis = duration_millis;
            inner.model.capture_shift_start();
            Easing::FastOutSlowInEasing
        } else {
            Easing::ScrollEasing
        };

        let now = inner.clock.now_millis();
        inner.frame_velocity.reset(now);
        inner.animation_generation += 1;
        let generation = inner.animation_generation;
        let from = inner.model.progress();
        let setter = controller.clone();
        animation.play(
            ValueAnimator::of_float(from, target.progress(), move |progress| {
                if let Some(controller) = setter.upgrade() {
                    controller.borrow_mut().set_progress(progress);
                }
            })
            .with_duration(inner.animation_duration_millis)
            .with_easing(easing),
        );
        animation.add_listener(SettleListener {
            controller,
            target,
            generation,
            cancelled: CancellationToken::new(),
        });
        inner.current_animation = Some(animation.clone());
        log::debug!(
            "animating {from} -> {target:?} over {}ms with {easing:?}",
            inner.animation_duration_millis
        );
    }

    fn cancel_animation(&self) {
        let current = self.inner.borrow_mut().current_animation.take();
        if let Some(current) = current {
            log::debug!("cancelling settle animation");
            current.cancel();
        }
        self.cancel_discovery_animation();
    }

    pub fn finish_pull_up(&self) {
        self.inner.borrow_mut().finish_pull_up();
    }

    pub fn finish_pull_down(&self) {
        self.inner.borrow_mut().finish_pull_down();
    }

    /// Refreshes the shift range from the hotseat bounds and re-applies the
    /// current progress. A running settle keeps going.
    pub fn on_layout_change(&self, hotseat_bounds: Rect) {
        let mut inner = self.inner.borrow_mut();
        let vertical_bar = inner.host.borrow().device_profile().is_vertical_bar_layout;
        let shift_range = if vertical_bar {
            hotseat_bounds.bottom()
        } else {
            hotseat_bounds.top()
        };
        log::trace!("shift range {} -> {shift_range}", inner.model.shift_range());
        inner.model.set_shift_range(shift_range);
        let progress = inner.model.progress();
        inner.set_progress(progress);
    }
}

impl DragListener for AppsTransitionController {
    fn on_drag_start(&mut self, start: bool) {
        AppsTransitionController::on_drag_start(&*self, start);
    }

    fn on_drag(&mut self, displacement: f32, velocity: f32) -> bool {
        AppsTransitionController::on_drag(&*self, displacement, velocity)
    }

    fn on_drag_end(&mut self, velocity: f32, fling: bool) {
        AppsTransitionController::on_drag_end(&*self, velocity, fling);
    }
}

impl std::fmt::Debug for AppsTransitionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("AppsTransitionController")
            .field("progress", &inner.model.progress())
            .field("shift_range", &inner.model.shift_range())
            .field("detector", &inner.detector.state())
            .field("animating", &inner.current_animation.is_some())
            .finish()
    }
}
