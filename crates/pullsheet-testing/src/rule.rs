use crate::fakes::{
    CallLog, FakeAppsSurface, FakeCaret, FakeHost, FakeHotseat, FakeWorkspace, ManualClock,
    SurfaceCall,
};
use pullsheet_core::{Clock, Runtime};
use pullsheet_foundation::PointerEvent;
use pullsheet_transition::{
    AppsTransitionController, ConfigError, DeviceProfile, TransitionConfig,
};
use pullsheet_ui_graphics::{Color, EdgeInsets, Rect};
use std::cell::{RefCell, RefMut};
use std::rc::Rc;

/// Frame interval used by [`TransitionTestRule::run_animations`].
pub const FRAME_MILLIS: u64 = 16;

const START_MILLIS: u64 = 10_000;
const MAX_FRAMES: usize = 10_000;

pub const PORTRAIT_HEIGHT: f32 = 2000.0;
pub const LANDSCAPE_HEIGHT: f32 = 1080.0;
pub const STATUS_BAR_HEIGHT: f32 = 60.0;
pub const HOTSEAT_COLOR: Color = Color(0.2, 0.2, 0.2, 0.5);

/// Headless harness around an [`AppsTransitionController`].
///
/// Owns a frame runtime, a manual clock and recording fakes of every
/// collaborator. The portrait layout puts the hotseat top at y = 1000, so
/// the shift range is 1000 px; the status bar is 60 px tall.
///
/// Pointer samples are routed the way a view hierarchy routes them: the
/// controller sees `on_intercept_touch_event` until it claims the gesture and
/// `on_touch_event` afterwards.
pub struct TransitionTestRule {
    runtime: Runtime,
    clock: Rc<ManualClock>,
    log: CallLog,
    host: Rc<RefCell<FakeHost>>,
    apps: Rc<RefCell<FakeAppsSurface>>,
    hotseat: Rc<RefCell<FakeHotseat>>,
    workspace: Rc<RefCell<FakeWorkspace>>,
    caret: Rc<RefCell<FakeCaret>>,
    controller: AppsTransitionController,
    claimed: bool,
}

impl TransitionTestRule {
    pub fn portrait() -> Self {
        Self::with_config(false, TransitionConfig::default()).expect("default config is valid")
    }

    /// Vertical-bar layout: the hotseat is a column on the right edge whose
    /// bottom sits at y = 1000.
    pub fn landscape() -> Self {
        Self::with_config(true, TransitionConfig::default()).expect("default config is valid")
    }

    pub fn with_config(vertical_bar: bool, config: TransitionConfig) -> Result<Self, ConfigError> {
        let runtime = Runtime::default();
        let clock = Rc::new(ManualClock::new(START_MILLIS));
        let log = CallLog::new();

        let (profile, hotseat_bounds, page_indicator_bounds) = if vertical_bar {
            (
                DeviceProfile::landscape(LANDSCAPE_HEIGHT),
                Rect::from_ltrb(1800.0, 0.0, 1920.0, 1000.0),
                Rect::default(),
            )
        } else {
            (
                DeviceProfile::portrait(PORTRAIT_HEIGHT),
                Rect::from_ltrb(0.0, 1000.0, 1080.0, 1200.0),
                Rect::from_ltrb(0.0, 950.0, 1080.0, 1000.0),
            )
        };

        let mut host = FakeHost::new(log.clone(), profile);
        host.insets = EdgeInsets::from_components(0.0, STATUS_BAR_HEIGHT, 0.0, 0.0);
        host.hotseat_bounds = hotseat_bounds;
        host.page_indicator_bounds = page_indicator_bounds;
        let host = Rc::new(RefCell::new(host));

        let apps = Rc::new(RefCell::new(FakeAppsSurface::new(log.clone())));
        let hotseat = Rc::new(RefCell::new(FakeHotseat::new(log.clone(), HOTSEAT_COLOR)));
        let workspace = Rc::new(RefCell::new(FakeWorkspace::new(log.clone())));
        let caret = Rc::new(RefCell::new(FakeCaret::new(log.clone())));

        let controller =
            AppsTransitionController::try_new(host.clone(), runtime.frame_clock(), config)?
                .with_clock(clock.clone());
        controller.setup_views(apps.clone(), hotseat.clone(), workspace.clone(), caret.clone());
        controller.on_layout_change(hotseat_bounds);
        log.clear();

        Ok(Self {
            runtime,
            clock,
            log,
            host,
            apps,
            hotseat,
            workspace,
            caret,
            controller,
            claimed: false,
        })
    }

    pub fn controller(&self) -> &AppsTransitionController {
        &self.controller
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn host(&self) -> RefMut<'_, FakeHost> {
        self.host.borrow_mut()
    }

    pub fn apps(&self) -> RefMut<'_, FakeAppsSurface> {
        self.apps.borrow_mut()
    }

    pub fn hotseat(&self) -> RefMut<'_, FakeHotseat> {
        self.hotseat.borrow_mut()
    }

    pub fn workspace(&self) -> RefMut<'_, FakeWorkspace> {
        self.workspace.borrow_mut()
    }

    pub fn caret(&self) -> RefMut<'_, FakeCaret> {
        self.caret.borrow_mut()
    }

    pub fn log(&self) -> &CallLog {
        &self.log
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.log.calls()
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    /// Whether the controller owns the current gesture.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Routes one pointer sample and returns whether the controller owns the
    /// gesture afterwards.
    pub fn dispatch(&mut self, event: PointerEvent) -> bool {
        if event.is_down() {
            self.claimed = false;
        }
        if self.claimed {
            self.controller.on_touch_event(&event);
        } else {
            self.claimed = self.controller.on_intercept_touch_event(&event);
        }
        self.claimed
    }

    pub fn down(&mut self, x: f32, y: f32) -> bool {
        let event = PointerEvent::down(x, y, self.clock.now_millis());
        self.dispatch(event)
    }

    /// Moves the pointer `after_millis` after the previous sample.
    pub fn move_to(&mut self, x: f32, y: f32, after_millis: u64) -> bool {
        let now = self.clock.advance(after_millis);
        self.dispatch(PointerEvent::moved(x, y, now))
    }

    pub fn up(&mut self, x: f32, y: f32, after_millis: u64) -> bool {
        let now = self.clock.advance(after_millis);
        self.dispatch(PointerEvent::up(x, y, now))
    }

    /// Advances the clock and drains the frame callbacks due at that time.
    pub fn advance_frame(&mut self, millis: u64) {
        let now = self.clock.advance(millis);
        self.runtime.handle().drain_frame_callbacks(now * 1_000_000);
    }

    pub fn has_pending_frames(&self) -> bool {
        self.runtime.handle().has_frame_callbacks()
    }

    /// Steps frames of [`FRAME_MILLIS`] until no frame callback is pending and
    /// returns the number of frames run.
    pub fn run_animations(&mut self) -> usize {
        let mut frames = 0;
        while self.has_pending_frames() {
            assert!(frames < MAX_FRAMES, "animations did not settle");
            self.advance_frame(FRAME_MILLIS);
            frames += 1;
        }
        frames
    }

    /// Runs frames for at most `millis` of animation time.
    pub fn run_for(&mut self, millis: u64) {
        let mut elapsed = 0;
        while elapsed < millis && self.has_pending_frames() {
            self.advance_frame(FRAME_MILLIS);
            elapsed += FRAME_MILLIS;
        }
    }

    /// Drag from the hotseat to `target_y` in 16 ms steps of `step` px and
    /// keep the pointer down.
    pub fn drag_from_hotseat(&mut self, target_y: f32, step: f32) {
        let x = 540.0;
        let mut y = 1050.0;
        self.down(x, y);
        while (y - target_y).abs() > f32::EPSILON {
            y = if y > target_y {
                (y - step).max(target_y)
            } else {
                (y + step).min(target_y)
            };
            self.move_to(x, y, FRAME_MILLIS);
        }
    }
}

impl Default for TransitionTestRule {
    fn default() -> Self {
        Self::portrait()
    }
}
