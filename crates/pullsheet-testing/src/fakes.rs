//! Recording fakes of the controller's collaborators.
//!
//! Every fake appends to a shared [`CallLog`] so tests can check the order
//! of writes across surfaces, and also keeps its latest state for direct
//! assertions.

use pullsheet_core::Clock;
use pullsheet_transition::{
    AppsSurface, CaretController, DeviceProfile, Host, Hotseat, TransitionEvent, Workspace,
};
use pullsheet_ui_graphics::{Color, EdgeInsets, Point, Rect};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One collaborator call, in the order the controller made it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCall {
    AppsTranslation(f32),
    AppsAlpha(f32),
    AppsRevealColor(Color),
    AppsVisible(bool),
    AppsReset,
    HotseatVisible(bool),
    HotseatBackgroundTransparent(bool),
    HotseatTranslation { translation_y: f32, alpha: f32 },
    WorkspaceTranslation { translation_y: f32, alpha: f32 },
    CaretDragStart,
    Caret { progress: f32, velocity: f32, dragging: bool },
    LightStatusBar(bool),
    ShowAppsView,
    ShowWorkspace,
    UpdatePredictedApps,
    Telemetry(TransitionEvent),
}

impl SurfaceCall {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceCall::AppsTranslation(_) => "apps_translation",
            SurfaceCall::AppsAlpha(_) => "apps_alpha",
            SurfaceCall::AppsRevealColor(_) => "apps_color",
            SurfaceCall::AppsVisible(_) => "apps_visible",
            SurfaceCall::AppsReset => "apps_reset",
            SurfaceCall::HotseatVisible(_) => "hotseat_visible",
            SurfaceCall::HotseatBackgroundTransparent(_) => "hotseat_background",
            SurfaceCall::HotseatTranslation { .. } => "hotseat_translation",
            SurfaceCall::WorkspaceTranslation { .. } => "workspace_translation",
            SurfaceCall::CaretDragStart => "caret_drag_start",
            SurfaceCall::Caret { .. } => "caret",
            SurfaceCall::LightStatusBar(_) => "light_status_bar",
            SurfaceCall::ShowAppsView => "show_apps_view",
            SurfaceCall::ShowWorkspace => "show_workspace",
            SurfaceCall::UpdatePredictedApps => "update_predicted_apps",
            SurfaceCall::Telemetry(_) => "telemetry",
        }
    }
}

/// Shared, ordered record of collaborator calls.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Rc<RefCell<Vec<SurfaceCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| call.name() == name)
            .count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.count(name) > 0
    }
}

pub struct FakeHost {
    log: CallLog,
    pub apps_visible: bool,
    pub overview_mode: bool,
    pub widgets_visible: bool,
    pub profile: DeviceProfile,
    pub insets: EdgeInsets,
    pub hotseat_bounds: Rect,
    pub page_indicator_bounds: Rect,
    pub light_status_bar: Option<bool>,
    pub telemetry: Vec<TransitionEvent>,
}

impl FakeHost {
    pub fn new(log: CallLog, profile: DeviceProfile) -> Self {
        Self {
            log,
            apps_visible: false,
            overview_mode: false,
            widgets_visible: false,
            profile,
            insets: EdgeInsets::default(),
            hotseat_bounds: Rect::default(),
            page_indicator_bounds: Rect::default(),
            light_status_bar: None,
            telemetry: Vec::new(),
        }
    }
}

impl Host for FakeHost {
    fn is_apps_visible(&self) -> bool {
        self.apps_visible
    }

    fn is_overview_mode(&self) -> bool {
        self.overview_mode
    }

    fn is_widgets_visible(&self) -> bool {
        self.widgets_visible
    }

    fn device_profile(&self) -> DeviceProfile {
        self.profile
    }

    fn insets(&self) -> EdgeInsets {
        self.insets
    }

    fn is_event_over_hotseat(&self, position: Point) -> bool {
        self.hotseat_bounds.contains_point(position)
    }

    fn is_event_over_page_indicator(&self, position: Point) -> bool {
        self.page_indicator_bounds.contains_point(position)
    }

    fn show_apps_view(&mut self, _animated: bool, _update_predicted_apps: bool, _focus: bool) {
        self.log.record(SurfaceCall::ShowAppsView);
        self.apps_visible = true;
    }

    fn show_workspace(&mut self, _animated: bool) {
        self.log.record(SurfaceCall::ShowWorkspace);
        self.apps_visible = false;
    }

    fn try_and_update_predicted_apps(&mut self) {
        self.log.record(SurfaceCall::UpdatePredictedApps);
    }

    fn set_light_status_bar(&mut self, enabled: bool) {
        self.log.record(SurfaceCall::LightStatusBar(enabled));
        self.light_status_bar = Some(enabled);
    }

    fn log_action_on_container(&mut self, event: TransitionEvent) {
        self.log.record(SurfaceCall::Telemetry(event));
        self.telemetry.push(event);
    }
}

pub struct FakeAppsSurface {
    log: CallLog,
    pub translation_y: f32,
    pub content_alpha: f32,
    pub reveal_color: Color,
    pub visible: bool,
    pub reset_count: usize,
    /// Answer to `should_container_scroll`; `false` means the list inside
    /// can scroll at that point.
    pub container_scrolls: bool,
}

impl FakeAppsSurface {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            translation_y: 0.0,
            content_alpha: 0.0,
            reveal_color: Color::TRANSPARENT,
            visible: false,
            reset_count: 0,
            container_scrolls: true,
        }
    }
}

impl AppsSurface for FakeAppsSurface {
    fn set_translation_y(&mut self, translation_y: f32) {
        self.log.record(SurfaceCall::AppsTranslation(translation_y));
        self.translation_y = translation_y;
    }

    fn set_content_alpha(&mut self, alpha: f32) {
        self.log.record(SurfaceCall::AppsAlpha(alpha));
        self.content_alpha = alpha;
    }

    fn set_reveal_color(&mut self, color: Color) {
        self.log.record(SurfaceCall::AppsRevealColor(color));
        self.reveal_color = color;
    }

    fn set_visible(&mut self, visible: bool) {
        self.log.record(SurfaceCall::AppsVisible(visible));
        self.visible = visible;
    }

    fn reset(&mut self) {
        self.log.record(SurfaceCall::AppsReset);
        self.reset_count += 1;
    }

    fn should_container_scroll(&self, _position: Point) -> bool {
        self.container_scrolls
    }
}

pub struct FakeHotseat {
    log: CallLog,
    pub visible: bool,
    pub background_color: Color,
    pub background_transparent: bool,
}

impl FakeHotseat {
    pub fn new(log: CallLog, background_color: Color) -> Self {
        Self {
            log,
            visible: true,
            background_color,
            background_transparent: false,
        }
    }
}

impl Hotseat for FakeHotseat {
    fn set_visible(&mut self, visible: bool) {
        self.log.record(SurfaceCall::HotseatVisible(visible));
        self.visible = visible;
    }

    fn background_color(&self) -> Color {
        self.background_color
    }

    fn set_background_transparent(&mut self, transparent: bool) {
        self.log
            .record(SurfaceCall::HotseatBackgroundTransparent(transparent));
        self.background_transparent = transparent;
    }
}

pub struct FakeWorkspace {
    log: CallLog,
    pub hotseat_translation: Option<(f32, f32)>,
    pub workspace_translation: Option<(f32, f32)>,
}

impl FakeWorkspace {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            hotseat_translation: None,
            workspace_translation: None,
        }
    }
}

impl Workspace for FakeWorkspace {
    fn set_hotseat_translation_and_alpha(&mut self, translation_y: f32, alpha: f32) {
        self.log.record(SurfaceCall::HotseatTranslation {
            translation_y,
            alpha,
        });
        self.hotseat_translation = Some((translation_y, alpha));
    }

    fn set_workspace_translation_and_alpha(&mut self, translation_y: f32, alpha: f32) {
        self.log.record(SurfaceCall::WorkspaceTranslation {
            translation_y,
            alpha,
        });
        self.workspace_translation = Some((translation_y, alpha));
    }
}

pub struct FakeCaret {
    log: CallLog,
    pub drag_starts: usize,
    pub last_update: Option<(f32, f32, bool)>,
}

impl FakeCaret {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            drag_starts: 0,
            last_update: None,
        }
    }
}

impl CaretController for FakeCaret {
    fn on_drag_start(&mut self) {
        self.log.record(SurfaceCall::CaretDragStart);
        self.drag_starts += 1;
    }

    fn update_caret(&mut self, progress: f32, velocity: f32, dragging: bool) {
        self.log.record(SurfaceCall::Caret {
            progress,
            velocity,
            dragging,
        });
        self.last_update = Some((progress, velocity, dragging));
    }
}

/// Wall clock under test control.
#[derive(Default)]
pub struct ManualClock {
    now_millis: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now_millis: Cell::new(start_millis),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now_millis.set(millis);
    }

    pub fn advance(&self, millis: u64) -> u64 {
        let now = self.now_millis.get() + millis;
        self.now_millis.set(now);
        now
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now_millis.get()
    }
}
