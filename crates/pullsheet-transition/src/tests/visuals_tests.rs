use super::*;
use crate::progress::ProgressModel;
use crate::surfaces::{DeviceProfile, TransitionEvent};
use pullsheet_ui_graphics::{EdgeInsets, Point};

#[derive(Default)]
struct Apps {
    writes: Vec<&'static str>,
    translation_y: f32,
    alpha: f32,
    color: Color,
}

impl AppsSurface for Apps {
    fn set_translation_y(&mut self, translation_y: f32) {
        self.writes.push("translation");
        self.translation_y = translation_y;
    }

    fn set_content_alpha(&mut self, alpha: f32) {
        self.writes.push("alpha");
        self.alpha = alpha;
    }

    fn set_reveal_color(&mut self, color: Color) {
        self.writes.push("color");
        self.color = color;
    }

    fn set_visible(&mut self, _visible: bool) {}

    fn reset(&mut self) {}

    fn should_container_scroll(&self, _position: Point) -> bool {
        true
    }
}

#[derive(Default)]
struct Desk {
    hotseat: Option<(f32, f32)>,
    workspace: Option<(f32, f32)>,
}

impl Workspace for Desk {
    fn set_hotseat_translation_and_alpha(&mut self, translation_y: f32, alpha: f32) {
        self.hotseat = Some((translation_y, alpha));
    }

    fn set_workspace_translation_and_alpha(&mut self, translation_y: f32, alpha: f32) {
        self.workspace = Some((translation_y, alpha));
    }
}

#[derive(Default)]
struct StatusBarHost {
    light_status_bar_writes: Vec<bool>,
}

impl Host for StatusBarHost {
    fn is_apps_visible(&self) -> bool {
        false
    }

    fn is_overview_mode(&self) -> bool {
        false
    }

    fn is_widgets_visible(&self) -> bool {
        false
    }

    fn device_profile(&self) -> DeviceProfile {
        DeviceProfile::portrait(2000.0)
    }

    fn insets(&self) -> EdgeInsets {
        EdgeInsets::default()
    }

    fn is_event_over_hotseat(&self, _position: Point) -> bool {
        false
    }

    fn is_event_over_page_indicator(&self, _position: Point) -> bool {
        false
    }

    fn show_apps_view(&mut self, _animated: bool, _update: bool, _focus: bool) {}

    fn show_workspace(&mut self, _animated: bool) {}

    fn try_and_update_predicted_apps(&mut self) {}

    fn set_light_status_bar(&mut self, enabled: bool) {
        self.light_status_bar_writes.push(enabled);
    }

    fn log_action_on_container(&mut self, _event: TransitionEvent) {}
}

fn frame_at(progress: f32) -> ProgressFrame {
    let mut model = ProgressModel::new(10.0, 0.0875);
    model.set_shift_range(1000.0);
    model.set_progress(progress)
}

fn binder() -> VisualBinder {
    let mut binder = VisualBinder::new(Color::WHITE, 0.125);
    binder.capture_hotseat_background(Color::BLACK);
    binder
}

#[test]
fn apps_writes_follow_translation_alpha_color_order() {
    let mut apps = Apps::default();
    binder().apply_apps(&frame_at(0.4), &mut apps);

    assert_eq!(apps.writes, vec!["translation", "alpha", "color"]);
    assert_eq!(apps.translation_y, 400.0);
    assert!((apps.alpha - 0.6).abs() < 1e-6);
    assert!((apps.color.r() - 0.6).abs() < 1e-6);
    assert_eq!(apps.color.a(), 1.0);
}

#[test]
fn reveal_color_is_hotseat_color_when_pulled_down() {
    assert_eq!(binder().reveal_color(&frame_at(1.0)), Color::BLACK);
    assert_eq!(binder().reveal_color(&frame_at(0.0)), Color::WHITE);
}

#[test]
fn hotseat_follows_apps_in_portrait_and_parallaxes_in_landscape() {
    let frame = frame_at(0.5);
    let mut desk = Desk::default();

    binder().apply_hotseat(&frame, false, &mut desk);
    assert_eq!(desk.hotseat, Some((-500.0, 0.25)));

    binder().apply_hotseat(&frame, true, &mut desk);
    assert_eq!(desk.hotseat, Some((-62.5, 0.25)));
}

#[test]
fn workspace_uses_parallax_and_accelerated_alpha() {
    let mut desk = Desk::default();
    binder().apply_workspace(&frame_at(0.8), &mut desk);

    let (translation, alpha) = desk.workspace.expect("workspace written");
    assert!((translation - (-25.0)).abs() < 1e-4);
    assert!((alpha - 0.64).abs() < 1e-6);
}

#[test]
fn light_status_bar_is_latched() {
    let mut binder = binder();
    binder.set_status_bar_height(60.0);
    let mut host = StatusBarHost::default();

    binder.update_light_status_bar(500.0, false, &mut host);
    binder.update_light_status_bar(20.0, false, &mut host);
    binder.update_light_status_bar(10.0, false, &mut host);
    binder.update_light_status_bar(30.0, false, &mut host);
    binder.update_light_status_bar(31.0, false, &mut host);

    assert_eq!(host.light_status_bar_writes, vec![true, false]);
    assert!(!binder.is_light_status_bar());
}

#[test]
fn landscape_never_touches_status_bar() {
    let mut binder = binder();
    binder.set_status_bar_height(60.0);
    let mut host = StatusBarHost::default();

    binder.update_light_status_bar(0.0, true, &mut host);

    assert!(host.light_status_bar_writes.is_empty());
}
