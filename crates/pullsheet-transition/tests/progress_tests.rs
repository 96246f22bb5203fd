use pullsheet_animation::AnimatorSet;
use pullsheet_testing::{assert_approx_eq, SurfaceCall, TransitionTestRule};
use pullsheet_ui_graphics::Rect;

#[test]
fn set_progress_translates_apps_by_progress_times_range() {
    let rule = TransitionTestRule::portrait();

    for progress in [0.0, 0.25, 0.37, 0.5, 1.0] {
        rule.controller().set_progress(progress);
        assert_approx_eq(
            rule.apps().translation_y,
            progress * 1000.0,
            1e-3,
            "apps translation",
        );
        assert_approx_eq(
            rule.controller().translation_y(),
            progress * 1000.0,
            1e-3,
            "model translation",
        );
    }
}

#[test]
fn fan_out_order_is_fixed() {
    let mut rule = TransitionTestRule::portrait();
    rule.drag_from_hotseat(1030.0, 10.0);
    rule.log().clear();

    rule.controller().set_progress(0.02);

    let names: Vec<&str> = rule.calls().iter().map(SurfaceCall::name).collect();
    assert_eq!(
        names,
        vec![
            "apps_translation",
            "apps_alpha",
            "apps_color",
            "hotseat_translation",
            "workspace_translation",
            "caret",
            "light_status_bar",
        ]
    );
}

#[test]
fn out_of_range_progress_is_accepted() {
    let rule = TransitionTestRule::portrait();

    rule.controller().set_progress(1.2);

    assert_eq!(rule.controller().progress(), 1.2);
    assert_approx_eq(rule.apps().translation_y, 1200.0, 1e-3, "translation");
    assert_eq!(rule.apps().content_alpha, 0.0);
}

#[test]
fn portrait_hotseat_follows_apps_and_workspace_parallaxes() {
    let rule = TransitionTestRule::portrait();

    rule.controller().set_progress(0.5);

    let (hotseat_y, hotseat_alpha) = rule.workspace().hotseat_translation.expect("hotseat");
    let (workspace_y, workspace_alpha) =
        rule.workspace().workspace_translation.expect("workspace");
    assert_approx_eq(hotseat_y, -500.0, 1e-3, "hotseat translation");
    assert_approx_eq(workspace_y, -62.5, 1e-3, "workspace translation");
    assert_approx_eq(hotseat_alpha, 0.25, 1e-6, "hotseat alpha");
    assert_approx_eq(workspace_alpha, 0.25, 1e-6, "workspace alpha");
    assert_approx_eq(rule.apps().content_alpha, 0.5, 1e-6, "apps alpha");
}

#[test]
fn landscape_hotseat_parallaxes_and_status_bar_is_untouched() {
    let mut rule = TransitionTestRule::landscape();

    rule.down(900.0, 1070.0);
    rule.move_to(900.0, 1060.0, 16);
    for step in 1..=11 {
        rule.move_to(900.0, 1060.0 - step as f32 * 99.0, 16);
    }

    assert_approx_eq(rule.controller().progress(), 0.0, 1e-6, "fully pulled up");
    let (hotseat_y, _) = rule.workspace().hotseat_translation.expect("hotseat");
    assert_approx_eq(hotseat_y, -125.0, 1e-3, "parallax hotseat");
    assert_eq!(rule.log().count("light_status_bar"), 0);
    assert_eq!(rule.host().light_status_bar, None);
}

#[test]
fn light_status_bar_follows_the_top_of_the_apps_surface() {
    let mut rule = TransitionTestRule::portrait();
    rule.drag_from_hotseat(1040.0, 10.0);
    rule.log().clear();

    rule.controller().set_progress(0.5);
    rule.controller().set_progress(0.03);
    rule.controller().set_progress(0.01);
    rule.controller().set_progress(0.2);

    let writes: Vec<bool> = rule
        .calls()
        .into_iter()
        .filter_map(|call| match call {
            SurfaceCall::LightStatusBar(enabled) => Some(enabled),
            _ => None,
        })
        .collect();
    assert_eq!(writes, vec![true, false]);
}

#[test]
fn layout_change_rescales_translation() {
    let rule = TransitionTestRule::portrait();
    rule.controller().set_progress(0.3);

    rule.controller()
        .on_layout_change(Rect::from_ltrb(0.0, 800.0, 1080.0, 1000.0));

    assert_eq!(rule.controller().shift_range(), 800.0);
    assert_approx_eq(rule.controller().progress(), 0.3, 1e-6, "progress");
    assert_approx_eq(rule.apps().translation_y, 240.0, 1e-3, "translation");
}

#[test]
fn landscape_layout_uses_hotseat_bottom() {
    let rule = TransitionTestRule::landscape();

    rule.controller()
        .on_layout_change(Rect::from_ltrb(1800.0, 40.0, 1920.0, 900.0));

    assert_eq!(rule.controller().shift_range(), 900.0);
}

#[test]
fn layout_change_keeps_a_running_settle() {
    let mut rule = TransitionTestRule::portrait();
    let animation = AnimatorSet::new();
    rule.controller().animate_to_all_apps(Some(&animation), 400);
    animation.start(&rule.controller().frame_clock());
    rule.advance_frame(16);
    rule.advance_frame(16);

    rule.controller()
        .on_layout_change(Rect::from_ltrb(0.0, 900.0, 1080.0, 1100.0));

    assert!(animation.is_running());
    rule.run_animations();
    assert_eq!(rule.controller().progress(), 0.0);
    assert_eq!(rule.apps().translation_y, 0.0);
    assert!(!rule.hotseat().visible);
}

#[test]
fn writes_before_views_are_bound_only_touch_the_model() {
    use pullsheet_core::Runtime;
    use pullsheet_testing::{CallLog, FakeHost};
    use pullsheet_transition::{AppsTransitionController, DeviceProfile};
    use std::cell::RefCell;
    use std::rc::Rc;

    let runtime = Runtime::default();
    let log = CallLog::new();
    let host = Rc::new(RefCell::new(FakeHost::new(
        log.clone(),
        DeviceProfile::portrait(2000.0),
    )));
    let controller = AppsTransitionController::new(host, runtime.frame_clock());

    controller.set_progress(0.5);
    controller.on_drag_start(true);
    assert!(!controller.on_drag(-100.0, -1.0));
    controller.on_drag_end(-3.0, true);
    controller.show_discovery_bounce();

    assert_eq!(controller.progress(), 0.5);
    assert_eq!(controller.shift_range(), 10.0);
    assert!(controller.current_animation().is_none());
    assert!(log.calls().is_empty());
}
