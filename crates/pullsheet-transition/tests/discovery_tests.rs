use pullsheet_testing::{assert_approx_eq, SurfaceCall, TransitionTestRule};

fn min_apps_translation(calls: &[SurfaceCall]) -> f32 {
    calls
        .iter()
        .filter_map(|call| match call {
            SurfaceCall::AppsTranslation(translation) => Some(*translation),
            _ => None,
        })
        .fold(f32::INFINITY, f32::min)
}

#[test]
fn bounce_nudges_only_the_apps_surface_and_hotseat() {
    let mut rule = TransitionTestRule::portrait();

    rule.controller().show_discovery_bounce();
    assert!(rule.controller().is_discovery_running());
    assert!(rule.apps().visible);

    let frames = rule.run_animations();

    assert!(frames > 0);
    let lowest = min_apps_translation(&rule.calls());
    assert!(lowest < 950.0 && lowest >= 940.0 - 1e-3, "{lowest}");
    assert_eq!(rule.log().count("workspace_translation"), 0);
    assert_eq!(rule.log().count("caret"), 0);
    assert_eq!(rule.log().count("light_status_bar"), 0);
    assert!(rule.log().contains("hotseat_translation"));

    assert!(!rule.controller().is_discovery_running());
    assert_eq!(rule.controller().progress(), 1.0);
    assert!(!rule.apps().visible);
    assert!(rule.hotseat().visible);
    assert!(!rule.hotseat().background_transparent);
    assert_eq!(rule.apps().reset_count, 1);
}

#[test]
fn bounce_restores_full_fan_out_afterwards() {
    let mut rule = TransitionTestRule::portrait();
    rule.controller().show_discovery_bounce();
    rule.run_animations();
    rule.log().clear();

    rule.controller().set_progress(0.5);

    assert!(rule.log().contains("workspace_translation"));
    assert!(rule.log().contains("caret"));
}

#[test]
fn cancelling_the_bounce_snaps_back() {
    let mut rule = TransitionTestRule::portrait();
    rule.controller().show_discovery_bounce();
    rule.run_for(96);
    assert!(rule.controller().progress() < 1.0);

    rule.controller().cancel_discovery_animation();

    assert!(!rule.controller().is_discovery_running());
    assert!(!rule.has_pending_frames());
    assert_eq!(rule.controller().progress(), 1.0);
    assert!(!rule.apps().visible);
    assert_eq!(rule.apps().reset_count, 1);
    assert_eq!(rule.log().count("workspace_translation"), 0);
}

#[test]
fn a_second_bounce_replaces_the_first() {
    let mut rule = TransitionTestRule::portrait();
    rule.controller().show_discovery_bounce();
    rule.run_for(96);

    rule.controller().show_discovery_bounce();
    assert!(rule.controller().is_discovery_running());
    assert_eq!(rule.apps().reset_count, 1);

    rule.run_animations();
    assert_eq!(rule.apps().reset_count, 2);
    assert!(!rule.controller().is_discovery_running());
}

#[test]
fn drag_cancels_the_bounce() {
    let mut rule = TransitionTestRule::portrait();
    rule.controller().show_discovery_bounce();
    rule.run_for(96);
    rule.log().clear();

    rule.drag_from_hotseat(1040.0, 10.0);

    assert!(!rule.controller().is_discovery_running());
    assert_eq!(rule.apps().reset_count, 1);
    assert!(rule.apps().visible);
    assert!(rule.log().contains("workspace_translation"));
    assert_approx_eq(rule.controller().progress(), 0.998, 1e-5, "drag progress");
    assert_eq!(rule.run_animations(), 0);
}

#[test]
fn programmatic_settle_cancels_the_bounce() {
    use pullsheet_animation::AnimatorSet;

    let mut rule = TransitionTestRule::portrait();
    rule.controller().show_discovery_bounce();
    rule.run_for(96);

    let animation = AnimatorSet::new();
    rule.controller().animate_to_all_apps(Some(&animation), 300);
    animation.start(&rule.controller().frame_clock());

    assert!(!rule.controller().is_discovery_running());
    rule.run_animations();
    assert_eq!(rule.controller().progress(), 0.0);
    assert!(!rule.hotseat().visible);
}

#[test]
fn bounce_is_skipped_while_a_release_settles() {
    let mut rule = TransitionTestRule::portrait();
    rule.drag_from_hotseat(442.0, 20.0);
    rule.move_to(540.0, 442.0, 1000);
    rule.up(540.0, 442.0, 16);
    rule.advance_frame(16);

    rule.controller().show_discovery_bounce();

    assert!(!rule.controller().is_discovery_running());
    assert!(rule.controller().is_animating());
    rule.run_animations();
    assert_eq!(rule.controller().progress(), 0.0);
    assert!(rule.host().apps_visible);
    assert!(rule.apps().visible);
    assert_eq!(rule.apps().reset_count, 0);
}

#[test]
fn bounce_is_skipped_while_dragging() {
    let mut rule = TransitionTestRule::portrait();
    rule.drag_from_hotseat(1000.0, 10.0);

    rule.controller().show_discovery_bounce();

    assert!(!rule.controller().is_discovery_running());
    assert_eq!(rule.run_animations(), 0);
}

#[test]
fn bounce_is_skipped_while_a_programmatic_settle_runs() {
    use pullsheet_animation::AnimatorSet;

    let mut rule = TransitionTestRule::portrait();
    let animation = AnimatorSet::new();
    rule.controller().animate_to_all_apps(Some(&animation), 300);
    animation.start(&rule.controller().frame_clock());

    rule.controller().show_discovery_bounce();

    assert!(!rule.controller().is_discovery_running());
    rule.run_animations();
    assert_eq!(animation.state(), pullsheet_animation::AnimatorState::Finished);
    assert_eq!(rule.controller().progress(), 0.0);
}
