use super::*;

#[derive(Default)]
struct RecordingListener {
    events: Vec<DragEvent>,
}

impl DragListener for RecordingListener {
    fn on_drag_start(&mut self, start: bool) {
        self.events.push(DragEvent::Start { start });
    }

    fn on_drag(&mut self, displacement: f32, velocity: f32) -> bool {
        self.events.push(DragEvent::Drag {
            displacement,
            velocity,
        });
        true
    }

    fn on_drag_end(&mut self, velocity: f32, fling: bool) {
        self.events.push(DragEvent::End { velocity, fling });
    }
}

fn detector_for(directions: ScrollDirections) -> PullDetector {
    let mut detector = PullDetector::default();
    detector.set_detectable_scroll_conditions(directions, false);
    detector
}

fn displacements(events: &[DragEvent]) -> Vec<f32> {
    events
        .iter()
        .filter_map(|event| match event {
            DragEvent::Drag { displacement, .. } => Some(*displacement),
            _ => None,
        })
        .collect()
}

#[test]
fn scroll_directions_bitset() {
    assert!(ScrollDirections::BOTH.contains(ScrollDirections::UP));
    assert!(ScrollDirections::BOTH.contains(ScrollDirections::DOWN));
    assert!(!ScrollDirections::UP.contains(ScrollDirections::DOWN));
    assert!(!ScrollDirections::NONE.contains(ScrollDirections::NONE));
    assert_eq!(
        ScrollDirections::UP | ScrollDirections::DOWN,
        ScrollDirections::BOTH
    );
}

#[test]
fn movement_below_slop_stays_idle() {
    let mut detector = detector_for(ScrollDirections::UP);
    assert!(detector.on_touch_event(&PointerEvent::down(100.0, 1050.0, 0)).is_empty());
    let events = detector.on_touch_event(&PointerEvent::moved(100.0, 1043.0, 16));

    assert!(events.is_empty());
    assert!(detector.is_idle());
}

#[test]
fn upward_drag_starts_after_slop_without_jump() {
    let mut detector = detector_for(ScrollDirections::UP);
    let mut listener = RecordingListener::default();

    detector.feed(&PointerEvent::down(100.0, 1050.0, 0), &mut listener);
    detector.feed(&PointerEvent::moved(100.0, 1042.0, 16), &mut listener);
    detector.feed(&PointerEvent::moved(100.0, 942.0, 32), &mut listener);

    assert!(detector.is_dragging());
    assert_eq!(listener.events[0], DragEvent::Start { start: true });
    assert_eq!(displacements(&listener.events), vec![0.0, -100.0]);
}

#[test]
fn direction_not_detectable_is_ignored() {
    let mut detector = detector_for(ScrollDirections::UP);
    detector.on_touch_event(&PointerEvent::down(0.0, 500.0, 0));
    let events = detector.on_touch_event(&PointerEvent::moved(0.0, 560.0, 16));

    assert!(events.is_empty());
    assert!(detector.is_idle());
}

#[test]
fn mostly_horizontal_motion_is_rejected() {
    let mut detector = detector_for(ScrollDirections::BOTH);
    detector.on_touch_event(&PointerEvent::down(0.0, 500.0, 0));
    let events = detector.on_touch_event(&PointerEvent::moved(40.0, 470.0, 16));

    assert!(events.is_empty());
    assert!(detector.is_idle());
}

#[test]
fn unchanged_vertical_displacement_is_not_reported_twice() {
    let mut detector = detector_for(ScrollDirections::DOWN);
    detector.on_touch_event(&PointerEvent::down(0.0, 100.0, 0));
    detector.on_touch_event(&PointerEvent::moved(0.0, 130.0, 16));
    let events = detector.on_touch_event(&PointerEvent::moved(5.0, 130.0, 32));

    assert!(events.is_empty());
}

#[test]
fn release_reports_end_and_settles() {
    let mut detector = detector_for(ScrollDirections::UP);
    detector.on_touch_event(&PointerEvent::down(0.0, 1000.0, 0));
    detector.on_touch_event(&PointerEvent::moved(0.0, 950.0, 10));
    let events = detector.on_touch_event(&PointerEvent::up(0.0, 950.0, 20));

    match events.as_slice() {
        [DragEvent::End { velocity, fling }] => {
            assert_eq!(*velocity, -5.0);
            assert!(*fling);
        }
        other => panic!("unexpected events {other:?}"),
    }
    assert!(detector.is_settling());
    assert!(detector.is_dragging_or_settling());

    detector.finished_scrolling();
    assert!(detector.is_idle());
}

#[test]
fn slow_release_is_not_a_fling() {
    let mut detector = detector_for(ScrollDirections::UP);
    detector.on_touch_event(&PointerEvent::down(0.0, 1000.0, 0));
    detector.on_touch_event(&PointerEvent::moved(0.0, 990.0, 100));
    let events = detector.on_touch_event(&PointerEvent::up(0.0, 990.0, 110));

    assert_eq!(
        events.as_slice(),
        &[DragEvent::End {
            velocity: -0.1,
            fling: false
        }]
    );
}

#[test]
fn fling_threshold_is_inclusive() {
    let mut detector = detector_for(ScrollDirections::DOWN);
    detector.on_touch_event(&PointerEvent::down(0.0, 0.0, 0));
    detector.on_touch_event(&PointerEvent::moved(0.0, 16.0, 16));
    let events = detector.on_touch_event(&PointerEvent::cancel(0.0, 16.0, 16));

    assert_eq!(
        events.as_slice(),
        &[DragEvent::End {
            velocity: 1.0,
            fling: true
        }]
    );
}

#[test]
fn down_while_settling_with_ignore_slop_recatches_immediately() {
    let mut detector = detector_for(ScrollDirections::UP);
    detector.on_touch_event(&PointerEvent::down(0.0, 1000.0, 0));
    detector.on_touch_event(&PointerEvent::moved(0.0, 900.0, 16));
    detector.on_touch_event(&PointerEvent::up(0.0, 900.0, 32));
    assert!(detector.is_settling());

    detector.set_detectable_scroll_conditions(ScrollDirections::BOTH, true);
    let events = detector.on_touch_event(&PointerEvent::down(0.0, 600.0, 100));
    assert_eq!(events.as_slice(), &[DragEvent::Start { start: false }]);
    assert!(detector.is_dragging());

    // No slop is subtracted on the re-catch path.
    let events = detector.on_touch_event(&PointerEvent::moved(0.0, 603.0, 116));
    assert_eq!(displacements(&events), vec![3.0]);
}

#[test]
fn down_while_settling_without_ignore_slop_keeps_settling() {
    let mut detector = detector_for(ScrollDirections::UP);
    detector.on_touch_event(&PointerEvent::down(0.0, 1000.0, 0));
    detector.on_touch_event(&PointerEvent::moved(0.0, 900.0, 16));
    detector.on_touch_event(&PointerEvent::up(0.0, 900.0, 32));

    detector.set_detectable_scroll_conditions(ScrollDirections::DOWN, false);
    let events = detector.on_touch_event(&PointerEvent::down(0.0, 100.0, 100));

    assert!(events.is_empty());
    assert!(detector.is_settling());
}

#[test]
fn cancel_returns_to_idle_silently() {
    let mut detector = detector_for(ScrollDirections::UP);
    detector.on_touch_event(&PointerEvent::down(0.0, 1000.0, 0));
    detector.on_touch_event(&PointerEvent::moved(0.0, 900.0, 16));

    detector.cancel();

    assert!(detector.is_idle());
    assert!(detector
        .on_touch_event(&PointerEvent::up(0.0, 900.0, 32))
        .is_empty());
}

#[test]
fn down_discards_earlier_velocity() {
    let mut detector = detector_for(ScrollDirections::UP);
    detector.compute_velocity(40.0, 10);
    detector.compute_velocity(40.0, 26);
    assert!(detector.velocity() > 0.0);

    detector.on_touch_event(&PointerEvent::down(0.0, 1000.0, 100));
    assert_eq!(detector.velocity(), 0.0);
    detector.on_touch_event(&PointerEvent::moved(0.0, 960.0, 120));
    let events = detector.on_touch_event(&PointerEvent::up(0.0, 960.0, 136));

    assert_eq!(
        events.as_slice(),
        &[DragEvent::End {
            velocity: -2.0,
            fling: true
        }]
    );
}
