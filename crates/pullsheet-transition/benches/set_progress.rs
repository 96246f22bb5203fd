use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pullsheet_testing::TransitionTestRule;

fn set_progress_fan_out(c: &mut Criterion) {
    let mut rule = TransitionTestRule::portrait();
    rule.drag_from_hotseat(1040.0, 10.0);

    let mut progress = 0.0f32;
    c.bench_function("set_progress_fan_out", |b| {
        b.iter(|| {
            progress = (progress + 0.01) % 1.0;
            rule.controller().set_progress(black_box(progress));
            rule.log().clear();
        });
    });
}

fn drag_gesture(c: &mut Criterion) {
    c.bench_function("drag_gesture_from_hotseat", |b| {
        b.iter(|| {
            let mut rule = TransitionTestRule::portrait();
            rule.drag_from_hotseat(black_box(450.0), 20.0);
            rule.up(540.0, 450.0, 16);
            rule.run_animations();
        });
    });
}

criterion_group!(benches, set_progress_fan_out, drag_gesture);
criterion_main!(benches);
