// Host-side tests for the frame-clock tween engine.

use droplet_core::{Completion, Ease, Repeat, Tween, TweenStatus};
use glam::Vec3;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn eases_hit_endpoints() {
    for ease in [Ease::Linear, Ease::QuadOut, Ease::SineInOut] {
        assert!(approx(ease.apply(0.0), 0.0), "{ease:?} at 0");
        assert!(approx(ease.apply(1.0), 1.0), "{ease:?} at 1");
        assert!(approx(ease.apply(-3.0), 0.0), "{ease:?} clamps below");
        assert!(approx(ease.apply(4.0), 1.0), "{ease:?} clamps above");
    }
}

#[test]
fn eases_are_monotonic() {
    for ease in [Ease::Linear, Ease::QuadOut, Ease::SineInOut] {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev, "{ease:?} decreased at step {i}");
            prev = v;
        }
    }
}

#[test]
fn sine_in_out_is_symmetric() {
    for i in 0..=50 {
        let t = i as f32 / 100.0;
        let lo = Ease::SineInOut.apply(t);
        let hi = Ease::SineInOut.apply(1.0 - t);
        assert!(approx(lo + hi, 1.0), "asymmetric at {t}");
    }
}

#[test]
fn quad_out_decelerates() {
    assert!(Ease::QuadOut.apply(0.5) > 0.5);
    assert!(approx(Ease::QuadOut.apply(0.5), 0.75));
}

#[test]
fn one_shot_tween_completes_once_at_target() {
    let mut tw = Tween::new(0.0f32, 10.0, 1.0).ease(Ease::Linear);
    assert_eq!(tw.advance(0.25), TweenStatus::Running);
    assert!(approx(tw.value(), 2.5));
    assert_eq!(tw.advance(0.5), TweenStatus::Running);
    assert!(approx(tw.value(), 7.5));
    assert_eq!(tw.advance(0.5), TweenStatus::Completed(None));
    assert!(tw.is_finished());
    assert_eq!(tw.value(), 10.0);
    assert_eq!(tw.advance(1.0), TweenStatus::Idle);
    assert_eq!(tw.value(), 10.0);
}

#[test]
fn yoyo_reverses_on_odd_legs() {
    let mut tw = Tween::new(0.0f32, 1.0, 1.0)
        .ease(Ease::Linear)
        .yoyo(true)
        .repeat(Repeat::Count(3));
    assert_eq!(tw.total_duration(), Some(4.0));

    tw.advance(0.5);
    assert!(approx(tw.value(), 0.5));
    tw.advance(0.5);
    assert!(approx(tw.value(), 1.0), "peak after first leg");
    tw.advance(0.25);
    assert!(approx(tw.value(), 0.75), "second leg plays backwards");
    tw.advance(0.75);
    assert!(approx(tw.value(), 0.0), "back at start after two legs");
    tw.advance(0.5);
    assert!(approx(tw.value(), 0.5), "third leg plays forwards");
}

#[test]
fn yoyo_with_odd_repeat_rests_at_start() {
    let from = Vec3::splat(0.5);
    let to = Vec3::splat(0.6);
    let mut tw = Tween::new(from, to, 0.5).yoyo(true).repeat(Repeat::Count(3));
    let mut completions = 0;
    for _ in 0..200 {
        if let TweenStatus::Completed(_) = tw.advance(1.0 / 60.0) {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(tw.value(), from, "even number of legs ends where it began");
}

#[test]
fn non_yoyo_repeat_rests_at_target() {
    let mut tw = Tween::new(1.0f32, 2.0, 0.2).repeat(Repeat::Count(2));
    tw.advance(10.0);
    assert!(tw.is_finished());
    assert_eq!(tw.value(), 2.0);
}

#[test]
fn completion_tag_is_reported() {
    let tag = Completion::MoodFinished { generation: 7 };
    let mut tw = Tween::new(0.0f32, 1.0, 0.1).on_complete(tag);
    assert_eq!(tw.completion(), Some(tag));
    assert_eq!(tw.advance(0.05), TweenStatus::Running);
    assert_eq!(tw.advance(0.05), TweenStatus::Completed(Some(tag)));
}

#[test]
fn forever_tween_never_completes_and_stays_periodic() {
    let mut tw = Tween::new(0.0f32, 0.05, 0.5)
        .repeat(Repeat::Forever)
        .yoyo(true)
        .ease(Ease::SineInOut);
    assert_eq!(tw.total_duration(), None);
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for _ in 0..100_000 {
        assert_eq!(tw.advance(1.0 / 60.0), TweenStatus::Running);
        let v = tw.value();
        min = min.min(v);
        max = max.max(v);
    }
    assert!(!tw.is_finished());
    assert!(min >= 0.0 && max <= 0.05 + 1e-6, "range [{min}, {max}]");
    assert!(max > 0.049, "should reach near the top, got {max}");

    // After whole cycles the value repeats.
    let mut a = Tween::new(0.0f32, 0.05, 0.5)
        .repeat(Repeat::Forever)
        .yoyo(true)
        .ease(Ease::SineInOut);
    a.advance(0.3);
    let before = a.value();
    a.advance(1.0);
    assert!(approx(a.value(), before));
}

#[test]
fn zero_duration_finishes_immediately() {
    let mut tw = Tween::new(Vec3::ZERO, Vec3::ONE, 0.0);
    assert_eq!(tw.advance(0.0), TweenStatus::Completed(None));
    assert_eq!(tw.value(), Vec3::ONE);
}

#[test]
fn negative_dt_does_not_rewind() {
    let mut tw = Tween::new(0.0f32, 1.0, 1.0).ease(Ease::Linear);
    tw.advance(0.5);
    tw.advance(-0.4);
    assert!(approx(tw.value(), 0.5));
}
