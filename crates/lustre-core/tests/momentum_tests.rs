// Host-side tests for the momentum strip: offset clamping, eased autoplay,
// drag velocity capture, inertia glides, and snap-to-nearest selection.

use lustre_core::{FrameOutcome, ItemBounds, MomentumStrip, STRIP_MAX_SPEED};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

fn strip(scroll_width: f32, viewport_width: f32) -> MomentumStrip {
    let mut s = MomentumStrip::new();
    s.set_metrics(scroll_width, viewport_width);
    s
}

#[test]
fn offset_is_always_clamped() {
    let mut s = strip(1000.0, 300.0); // max scroll 700

    // drag far past both ends
    s.begin_drag(0.0, 0.0);
    s.drag_move(-10_000.0, 10.0);
    assert!(approx(s.offset(), 700.0));
    s.drag_move(10_000.0, 20.0);
    assert!(approx(s.offset(), 0.0));
    s.end_drag(30.0);

    // wheel deltas of any magnitude
    s.sync_offset(0.0);
    s.wheel(1.0e6, false);
    assert!(approx(s.offset(), 700.0));
    s.wheel(-1.0e6, true);
    assert!(approx(s.offset(), 0.0));
}

#[test]
fn inertia_projection_is_clamped() {
    let mut s = strip(10_000.0, 300.0);
    s.sync_offset(5000.0);
    s.begin_drag(0.0, 0.0);
    // violent flick: v = 100/8 = 12.5 px/ms projects 2800 px, capped at 1200
    s.drag_move(100.0, 8.0);
    assert!(approx(s.offset(), 4900.0));
    s.end_drag(8.0);
    // run the glide to completion
    let mut outcome = FrameOutcome::Gliding;
    let mut t = 8.0;
    while outcome == FrameOutcome::Gliding {
        t += 16.0;
        outcome = s.frame(t);
    }
    assert_eq!(outcome, FrameOutcome::Settled { snap: true });
    assert!(approx(s.offset(), 4900.0 - 1200.0));
}

#[test]
fn autoplay_speed_eases_toward_max() {
    let mut s = strip(1000.0, 300.0);
    // first frame: speed = 0.45 + (0.9 - 0.45) * 0.06 = 0.477
    assert_eq!(s.frame(0.0), FrameOutcome::Autoplay);
    assert!(approx(s.offset(), 0.477));
    // speed keeps approaching 0.9 but never exceeds it
    let mut prev = s.offset();
    let mut prev_step = 0.477;
    for i in 1..200 {
        s.frame(i as f64 * 16.0);
        let step = s.offset() - prev;
        if s.offset() >= s.max_scroll() {
            break;
        }
        assert!(step >= prev_step - 1e-4);
        assert!(step <= STRIP_MAX_SPEED + 1e-4);
        prev = s.offset();
        prev_step = step;
    }
}

#[test]
fn autoplay_bounces_with_damped_speed() {
    let mut s = strip(1000.0, 300.0);
    s.sync_offset(699.9);
    assert_eq!(s.frame(0.0), FrameOutcome::Autoplay);
    // hit the right edge: clamp, reverse, damp
    assert!(approx(s.offset(), 700.0));
    s.frame(16.0);
    // next frame moves left with speed eased from 0.54
    let expected = 0.54 + (0.9 - 0.54) * 0.06;
    assert!(approx(s.offset(), 700.0 - expected));

    // and the left edge bounces back to forward motion
    s.sync_offset(0.2);
    s.frame(32.0);
    assert!(approx(s.offset(), 0.0));
    s.frame(48.0);
    assert!(s.offset() > 0.0);
}

#[test]
fn autoplay_requires_every_suppressor_clear() {
    let mut s = strip(1000.0, 300.0);
    s.set_paused(true);
    s.set_focus_within(true);
    assert_eq!(s.frame(0.0), FrameOutcome::Idle);
    s.set_paused(false);
    assert_eq!(s.frame(16.0), FrameOutcome::Idle); // focus still inside
    s.set_focus_within(false);
    assert_eq!(s.frame(32.0), FrameOutcome::Autoplay);

    s.begin_drag(0.0, 40.0);
    assert_eq!(s.frame(48.0), FrameOutcome::Idle); // drag suppresses
    s.end_drag(56.0);
}

#[test]
fn autoplay_resumes_after_a_drag_released_outside_the_strip() {
    // hover pauses, then a drag leaves the strip: the leave handler releases
    // the drag and clears the pause, so once the glide settles every
    // suppressor is down and autoplay runs again
    let mut s = strip(1000.0, 300.0);
    s.set_paused(true);
    s.begin_drag(200.0, 0.0);
    s.drag_move(180.0, 16.0);
    assert_eq!(s.frame(20.0), FrameOutcome::Idle);
    s.end_drag(32.0);
    s.set_paused(false);

    let mut t = 32.0;
    let mut outcome = s.frame(t);
    while outcome == FrameOutcome::Gliding {
        t += 16.0;
        outcome = s.frame(t);
    }
    assert!(matches!(outcome, FrameOutcome::Settled { .. }));
    assert_eq!(s.frame(t + 16.0), FrameOutcome::Autoplay);
}

#[test]
fn autoplay_needs_overflow() {
    let mut s = strip(300.0, 300.0);
    assert_eq!(s.frame(0.0), FrameOutcome::Idle);
    assert!(!s.wheel(100.0, false));
    assert!(approx(s.offset(), 0.0));
}

#[test]
fn drag_follows_the_pointer_one_to_one() {
    let mut s = strip(1000.0, 300.0);
    s.sync_offset(100.0);
    s.begin_drag(500.0, 0.0);
    s.drag_move(450.0, 16.0); // pointer moved 50 px left -> content scrolls right
    assert!(approx(s.offset(), 150.0));
    s.drag_move(560.0, 32.0);
    assert!(approx(s.offset(), 40.0));
}

#[test]
fn velocity_denominator_is_floored_at_eight_ms() {
    let mut s = strip(10_000.0, 300.0);
    s.sync_offset(5000.0);
    s.begin_drag(0.0, 0.0);
    // two samples 2 ms apart: dt is treated as 8 ms, so v = 10/8 px/ms,
    // travel = 1.25 * 16 * 14 = 280 px
    s.drag_move(10.0, 2.0);
    s.end_drag(2.0);
    let mut t = 2.0;
    loop {
        t += 16.0;
        if let FrameOutcome::Settled { .. } = s.frame(t) {
            break;
        }
    }
    assert!(approx(s.offset(), 4990.0 - 280.0));
}

#[test]
fn inertia_glide_eases_out_cubically() {
    let mut s = strip(10_000.0, 300.0);
    s.sync_offset(400.0);
    s.begin_drag(0.0, 0.0);
    s.drag_move(8.0, 8.0); // v = 1 px/ms -> travel = 224 px
    assert!(approx(s.offset(), 392.0));
    s.end_drag(10.0);

    // halfway through the 420 ms window: eased = 1 - 0.5^3 = 0.875
    s.frame(10.0 + 210.0);
    assert!(approx(s.offset(), (392.0 - 224.0 * 0.875_f32).round()));

    // completion lands exactly on the target and requests a snap
    assert_eq!(s.frame(10.0 + 420.0), FrameOutcome::Settled { snap: true });
    assert!(approx(s.offset(), 168.0));
}

#[test]
fn new_drag_cancels_an_inflight_glide() {
    let mut s = strip(10_000.0, 300.0);
    s.sync_offset(400.0);
    s.begin_drag(0.0, 0.0);
    s.drag_move(8.0, 8.0);
    s.end_drag(10.0);
    assert!(s.gliding());
    s.begin_drag(100.0, 50.0);
    assert!(!s.gliding());
    assert_eq!(s.frame(60.0), FrameOutcome::Idle);
}

#[test]
fn snap_selects_the_nearest_center() {
    // Child centers 50, 150, 250 with the viewport center at 160: index 1
    // (center 150) wins over index 2 (center 250).
    // viewport center = offset + 300/2; offset 10 puts it at 160
    let mut shifted = strip(600.0, 300.0);
    shifted.set_items(vec![
        ItemBounds {
            left: 25.0,
            width: 50.0,
        },
        ItemBounds {
            left: 125.0,
            width: 50.0,
        },
        ItemBounds {
            left: 225.0,
            width: 50.0,
        },
    ]);
    shifted.sync_offset(10.0);
    assert_eq!(shifted.nearest_index(), Some(1));

    // centering item 1: 125 - (300 - 50) / 2 = 0
    assert!(approx(shifted.snap_target(1).unwrap(), 0.0));
    // a far item clamps to the scrollable range
    assert!(shifted.snap_target(2).unwrap() <= shifted.max_scroll());
    assert_eq!(shifted.snap_target(9), None);
}

#[test]
fn nearest_index_on_empty_strip_is_none() {
    let s = strip(1000.0, 300.0);
    assert_eq!(s.nearest_index(), None);
}

#[test]
fn reduced_motion_halts_autoplay_and_collapses_glides() {
    let mut s = strip(10_000.0, 300.0);
    s.sync_offset(400.0);
    s.begin_drag(0.0, 0.0);
    s.drag_move(8.0, 8.0);
    s.end_drag(10.0);
    assert!(s.gliding());

    // toggled mid-flight: the very next frame applies the target instantly
    s.set_reduced_motion(true);
    assert_eq!(s.frame(26.0), FrameOutcome::Settled { snap: true });
    assert!(approx(s.offset(), 168.0));

    // and autoplay stays down
    assert_eq!(s.frame(42.0), FrameOutcome::Idle);

    // fallback snap animation applies instantly too
    s.start_glide(500.0, 50.0);
    assert!(!s.gliding());
    assert!(approx(s.offset(), 500.0));
}

#[test]
fn fallback_glide_reaches_the_target_without_a_snap_request() {
    let mut s = strip(1000.0, 300.0);
    s.set_paused(true); // keep autoplay out of the way
    s.start_glide(350.0, 0.0);
    let mut outcome = s.frame(16.0);
    let mut t = 16.0;
    while outcome == FrameOutcome::Gliding {
        t += 16.0;
        outcome = s.frame(t);
    }
    assert_eq!(outcome, FrameOutcome::Settled { snap: false });
    assert!(approx(s.offset(), 350.0));
}

#[test]
fn shrinking_content_reclamps_the_offset() {
    let mut s = strip(1000.0, 300.0);
    s.sync_offset(650.0);
    s.set_metrics(500.0, 300.0);
    assert!(approx(s.offset(), 200.0));
}

#[test]
fn wheel_shift_multiplier() {
    let mut s = strip(1000.0, 300.0);
    assert!(s.wheel(100.0, false));
    assert!(approx(s.offset(), 100.0));
    assert!(s.wheel(100.0, true));
    assert!(approx(s.offset(), 280.0));
}
