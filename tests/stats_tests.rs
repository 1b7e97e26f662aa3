// Host-side tests for the frame statistics window.
// The web crate is wasm-only, so the pure module is included directly.

#![allow(dead_code)]
mod stats {
    include!("../src/stats.rs");
}

use stats::*;

#[test]
fn no_report_before_interval() {
    let mut s = FrameStats::default();
    for _ in 0..59 {
        assert!(s.record(1.0 / 60.0, false, 1.0).is_none());
    }
}

#[test]
fn reports_fps_and_resets() {
    let mut s = FrameStats::default();
    let mut report = None;
    for i in 0..100 {
        report = s.record(0.02, i == 10 || i == 20, 1.0);
        if report.is_some() {
            break;
        }
    }
    let r = report.expect("a report after one second of frames");
    assert!((r.fps - 50.0).abs() < 1.0, "fps was {}", r.fps);
    assert_eq!(r.streaks_spawned, 2);

    // new window starts empty
    assert!(s.record(0.02, false, 1.0).is_none());
}

#[test]
fn negative_dt_is_ignored() {
    let mut s = FrameStats::default();
    assert!(s.record(-5.0, false, 0.5).is_none());
    let r = s.record(0.5, false, 0.5).expect("report");
    assert_eq!(r.frames, 2);
    assert!((r.fps - 4.0).abs() < 1e-9);
}
