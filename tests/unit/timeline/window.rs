use super::*;

fn at(t: f64) -> PointRecord {
    PointRecord::new(0.0, 0.0, 0.0, t, 1.0)
}

fn times(pts: &[PointRecord]) -> Vec<f64> {
    pts.iter().map(|p| p.t).collect()
}

#[test]
fn window_is_open_left_closed_right() {
    let w = TimeWindow {
        start: 0.25,
        end: 0.5,
    };
    assert!(!w.contains(0.25));
    assert!(w.contains(0.3));
    assert!(w.contains(0.5));
    assert!(!w.contains(0.51));
}

#[test]
fn three_points_three_frames() {
    let tl = Timeline::new(Limits::new(0.0, 0.6).unwrap(), 0.25).unwrap();
    assert_eq!(tl.len(), 3);
    let pts = [at(0.1), at(0.3), at(0.55)];
    let buckets: Vec<Vec<f64>> = tl
        .windows()
        .map(|(_, w)| times(Timeline::select(&pts, w)))
        .collect();
    assert_eq!(buckets, vec![vec![0.1], vec![0.3], vec![0.55]]);
    assert_eq!(
        tl.window(FrameNumber(3)),
        Some(TimeWindow {
            start: 0.5,
            end: 0.75
        })
    );
}

#[test]
fn boundary_point_belongs_to_later_window_only() {
    let tl = Timeline::new(Limits::new(0.0, 1.0).unwrap(), 0.25).unwrap();
    let pts = [at(0.5)];
    let hits: Vec<u32> = tl
        .windows()
        .filter(|(_, w)| !Timeline::select(&pts, *w).is_empty())
        .map(|(n, _)| n.0)
        .collect();
    assert_eq!(hits, vec![2]);
}

#[test]
fn point_at_interval_start_is_in_no_window() {
    let tl = Timeline::new(Limits::new(0.0, 1.0).unwrap(), 0.5).unwrap();
    let pts = [at(0.0), at(1.0)];
    let total: usize = tl.windows().map(|(_, w)| Timeline::select(&pts, w).len()).sum();
    assert_eq!(total, 1);
}

#[test]
fn frame_count_is_ceil_of_span_over_step() {
    for (span, step, expected) in [(1.0, 0.02, 50), (0.7, 0.25, 3), (10.0, 3.0, 4), (0.3, 0.1, 3)] {
        let tl = Timeline::new(Limits::new(2.0, 2.0 + span).unwrap(), step).unwrap();
        assert_eq!(tl.len(), expected, "span={span} step={step}");
    }
}

#[test]
fn windows_are_numbered_contiguously_from_one() {
    let tl = Timeline::new(Limits::new(0.0, 1.0).unwrap(), 0.1).unwrap();
    let numbers: Vec<u32> = tl.windows().map(|(n, _)| n.0).collect();
    assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
    assert!(tl.window(FrameNumber(0)).is_none());
    assert!(tl.window(FrameNumber(11)).is_none());
}

#[test]
fn every_point_in_interval_is_selected_exactly_once() {
    let tl = Timeline::new(Limits::new(0.0, 1.0).unwrap(), 0.1).unwrap();
    let pts: Vec<PointRecord> = (1..=100).map(|i| at(f64::from(i) * 0.01)).collect();
    let total: usize = tl.windows().map(|(_, w)| Timeline::select(&pts, w).len()).sum();
    assert_eq!(total, pts.len());
}

#[test]
fn invalid_step_is_rejected() {
    let tlim = Limits::new(0.0, 1.0).unwrap();
    assert!(Timeline::new(tlim, 0.0).is_err());
    assert!(Timeline::new(tlim, f64::INFINITY).is_err());
}

#[test]
fn last_window_reaches_interval_end() {
    let tlim = Limits::new(0.884, 1.6668).unwrap();
    let tl = Timeline::new(tlim, tlim.span() / 50.0).unwrap();
    assert_eq!(tl.len(), 50);
    let last = tl.window(FrameNumber(50)).unwrap();
    assert!(last.end >= tlim.max);
    assert!(last.contains(tlim.max));
    let pts = [at(1.6668)];
    let total: usize = tl.windows().map(|(_, w)| Timeline::select(&pts, w).len()).sum();
    assert_eq!(total, 1);
}

#[test]
fn snapped_frame_count_still_covers_interval_end() {
    let tl = Timeline::new(Limits::new(0.0, 1.000_000_000_5).unwrap(), 0.5).unwrap();
    assert_eq!(tl.len(), 2);
    let pts = [at(1.000_000_000_5)];
    let hits: Vec<u32> = tl
        .windows()
        .filter(|(_, w)| !Timeline::select(&pts, *w).is_empty())
        .map(|(n, _)| n.0)
        .collect();
    assert_eq!(hits, vec![2]);
}
