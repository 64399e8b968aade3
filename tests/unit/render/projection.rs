use super::*;

fn unit_projector() -> Projector {
    let l = Limits::new(0.0, 1.0).unwrap();
    Projector::new([l, l, l], View::default(), Rect::new(0.0, 0.0, 400.0, 300.0))
}

#[test]
fn box_fits_inside_viewport() {
    let p = unit_projector();
    for c in p.corners() {
        let s = p.project(c);
        assert!((-1e-6..=400.0 + 1e-6).contains(&s.x), "{s:?}");
        assert!((-1e-6..=300.0 + 1e-6).contains(&s.y), "{s:?}");
    }
}

#[test]
fn z_axis_points_up_on_screen() {
    let p = unit_projector();
    let lo = p.project([0.5, 0.5, 0.0]);
    let hi = p.project([0.5, 0.5, 1.0]);
    assert!(hi.y < lo.y);
    assert!((hi.x - lo.x).abs() < 1e-9);
}

#[test]
fn back_planes_are_farther_than_front() {
    let p = unit_projector();
    // Default view looks from +x, -y, +z, so x=min, y=max, z=min are the back planes.
    assert!(p.depth([0.0, 0.5, 0.5]) > p.depth([1.0, 0.5, 0.5]));
    assert!(p.depth([0.5, 1.0, 0.5]) > p.depth([0.5, 0.0, 0.5]));
    assert!(p.depth([0.5, 0.5, 0.0]) > p.depth([0.5, 0.5, 1.0]));
    let depths: Vec<f64> = p.corners().iter().map(|&c| p.depth(c)).collect();
    assert!(depths.iter().all(|d| (0.0..=1.0).contains(d)));
}

#[test]
fn in_bounds_is_inclusive() {
    let p = unit_projector();
    assert!(p.in_bounds([0.0, 1.0, 0.5]));
    assert!(!p.in_bounds([1.01, 0.5, 0.5]));
}
