use super::*;

#[test]
fn codes_parse_and_print_back() {
    for code in [",", ".", "o", "s", "^", "v", "D", "+", "x", "*"] {
        let m: Marker = code.parse().unwrap();
        assert_eq!(m.to_string(), code);
    }
    assert!("hexagon".parse::<Marker>().is_err());
}

#[test]
fn serde_uses_codes() {
    let m: Marker = serde_json::from_str("\"o\"").unwrap();
    assert_eq!(m, Marker::Circle);
    assert_eq!(serde_json::to_string(&Marker::Pixel).unwrap(), "\",\"");
    assert!(serde_json::from_str::<Marker>("\"?\"").is_err());
}

#[test]
fn scaled_size_is_monotonic_in_weight() {
    let sizes: Vec<f64> = [0.5, 1.0, 2.0, 3.5, 4.0]
        .iter()
        .map(|&w| marker_size(w, 4.0, 100.0, true))
        .collect();
    assert!(sizes.windows(2).all(|p| p[0] < p[1]));
    assert_eq!(sizes.last().copied(), Some(100.0));
}

#[test]
fn unscaled_size_ignores_weight() {
    assert_eq!(marker_size(0.1, 4.0, 75.0, false), 75.0);
    assert_eq!(marker_size(4.0, 4.0, 75.0, false), 75.0);
}

#[test]
fn radius_grows_with_size_except_pixel() {
    assert!(Marker::Circle.radius_px(100.0) > Marker::Circle.radius_px(25.0));
    assert_eq!(Marker::Pixel.radius_px(100.0), Marker::Pixel.radius_px(1.0));
}

#[test]
fn marker_paths_are_centered() {
    let c = Point::new(50.0, 40.0);
    for m in [Marker::Circle, Marker::Square, Marker::Diamond, Marker::Star, Marker::Plus] {
        let bb = m.path(c, 5.0).bounding_box();
        assert!(bb.contains(c), "{m:?} does not cover its center");
        assert!(bb.width() <= 10.5 && bb.height() <= 10.5);
    }
}
