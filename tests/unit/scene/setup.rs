use super::*;

fn ds(points: &[(f64, f64)]) -> Dataset {
    let recs: Vec<PointRecord> = points
        .iter()
        .enumerate()
        .map(|(i, &(t, w))| PointRecord::new(i as f64, -(i as f64), 2.0 * i as f64, t, w))
        .collect();
    Dataset::from_records(&recs)
}

#[test]
fn sorts_by_time_and_derives_defaults() {
    let setup = SceneSetup::resolve(
        &ds(&[(0.9, 1.0), (0.1, 4.0), (0.5, 2.0)]),
        &AnimateOpts::default(),
    )
    .unwrap();
    let ts: Vec<f64> = setup.points.iter().map(|p| p.t).collect();
    assert_eq!(ts, vec![0.1, 0.5, 0.9]);
    assert_eq!(setup.maxw, 4.0);
    assert_eq!(setup.tlim, Limits::new(0.1, 0.9).unwrap());
    assert!((setup.tstep - 0.8 / 50.0).abs() < 1e-12);
    assert_eq!(setup.timeline.len(), 50);
    assert_eq!(setup.axes[0], Limits::new(0.0, 2.0).unwrap());
    assert_eq!(setup.color_scale.limits(), Limits::new(0.0, 4.0).unwrap());
}

#[test]
fn explicit_limits_and_step_win() {
    let opts = AnimateOpts {
        xlim: Some(Limits::new(-10.0, 10.0).unwrap()),
        tlim: Some(Limits::new(0.0, 0.6).unwrap()),
        tstep: Some(0.25),
        wlim: Some(Limits::new(1.0, 2.0).unwrap()),
        ..AnimateOpts::default()
    };
    let setup = SceneSetup::resolve(&ds(&[(0.1, 1.0), (0.3, 2.0)]), &opts).unwrap();
    assert_eq!(setup.axes[0], Limits::new(-10.0, 10.0).unwrap());
    assert_eq!(setup.tstep, 0.25);
    assert_eq!(setup.timeline.len(), 3);
    assert_eq!(setup.color_scale.limits(), Limits::new(1.0, 2.0).unwrap());
}

#[test]
fn single_valued_axes_are_widened() {
    let recs = vec![
        PointRecord::new(1.0, 1.0, 1.0, 0.0, 1.0),
        PointRecord::new(1.0, 1.0, 1.0, 1.0, 1.0),
    ];
    let setup = SceneSetup::resolve(&Dataset::from_records(&recs), &AnimateOpts::default())
        .unwrap();
    assert_eq!(setup.axes[2], Limits::new(0.5, 1.5).unwrap());
}

#[test]
fn empty_dataset_is_degenerate() {
    let empty = Dataset::from_records(&[]);
    assert!(matches!(
        SceneSetup::resolve(&empty, &AnimateOpts::default()),
        Err(AnimatorError::DegenerateData(_))
    ));
}

#[test]
fn non_positive_max_weight_is_degenerate() {
    assert!(matches!(
        SceneSetup::resolve(&ds(&[(0.0, 0.0), (1.0, -2.0)]), &AnimateOpts::default()),
        Err(AnimatorError::DegenerateData(_))
    ));
}

#[test]
fn zero_time_span_is_degenerate() {
    assert!(matches!(
        SceneSetup::resolve(&ds(&[(0.5, 1.0), (0.5, 2.0)]), &AnimateOpts::default()),
        Err(AnimatorError::DegenerateData(_))
    ));
}

#[test]
fn missing_field_surfaces_before_anything_else() {
    let opts = AnimateOpts {
        wname: "energy".into(),
        ..AnimateOpts::default()
    };
    assert!(matches!(
        SceneSetup::resolve(&ds(&[(0.0, 1.0)]), &opts),
        Err(AnimatorError::FieldNotFound { .. })
    ));
}

#[test]
fn marker_size_follows_scalesize() {
    let setup = SceneSetup::resolve(&ds(&[(0.0, 2.0), (1.0, 4.0)]), &AnimateOpts::default())
        .unwrap();
    let scaled = AnimateOpts::default();
    assert_eq!(setup.marker_size(2.0, &scaled), 50.0);
    assert_eq!(setup.marker_size(4.0, &scaled), 100.0);
    let fixed = AnimateOpts {
        scalesize: false,
        msize: 75.0,
        ..AnimateOpts::default()
    };
    assert_eq!(setup.marker_size(2.0, &fixed), 75.0);
    assert_eq!(setup.marker_size(4.0, &fixed), 75.0);
}

#[test]
fn colormap_option_drives_the_color_scale() {
    let data = ds(&[(0.1, 1.0), (0.5, 4.0)]);
    let rainbow = SceneSetup::resolve(&data, &AnimateOpts::default()).unwrap();
    let gray = SceneSetup::resolve(
        &data,
        &AnimateOpts {
            colormap: crate::render::colormap::Colormap::Gray,
            ..AnimateOpts::default()
        },
    )
    .unwrap();
    assert_eq!(gray.color_scale.color(0.0), [0, 0, 0, 255]);
    assert_eq!(gray.color_scale.color(4.0), [255, 255, 255, 255]);
    assert_ne!(rainbow.color_scale.color(4.0), gray.color_scale.color(4.0));
}
