use super::*;

#[test]
fn defaults_match_documented_values() {
    let o = AnimateOpts::default();
    assert_eq!(o.title, "Animator5D");
    assert_eq!(o.path, PathBuf::from("Animator5D Rendering"));
    assert_eq!(o.tstep, None);
    assert_eq!(o.field_map(), FieldMap::default());
    assert_eq!(o.tlabel, "units");
    assert!(o.projections && o.scalesize && o.renderframes);
    assert!(!o.transparency && !o.delete && !o.quiet);
    assert_eq!(o.marker, Marker::Pixel);
    assert_eq!(o.msize, 100.0);
    assert_eq!(o.colormap, Colormap::Rainbow);
    assert!(o.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let json = r#"{
        "title": "EM Shower Reconstructed",
        "tstep": 0.05,
        "xname": "z", "zname": "x", "tname": "correctT", "wname": "en",
        "xlim": [320, 340],
        "marker": "o",
        "msize": 75,
        "scalesize": false,
        "colormap": "gray"
    }"#;
    let o = AnimateOpts::from_reader(json.as_bytes()).unwrap();
    assert_eq!(o.tstep, Some(0.05));
    assert_eq!(o.xlim, Some(Limits::new(320.0, 340.0).unwrap()));
    assert_eq!(o.marker, Marker::Circle);
    assert!(!o.scalesize);
    assert_eq!(o.colormap, Colormap::Gray);
    assert_eq!(o.field_map().t, "correctT");
    assert_eq!(o.yname, "y");
    assert!(o.projections);
}

#[test]
fn unknown_option_is_rejected() {
    assert!(AnimateOpts::from_reader(r#"{"colour": "red"}"#.as_bytes()).is_err());
}

#[test]
fn validate_rejects_bad_step_and_size() {
    let o = AnimateOpts {
        tstep: Some(0.0),
        ..AnimateOpts::default()
    };
    assert!(o.validate().is_err());

    let o = AnimateOpts {
        tstep: Some(f64::NAN),
        ..AnimateOpts::default()
    };
    assert!(o.validate().is_err());

    let o = AnimateOpts {
        msize: -1.0,
        ..AnimateOpts::default()
    };
    assert!(o.validate().is_err());
}
