use super::*;

#[test]
fn records_and_columns_parse_to_same_table() {
    let records = r#"[
        {"x": 1, "y": 2, "z": 3, "t": 0.5, "w": 10},
        {"x": 4, "y": 5, "z": 6, "t": 0.1, "w": 20}
    ]"#;
    let columns = r#"{"x": [1, 4], "y": [2, 5], "z": [3, 6], "t": [0.5, 0.1], "w": [10, 20]}"#;
    let a = Dataset::from_reader(records.as_bytes()).unwrap();
    let b = Dataset::from_reader(columns.as_bytes()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
    assert_eq!(a.column("t"), Some(&[0.5, 0.1][..]));
}

#[test]
fn ragged_columns_are_rejected() {
    let err = Dataset::from_reader(r#"{"x": [1, 2], "t": [0.1]}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, AnimatorError::Validation(_)));
}

#[test]
fn records_with_mismatched_keys_are_rejected() {
    let json = r#"[{"x": 1, "t": 0}, {"x": 2, "w": 0}]"#;
    assert!(Dataset::from_reader(json.as_bytes()).is_err());
}

#[test]
fn resolve_uses_custom_field_names() {
    let ds = Dataset::from_columns([
        ("z", vec![330.0]),
        ("y", vec![-40.0]),
        ("x", vec![45.0]),
        ("correctT", vec![1.25]),
        ("en", vec![7.0]),
    ])
    .unwrap();
    let fields = FieldMap {
        x: "z".into(),
        z: "x".into(),
        t: "correctT".into(),
        w: "en".into(),
        ..FieldMap::default()
    };
    let pts = ds.resolve(&fields).unwrap();
    assert_eq!(pts, vec![PointRecord::new(330.0, -40.0, 45.0, 1.25, 7.0)]);
}

#[test]
fn resolve_reports_missing_field() {
    let ds = Dataset::from_columns([("x", vec![1.0]), ("y", vec![1.0])]).unwrap();
    match ds.resolve(&FieldMap::default()) {
        Err(AnimatorError::FieldNotFound { field }) => assert_eq!(field, "z"),
        other => panic!("expected FieldNotFound, got {other:?}"),
    }
}

#[test]
fn resolve_on_empty_table_is_degenerate() {
    let ds = Dataset::from_reader("[]".as_bytes()).unwrap();
    assert!(ds.is_empty());
    assert!(matches!(
        ds.resolve(&FieldMap::default()),
        Err(AnimatorError::DegenerateData(_))
    ));
}

#[test]
fn from_records_round_trips_roles() {
    let pts = vec![PointRecord::new(1.0, 2.0, 3.0, 4.0, 5.0)];
    let ds = Dataset::from_records(&pts);
    assert_eq!(ds.resolve(&FieldMap::default()).unwrap(), pts);
    assert_eq!(ds.column_names().collect::<Vec<_>>(), ["t", "w", "x", "y", "z"]);
}
