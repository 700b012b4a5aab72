use cellular::{Aggregate, Attributed, Cell, Cellular, CellularMut, Error, Key, Row, Value};

// The canonical mixed row: one untagged text cell, seven "x"-tagged
// numbers and one "y"-tagged number.
fn sample_row() -> Row {
    Row::from_cells(vec![
        Cell::new("text"),
        Cell::with_groups(1, &["x"]),
        Cell::with_groups(13, &["x"]),
        Cell::with_groups(1, &["x"]),
        Cell::with_groups(5, &["x"]),
        Cell::with_groups(8, &["x"]),
        Cell::with_groups(3, &["x"]),
        Cell::with_groups(5, &["y"]),
        Cell::with_groups(2, &["x"]),
    ])
}

#[test]
fn test_values_for_group() {
    let row = sample_row();
    let expected: Vec<Value> = [1, 13, 1, 5, 8, 3, 2].iter().map(|&v| Value::Int(v)).collect();
    assert_eq!(row.values(&["x"]), expected);
}

#[test]
fn test_values_without_groups_returns_everything() {
    let row = sample_row();
    assert_eq!(row.values(&[]).len(), 9);
}

#[test]
fn test_map_values() {
    let mut row = sample_row();
    row.map_values(
        |cell| Value::Int(cell.value().as_i64().unwrap() + 1),
        &["x"],
    );

    let expected: Vec<Value> = [2, 14, 2, 6, 9, 4, 3].iter().map(|&v| Value::Int(v)).collect();
    assert_eq!(row.values(&["x"]), expected);
    // other cells untouched
    assert_eq!(row.cell(0usize).unwrap().value(), &Value::Str("text".to_string()));
    assert_eq!(row.cell(7usize).unwrap().value(), &Value::Int(5));
}

#[test]
fn test_fill() {
    let mut row = sample_row();
    row.fill(Value::Int(0), &["y"]);
    assert_eq!(row.cell(7usize).unwrap().value(), &Value::Int(0));
    assert_eq!(row.cell(1usize).unwrap().value(), &Value::Int(1));
}

#[test]
fn test_aggregates() {
    let row = sample_row();
    assert_eq!(row.sum(&["x"]).unwrap(), Value::Int(33));
    assert_eq!(row.min(&["x"]).unwrap(), Value::Int(1));
    assert_eq!(row.max(&["x"]).unwrap(), Value::Int(13));
    assert_eq!(row.avg(&["x"]).unwrap(), Value::Float(33.0 / 7.0));
    assert_eq!(row.median(&["x"], false).unwrap(), Value::Int(3));
    assert_eq!(row.median(&["x"], true).unwrap(), Value::Int(5));
}

#[test]
fn test_aggregates_over_unknown_group_default_to_zero() {
    let row = sample_row();
    assert_eq!(row.avg(&["nope"]).unwrap(), Value::Int(0));
    assert_eq!(row.median(&["nope"], false).unwrap(), Value::Int(0));
    assert_eq!(row.sum(&["nope"]).unwrap(), Value::Int(0));
}

#[test]
fn test_sum_rejects_non_numeric_cells() {
    let row = sample_row();
    assert!(matches!(row.sum(&[]), Err(Error::InvalidValue(_))));
}

#[test]
fn test_cell_access() {
    let row = sample_row();
    assert_eq!(row.cell(0usize).unwrap().value(), &Value::Str("text".to_string()));
    assert_eq!(row.cell(4usize).unwrap().value(), &Value::Int(5));
    assert!(matches!(row.cell(999usize), Err(Error::KeyNotFound { .. })));
}

#[test]
fn test_set_creates_then_updates_preserving_groups() {
    let mut row = Row::new();
    row.set("time", 10, &["perf"]).unwrap();
    assert!(row.cell("time").unwrap().in_group("perf"));

    // updating an existing column keeps the cell's groups
    row.set("time", 20, &[]).unwrap();
    assert_eq!(row.cell("time").unwrap().value(), &Value::Int(20));
    assert!(row.cell("time").unwrap().in_group("perf"));
}

#[test]
fn test_remove() {
    let mut row = Row::new();
    row.set("a", 1, &[]).unwrap();
    row.remove("a").unwrap();
    assert!(row.is_empty());
}

#[test]
fn test_column_names_respect_groups() {
    let mut row = Row::new();
    row.set("a", 1, &["one"]).unwrap();
    row.set("b", 2, &[]).unwrap();

    assert_eq!(row.column_names(&[]), vec![Key::from("a"), Key::from("b")]);
    assert_eq!(row.column_names(&["one"]), vec![Key::from("a")]);
}

#[test]
fn test_order_pads_missing_columns_with_null() {
    let mut row = Row::new();
    row.set("b", 2, &[]).unwrap();

    row.order(&[Key::from("a"), Key::from("b")]).unwrap();

    assert_eq!(row.column_names(&[]), vec![Key::from("a"), Key::from("b")]);
    assert!(row.cell("a").unwrap().value().is_null());
    assert_eq!(row.cell("b").unwrap().value(), &Value::Int(2));
}

#[test]
fn test_groups_and_attributes() {
    let mut row = sample_row();
    row.set_groups(&["one", "two"]);
    assert!(row.in_group("one"));
    assert!(!row.in_group("vache"));

    row.set_attribute("foo", "bar");
    assert!(row.has_attribute("foo"));
    assert!(!row.has_attribute("baz"));
    assert_eq!(row.attribute("foo").unwrap(), &Value::Str("bar".to_string()));
    assert!(matches!(row.attribute("baz"), Err(Error::KeyNotFound { .. })));

    row.set_attributes(vec![
        ("foo".to_string(), Value::Str("bar".to_string())),
        ("bar".to_string(), Value::Str("foo".to_string())),
    ]);
    assert_eq!(row.attributes().len(), 2);
}

#[test]
fn test_to_array() {
    let mut row = Row::new();
    row.set("a", 1, &[]).unwrap();
    row.set("b", "two", &["g"]).unwrap();

    assert_eq!(
        row.to_array(&[]),
        vec![
            (Key::from("a"), Value::Int(1)),
            (Key::from("b"), Value::Str("two".to_string())),
        ]
    );
    assert_eq!(
        row.to_array(&["g"]),
        vec![(Key::from("b"), Value::Str("two".to_string()))]
    );
}

#[test]
fn test_to_json_renders_lists_and_objects() {
    let list_row = Row::from_cells(vec![Cell::new(4), Cell::new(2)]);
    assert_eq!(list_row.to_json(&[]), serde_json::json!([4, 2]));

    let mut keyed_row = Row::new();
    keyed_row.set("a", 1, &[]).unwrap();
    assert_eq!(keyed_row.to_json(&[]), serde_json::json!({"a": 1}));
}

#[test]
fn test_clone_is_deep() {
    let original = sample_row();
    let mut copy = original.clone();
    copy.cell_mut(1usize).unwrap().set_value(1000);

    assert_eq!(original.cell(1usize).unwrap().value(), &Value::Int(1));
    assert_eq!(copy.cell(1usize).unwrap().value(), &Value::Int(1000));
}
