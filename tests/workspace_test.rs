use cellular::{Aggregate, Attributed, Cell, Cellular, Error, Row, Table, Value, Workspace};

fn sample_workspace() -> Workspace {
    let mut workspace = Workspace::new();
    workspace
        .add_table(Table::from_rows(vec![Row::from_cells(vec![
            Cell::with_groups(1, &["x"]),
            Cell::new(2),
        ])]))
        .unwrap();
    workspace
        .add_table(Table::from_rows(vec![Row::from_cells(vec![
            Cell::with_groups(3, &["x"]),
        ])]))
        .unwrap();
    workspace
}

#[test]
fn test_table_access() {
    let workspace = sample_workspace();
    assert_eq!(workspace.table_count(), 2);
    assert_eq!(workspace.table(1).unwrap().row_count(), 1);

    match workspace.table(5) {
        Err(Error::IndexOutOfBounds { index, size }) => {
            assert_eq!(index, 5);
            assert_eq!(size, 2);
        }
        other => panic!("expected IndexOutOfBounds, got {:?}", other),
    }
}

#[test]
fn test_create_and_add_table() {
    let mut workspace = Workspace::new();
    workspace
        .create_and_add_table()
        .unwrap()
        .create_and_add_row(&[])
        .unwrap()
        .set("a", 1, &[])
        .unwrap();

    assert_eq!(workspace.table_count(), 1);
    assert_eq!(
        workspace.table(0).unwrap().row(0).unwrap().cell("a").unwrap().value(),
        &Value::Int(1)
    );
}

#[test]
fn test_cells_span_all_tables() {
    let workspace = sample_workspace();
    assert_eq!(workspace.cells(&[]).len(), 3);
    assert_eq!(workspace.cells(&["x"]).len(), 2);
    assert_eq!(workspace.sum(&["x"]).unwrap(), Value::Int(4));
}

#[test]
fn test_workspace_has_no_groups() {
    let workspace = sample_workspace();
    assert!(workspace.groups().is_empty());
}

#[test]
fn test_to_array_nests_tables() {
    let workspace = sample_workspace();
    let arrays = workspace.to_array(&[]);
    assert_eq!(arrays.len(), 2);
    assert_eq!(arrays[0].len(), 1);
    assert_eq!(arrays[0][0].len(), 2);
}

#[test]
fn test_to_json() {
    let workspace = sample_workspace();
    assert_eq!(workspace.to_json(&[]), serde_json::json!([[[1, 2]], [[3]]]));
}

#[test]
fn test_attributes() {
    let mut workspace = Workspace::new();
    workspace.set_attribute("generated", "2015-01-01");
    assert!(workspace.has_attribute("generated"));
    assert_eq!(
        workspace.attribute("generated").unwrap(),
        &Value::Str("2015-01-01".to_string())
    );
}
