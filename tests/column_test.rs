use cellular::{Aggregate, Cell, Cellular, CellularMut, Row, Table, Value};

fn two_row_table() -> Table {
    Table::from_rows(vec![
        Row::from_cells(vec![Cell::new(1), Cell::new(1), Cell::new(2), Cell::new(3)]),
        Row::from_cells(vec![Cell::new(5), Cell::new(8), Cell::new(13), Cell::new(21)]),
    ])
}

#[test]
fn test_values() {
    let table = two_row_table();
    let column = table.column(2usize);
    assert_eq!(column.values(&[]), vec![Value::Int(2), Value::Int(13)]);
}

#[test]
fn test_rows_without_the_column_are_skipped() {
    let table = Table::from_rows(vec![
        Row::from_cells(vec![Cell::new(1), Cell::new(2)]),
        Row::from_cells(vec![Cell::new(3)]),
    ]);

    assert_eq!(table.column(1usize).values(&[]), vec![Value::Int(2)]);
}

#[test]
fn test_group_names() {
    let table = Table::from_rows(vec![
        Row::from_cells(vec![Cell::with_groups(1, &["foo"])]),
        Row::from_cells(vec![Cell::with_groups(5, &["bar"])]),
    ]);

    let column = table.column(0usize);
    assert_eq!(column.group_names(), vec!["foo".to_string(), "bar".to_string()]);
}

#[test]
fn test_cells_filtered_by_group() {
    let table = Table::from_rows(vec![
        Row::from_cells(vec![Cell::with_groups(1, &["foo"])]),
        Row::from_cells(vec![Cell::with_groups(5, &["bar"])]),
    ]);

    let column = table.column(0usize);
    assert_eq!(column.cells(&[]).len(), 2);
    assert_eq!(column.cells(&["foo"]).len(), 1);
}

#[test]
fn test_every_requested_group_must_match() {
    let table = Table::from_rows(vec![
        Row::from_cells(vec![Cell::with_groups(1, &["foo", "bar"])]),
        Row::from_cells(vec![Cell::with_groups(5, &["foo"])]),
    ]);

    let column = table.column(0usize);
    assert_eq!(column.cells(&["foo", "bar"]).len(), 1);
}

#[test]
fn test_to_array() {
    let table = Table::from_rows(vec![
        Row::from_cells(vec![Cell::new(1)]),
        Row::from_cells(vec![Cell::new(5)]),
    ]);

    assert_eq!(table.column(0usize).to_array(&[]), vec![Value::Int(1), Value::Int(5)]);
}

#[test]
fn test_aggregates_over_a_column() {
    let table = two_row_table();
    let column = table.column(3usize);
    assert_eq!(column.sum(&[]).unwrap(), Value::Int(24));
    assert_eq!(column.max(&[]).unwrap(), Value::Int(21));
}

#[test]
fn test_writes_go_through_to_the_owning_rows() {
    let mut table = two_row_table();
    table
        .column_mut(0usize)
        .map_values(|cell| Value::Int(cell.value().as_i64().unwrap() * 10), &[]);

    assert_eq!(table.row(0).unwrap().cell(0usize).unwrap().value(), &Value::Int(10));
    assert_eq!(table.row(1).unwrap().cell(0usize).unwrap().value(), &Value::Int(50));
}

#[test]
fn test_fill_through_a_column() {
    let mut table = two_row_table();
    table.column_mut(1usize).fill(Value::Int(0), &[]);

    assert_eq!(table.row(0).unwrap().cell(1usize).unwrap().value(), &Value::Int(0));
    assert_eq!(table.row(1).unwrap().cell(1usize).unwrap().value(), &Value::Int(0));
    // neighboring columns untouched
    assert_eq!(table.row(0).unwrap().cell(0usize).unwrap().value(), &Value::Int(1));
}
