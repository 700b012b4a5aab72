use crate::cell::Cell;
use crate::cellular::{Cellular, CellularMut};
use crate::partition::Key;
use crate::table::Table;
use crate::value::Value;

/// A read-only projection of one column of a table.
///
/// A column stores no cells of its own; it walks the owning table's rows
/// on every call, picking the cell at its key and skipping rows that do
/// not have one. Nothing is cached, so the view is always current, and
/// always as slow as a fresh walk.
///
/// Group filtering differs from the row-level accessors: a cell matches
/// only when it belongs to *every* requested group.
#[derive(Debug)]
pub struct Column<'a> {
    table: &'a Table,
    key: Key,
}

impl<'a> Column<'a> {
    pub(crate) fn new(table: &'a Table, key: Key) -> Self {
        Column { table, key }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Union of the group tags seen across this column's cells, in
    /// first-seen order.
    pub fn group_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for cell in self.cells(&[]) {
            for group in cell.groups() {
                if !names.iter().any(|known| known == group) {
                    names.push(group.clone());
                }
            }
        }
        names
    }

    pub fn to_array(&self, groups: &[&str]) -> Vec<Value> {
        self.values(groups)
    }
}

impl Cellular for Column<'_> {
    fn cells(&self, groups: &[&str]) -> Vec<&Cell> {
        column_cells(self.table, &self.key, groups)
    }
}

/// An exclusive projection of one column, for writing through to the
/// owning rows' cells.
#[derive(Debug)]
pub struct ColumnMut<'a> {
    table: &'a mut Table,
    key: Key,
}

impl<'a> ColumnMut<'a> {
    pub(crate) fn new(table: &'a mut Table, key: Key) -> Self {
        ColumnMut { table, key }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }
}

impl Cellular for ColumnMut<'_> {
    fn cells(&self, groups: &[&str]) -> Vec<&Cell> {
        column_cells(self.table, &self.key, groups)
    }
}

impl CellularMut for ColumnMut<'_> {
    fn cells_mut(&mut self, groups: &[&str]) -> Vec<&mut Cell> {
        let key = self.key.clone();
        let mut cells = Vec::new();
        for row in self.table.rows_mut(&[]) {
            if let Ok(cell) = row.cell_mut(key.clone()) {
                if cell.in_all_groups(groups) {
                    cells.push(cell);
                }
            }
        }
        cells
    }
}

fn column_cells<'t>(table: &'t Table, key: &Key, groups: &[&str]) -> Vec<&'t Cell> {
    let mut cells = Vec::new();
    for row in table.rows(&[]) {
        if let Ok(cell) = row.cell(key.clone()) {
            if cell.in_all_groups(groups) {
                cells.push(cell);
            }
        }
    }
    cells
}
