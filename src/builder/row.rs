use crate::builder::TableBuilder;
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::partition::Key;
use crate::row::Row;
use crate::value::Value;

/// Fluent builder for a single row.
///
/// A row builder obtained from [`TableBuilder::row`] owns its parent for
/// the duration of the chain; [`end`](RowBuilder::end) hands the parent
/// back with this row appended. A detached builder made with
/// [`new`](RowBuilder::new) can only [`build`](RowBuilder::build).
#[derive(Debug, Clone, Default)]
pub struct RowBuilder {
    parent: Option<Box<TableBuilder>>,
    cells: Vec<(Key, Cell)>,
    groups: Vec<String>,
}

impl RowBuilder {
    /// A detached row builder.
    pub fn new(groups: &[&str]) -> Self {
        RowBuilder {
            parent: None,
            cells: Vec::new(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        }
    }

    pub(crate) fn attached(parent: TableBuilder, groups: &[&str]) -> Self {
        RowBuilder {
            parent: Some(Box::new(parent)),
            ..Self::new(groups)
        }
    }

    /// Seed a builder from an existing row, cloning its cells and groups.
    pub fn from_row(row: &Row) -> Self {
        RowBuilder {
            parent: None,
            cells: row
                .collection()
                .elements()
                .into_iter()
                .map(|(key, cell)| (key.clone(), cell.clone()))
                .collect(),
            groups: row.groups().to_vec(),
        }
    }

    /// Create a cell at the given column, replacing any existing cell
    /// there.
    pub fn set(mut self, column: impl Into<Key>, value: impl Into<Value>, groups: &[&str]) -> Self {
        let column = column.into();
        let cell = Cell::with_groups(value, groups);
        match self.cells.iter_mut().find(|(key, _)| *key == column) {
            Some(entry) => entry.1 = cell,
            None => self.cells.push((column, cell)),
        }
        self
    }

    /// Return the cell at the given column.
    pub fn get(&self, column: impl Into<Key>) -> Result<&Cell> {
        let column = column.into();
        self.cells
            .iter()
            .find(|(key, _)| *key == column)
            .map(|(_, cell)| cell)
            .ok_or_else(|| {
                Error::key_not_found(
                    &column,
                    self.cells.iter().map(|(key, _)| key.to_string()).collect(),
                )
            })
    }

    /// Drop the cell at the given column, if present.
    pub fn remove(mut self, column: impl Into<Key>) -> Self {
        let column = column.into();
        self.cells.retain(|(key, _)| *key != column);
        self
    }

    pub fn column_names(&self) -> Vec<&Key> {
        self.cells.iter().map(|(key, _)| key).collect()
    }

    /// Rewrite the cells to the given column sequence, creating null
    /// cells for columns this row does not have.
    pub(crate) fn order(&mut self, column_names: &[Key]) {
        let mut ordered = Vec::with_capacity(column_names.len());
        for name in column_names {
            let cell = self
                .cells
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, cell)| cell.clone())
                .unwrap_or_else(|| Cell::new(Value::Null));
            ordered.push((name.clone(), cell));
        }
        self.cells = ordered;
    }

    /// Build the row.
    pub fn build(self) -> Row {
        let mut row = Row::from_entries(self.cells);
        row.set_group_names(self.groups);
        row
    }

    /// Append this row to the parent table builder and hand the parent
    /// back. Fails on a detached builder.
    pub fn end(mut self) -> Result<TableBuilder> {
        let parent = self.parent.take().ok_or_else(|| {
            Error::InvalidState(format!(
                "row builder with columns [{}] is not attached to a table builder, cannot end()",
                self.column_names()
                    .iter()
                    .map(|key| key.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;
        let mut parent = *parent;
        parent.push_row(self);
        Ok(parent)
    }
}
