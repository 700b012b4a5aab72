use serde_json::{Map, Value as JsonValue};

use crate::attribute::{AttributeBag, Attributed};
use crate::cell::Cell;
use crate::cellular::{Cellular, CellularMut};
use crate::collection::Collection;
use crate::error::Result;
use crate::partition::Key;
use crate::value::Value;

/// A table row: a collection of cells keyed by column name.
///
/// Rows carry their own group tags (so whole rows can be selected by
/// group) and a free-form attribute bag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: Collection<Cell>,
    groups: Vec<String>,
    attributes: AttributeBag,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from a plain list of cells, keyed 0..n.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Row {
            cells: Collection::create(cells),
            ..Self::default()
        }
    }

    /// Build a row from column-keyed cells.
    pub fn from_entries(entries: Vec<(Key, Cell)>) -> Self {
        Row {
            cells: Collection::from_entries(entries),
            ..Self::default()
        }
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn set_groups(&mut self, groups: &[&str]) -> &mut Self {
        self.groups = groups.iter().map(|g| g.to_string()).collect();
        self
    }

    pub(crate) fn set_group_names(&mut self, groups: Vec<String>) {
        self.groups = groups;
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Return the cell at the given column.
    pub fn cell(&self, column: impl Into<Key>) -> Result<&Cell> {
        self.cells.get(column)
    }

    pub fn cell_mut(&mut self, column: impl Into<Key>) -> Result<&mut Cell> {
        self.cells.get_mut(column)
    }

    /// Set a cell's value, creating the cell with the given groups if the
    /// column does not exist yet. An existing cell keeps its own groups;
    /// only its value changes.
    pub fn set(
        &mut self,
        column: impl Into<Key>,
        value: impl Into<Value>,
        groups: &[&str],
    ) -> Result<&mut Self> {
        let column = column.into();
        let primary = self.cells.primary_partition_mut()?;
        if primary.exists(column.clone()) {
            primary.get_mut(column)?.set_value(value);
        } else {
            primary.set(column, Cell::with_groups(value, groups));
        }
        Ok(self)
    }

    /// Place a cell at the given column, replacing any existing cell.
    pub fn set_cell(&mut self, column: impl Into<Key>, cell: Cell) -> Result<()> {
        self.cells.primary_partition_mut()?.set(column, cell);
        Ok(())
    }

    /// Remove the cell at the given column.
    pub fn remove(&mut self, column: impl Into<Key>) -> Result<()> {
        self.cells.remove(column)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Column names of the cells matching the given groups, in order.
    pub fn column_names(&self, groups: &[&str]) -> Vec<Key> {
        self.cells
            .elements()
            .into_iter()
            .filter(|(_, cell)| cell.in_any_group(groups))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Reorder the cells to the given column sequence, creating null-valued
    /// cells for columns this row does not have.
    pub fn order(&mut self, column_names: &[Key]) -> Result<()> {
        self.cells.assert_single_partition("order")?;
        let previous = std::mem::take(&mut self.cells);
        let partition = previous.primary_partition()?;
        for name in column_names {
            let cell = if partition.exists(name.clone()) {
                partition.get(name.clone())?.clone()
            } else {
                Cell::new(Value::Null)
            };
            self.cells.set(name.clone(), cell)?;
        }
        Ok(())
    }

    /// The underlying cell collection.
    pub fn collection(&self) -> &Collection<Cell> {
        &self.cells
    }

    pub fn collection_mut(&mut self) -> &mut Collection<Cell> {
        &mut self.cells
    }

    /// Copy of this row restricted to the cells matching the given groups.
    pub(crate) fn filtered_copy(&self, groups: &[&str]) -> Row {
        if groups.is_empty() {
            return self.clone();
        }
        let entries = self
            .cells
            .elements()
            .into_iter()
            .filter(|(_, cell)| cell.in_any_group(groups))
            .map(|(key, cell)| (key.clone(), cell.clone()))
            .collect();
        let mut row = Row::from_entries(entries);
        row.set_group_names(self.groups.clone());
        row
    }

    /// Column-keyed scalar values of the matching cells.
    pub fn to_array(&self, groups: &[&str]) -> Vec<(Key, Value)> {
        self.cells
            .elements()
            .into_iter()
            .filter(|(_, cell)| cell.in_any_group(groups))
            .map(|(key, cell)| (key.clone(), cell.value().clone()))
            .collect()
    }

    /// JSON rendering: an array when the row is a plain list (sequential
    /// integer columns), an object otherwise.
    pub fn to_json(&self, groups: &[&str]) -> JsonValue {
        let entries = self.to_array(groups);
        let sequential = entries
            .iter()
            .enumerate()
            .all(|(index, (key, _))| *key == Key::Int(index));
        if sequential {
            JsonValue::Array(entries.iter().map(|(_, value)| value.into()).collect())
        } else {
            let mut object = Map::new();
            for (key, value) in &entries {
                object.insert(key.to_string(), value.into());
            }
            JsonValue::Object(object)
        }
    }
}

impl Cellular for Row {
    fn cells(&self, groups: &[&str]) -> Vec<&Cell> {
        self.cells
            .elements()
            .into_iter()
            .map(|(_, cell)| cell)
            .filter(|cell| cell.in_any_group(groups))
            .collect()
    }
}

impl CellularMut for Row {
    fn cells_mut(&mut self, groups: &[&str]) -> Vec<&mut Cell> {
        self.cells
            .iter_mut()
            .map(|(_, cell)| cell)
            .filter(|cell| cell.in_any_group(groups))
            .collect()
    }
}

impl Attributed for Row {
    fn attribute_bag(&self) -> &AttributeBag {
        &self.attributes
    }

    fn attribute_bag_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }
}
