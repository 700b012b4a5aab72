use serde_json::Value as JsonValue;

use crate::attribute::{AttributeBag, Attributed};
use crate::cell::Cell;
use crate::cellular::{Cellular, CellularMut};
use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::partition::Key;
use crate::table::Table;
use crate::value::Value;

/// A workspace: a collection of tables, the top of the container
/// hierarchy. Like tables, workspaces carry no group tags of their own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    tables: Collection<Table>,
    attributes: AttributeBag,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tables(tables: Vec<Table>) -> Self {
        Workspace {
            tables: Collection::create(tables),
            ..Self::default()
        }
    }

    /// Workspaces have no groups of their own.
    pub fn groups(&self) -> &[String] {
        &[]
    }

    /// The tables matching the given groups: all tables when no groups
    /// are requested. Tables never carry groups, so any filter selects
    /// nothing.
    pub fn tables(&self, groups: &[&str]) -> Vec<&Table> {
        self.tables
            .elements()
            .into_iter()
            .map(|(_, table)| table)
            .filter(|table| {
                groups.is_empty()
                    || groups
                        .iter()
                        .any(|group| table.groups().iter().any(|g| g == group))
            })
            .collect()
    }

    pub fn tables_mut(&mut self) -> Vec<&mut Table> {
        self.tables.iter_mut().map(|(_, table)| table).collect()
    }

    /// Append a table.
    pub fn add_table(&mut self, table: Table) -> Result<()> {
        self.tables.add(table)
    }

    /// Return a new detached table.
    pub fn create_table(&self) -> Table {
        Table::new()
    }

    /// Create a table, append it, and return it for population.
    pub fn create_and_add_table(&mut self) -> Result<&mut Table> {
        self.tables.add(Table::new())?;
        self.tables
            .primary_partition_mut()?
            .last_mut()
            .ok_or_else(|| Error::InvalidState("freshly added table is missing".to_string()))
    }

    /// Return the table at the given index.
    pub fn table(&self, index: usize) -> Result<&Table> {
        self.tables.assert_single_partition("table")?;
        let size = self.tables.len();
        self.tables
            .get(index)
            .map_err(|_| Error::IndexOutOfBounds { index, size })
    }

    pub fn table_mut(&mut self, index: usize) -> Result<&mut Table> {
        self.tables.assert_single_partition("table_mut")?;
        let size = self.tables.len();
        self.tables
            .get_mut(index)
            .map_err(|_| Error::IndexOutOfBounds { index, size })
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The underlying table collection.
    pub fn collection(&self) -> &Collection<Table> {
        &self.tables
    }

    pub fn collection_mut(&mut self) -> &mut Collection<Table> {
        &mut self.tables
    }

    /// Array representation: one entry per table.
    pub fn to_array(&self, groups: &[&str]) -> Vec<Vec<Vec<(Key, Value)>>> {
        self.tables(&[])
            .into_iter()
            .map(|table| table.to_array(groups))
            .collect()
    }

    /// JSON rendering: an array of table renderings.
    pub fn to_json(&self, groups: &[&str]) -> JsonValue {
        JsonValue::Array(
            self.tables(&[])
                .into_iter()
                .map(|table| table.to_json(groups))
                .collect(),
        )
    }
}

impl Cellular for Workspace {
    fn cells(&self, groups: &[&str]) -> Vec<&Cell> {
        self.tables(&[])
            .into_iter()
            .flat_map(|table| table.cells(groups))
            .collect()
    }
}

impl CellularMut for Workspace {
    fn cells_mut(&mut self, groups: &[&str]) -> Vec<&mut Cell> {
        self.tables_mut()
            .into_iter()
            .flat_map(|table| table.cells_mut(groups))
            .collect()
    }
}

impl Attributed for Workspace {
    fn attribute_bag(&self) -> &AttributeBag {
        &self.attributes
    }

    fn attribute_bag_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }
}
