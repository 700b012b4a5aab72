use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;
use serde_json::Value as JsonValue;

use crate::attribute::{AttributeBag, Attributed};
use crate::cell::Cell;
use crate::cellular::{Cellular, CellularMut};
use crate::collection::Collection;
use crate::column::{Column, ColumnMut};
use crate::error::{Error, Result};
use crate::partition::Key;
use crate::row::Row;
use crate::value::Value;

/// A table: a collection of rows.
///
/// Tables never carry group tags of their own; group membership lives on
/// rows and cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    rows: Collection<Row>,
    title: Option<String>,
    description: Option<String>,
    attributes: AttributeBag,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Table {
            rows: Collection::create(rows),
            ..Self::default()
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Tables have no groups of their own.
    pub fn groups(&self) -> &[String] {
        &[]
    }

    /// The rows matching the given groups: all rows when no groups are
    /// requested, otherwise the rows belonging to any requested group.
    pub fn rows(&self, groups: &[&str]) -> Vec<&Row> {
        self.rows
            .elements()
            .into_iter()
            .map(|(_, row)| row)
            .filter(|row| groups.is_empty() || groups.iter().any(|group| row.in_group(group)))
            .collect()
    }

    pub fn rows_mut(&mut self, groups: &[&str]) -> Vec<&mut Row> {
        self.rows
            .iter_mut()
            .map(|(_, row)| row)
            .filter(|row| groups.is_empty() || groups.iter().any(|group| row.in_group(group)))
            .collect()
    }

    /// Append a row.
    pub fn add_row(&mut self, row: Row) -> Result<()> {
        self.rows.add(row)
    }

    /// Return a new detached row carrying the given groups.
    pub fn create_row(&self, groups: &[&str]) -> Row {
        let mut row = Row::new();
        row.set_groups(groups);
        row
    }

    /// Create a row with the given groups, append it, and return it for
    /// cell population.
    pub fn create_and_add_row(&mut self, groups: &[&str]) -> Result<&mut Row> {
        let row = self.create_row(groups);
        self.rows.add(row)?;
        self.rows
            .primary_partition_mut()?
            .last_mut()
            .ok_or_else(|| Error::InvalidState("freshly added row is missing".to_string()))
    }

    /// Return the row at the given index.
    pub fn row(&self, index: usize) -> Result<&Row> {
        self.rows.assert_single_partition("row")?;
        let size = self.rows.len();
        self.rows
            .get(index)
            .map_err(|_| Error::IndexOutOfBounds { index, size })
    }

    pub fn row_mut(&mut self, index: usize) -> Result<&mut Row> {
        self.rows.assert_single_partition("row_mut")?;
        let size = self.rows.len();
        self.rows
            .get_mut(index)
            .map_err(|_| Error::IndexOutOfBounds { index, size })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// A read projection of the column with the given name.
    pub fn column(&self, name: impl Into<Key>) -> Column<'_> {
        Column::new(self, name.into())
    }

    /// A write projection of the column with the given name.
    pub fn column_mut(&mut self, name: impl Into<Key>) -> ColumnMut<'_> {
        let key = name.into();
        ColumnMut::new(self, key)
    }

    /// All column projections, one per known column name.
    pub fn columns(&self, groups: &[&str]) -> Vec<Column<'_>> {
        self.column_names(groups)
            .into_iter()
            .map(|name| Column::new(self, name))
            .collect()
    }

    /// Union of the rows' matching column names, in first-seen order.
    pub fn column_names(&self, groups: &[&str]) -> Vec<Key> {
        let mut names: Vec<Key> = Vec::new();
        for row in self.rows(&[]) {
            for name in row.column_names(groups) {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Number of columns, counted as the minimum matching-cell count
    /// across rows; the most restrictive row wins.
    pub fn column_count(&self, groups: &[&str]) -> usize {
        self.rows(&[])
            .into_iter()
            .map(|row| Cellular::cells(row, groups).len())
            .min()
            .unwrap_or(0)
    }

    /// Give every row the same column sequence.
    ///
    /// Two passes: first the union of all column names is computed, then
    /// every row is reordered to it, padding missing columns with
    /// null-valued cells.
    pub fn align(&mut self) -> Result<()> {
        let column_names = self.column_names(&[]);
        debug!("align: padding rows to {} columns", column_names.len());
        for (_, row) in self.rows.iter_mut() {
            row.order(&column_names)?;
        }
        Ok(())
    }

    /// Group rows by the values of the named columns and reduce each group
    /// to a single representative row.
    ///
    /// Every selected row contributes a composite key: the concatenated
    /// string forms of its values in the named columns, in the order
    /// given. No column names means one key: the whole table becomes a
    /// single group. Rows are deep-copied into their group tables, so the
    /// reduction callback can mutate freely without touching this table.
    ///
    /// For each group, in first-appearance order, the callback receives
    /// the group as a table together with a mutable representative row
    /// (a copy of the group's first row) and is expected to write the
    /// reduced values into it:
    ///
    /// ```
    /// # use cellular::{Aggregate, Table, Result};
    /// # fn demo(table: &Table) -> Result<Table> {
    /// let summary = table.aggregate(
    ///     &["host"],
    ///     |rows, representative| {
    ///         let total = rows.column("time").sum(&[])?;
    ///         representative.set("time", total, &[])?;
    ///         Ok(())
    ///     },
    ///     &[],
    /// )?;
    /// # Ok(summary)
    /// # }
    /// ```
    ///
    /// Keys compare by exact string equality, so values that stringify
    /// identically (numeric `1` and string `"1"`) land in the same group.
    /// Naming a column a selected row does not have is an error.
    pub fn aggregate<K, F>(&self, column_names: &[K], mut reduce: F, groups: &[&str]) -> Result<Table>
    where
        K: Clone + Into<Key>,
        F: FnMut(&Table, &mut Row) -> Result<()>,
    {
        let keys: Vec<Key> = column_names.iter().cloned().map(Into::into).collect();
        let mut order: Vec<String> = Vec::new();
        let mut row_sets: HashMap<String, Table> = HashMap::new();

        for row in self.rows(groups) {
            let mut composite = String::new();
            for key in &keys {
                composite.push_str(&row.cell(key.clone())?.value().to_string());
            }
            if !row_sets.contains_key(&composite) {
                order.push(composite.clone());
            }
            row_sets
                .entry(composite)
                .or_insert_with(Table::new)
                .add_row(row.filtered_copy(groups))?;
        }
        debug!("aggregate: {} rows into {} groups", self.rows(groups).len(), order.len());

        let mut result = Table::new();
        for composite in &order {
            if let Some(row_set) = row_sets.remove(composite) {
                let mut representative = row_set.row(0)?.clone();
                reduce(&row_set, &mut representative)?;
                result.add_row(representative)?;
            }
        }
        Ok(result)
    }

    /// Re-partition the rows by a discriminator. See
    /// [`Collection::partition_by`] for the consecutive-run semantics.
    pub fn partition_by<D, F>(&mut self, discriminator: F) -> &mut Self
    where
        D: PartialEq,
        F: FnMut(&Row) -> D,
    {
        self.rows.partition_by(discriminator);
        self
    }

    /// Reduce row partitions back to a single partition. See
    /// [`Collection::fork`].
    pub fn fork<F>(&mut self, f: F) -> &mut Self
    where
        F: FnMut(Collection<Row>, &mut Collection<Row>),
    {
        self.rows.fork(f);
        self
    }

    /// Stable-sort the rows of each partition.
    pub fn sort<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        self.rows.sort(compare);
        self
    }

    /// Retain only the rows for which the predicate holds.
    pub fn filter<F>(&mut self, predicate: F) -> &mut Self
    where
        F: FnMut(&Row, &Key) -> bool,
    {
        self.rows.filter(predicate);
        self
    }

    /// The underlying row collection.
    pub fn collection(&self) -> &Collection<Row> {
        &self.rows
    }

    pub fn collection_mut(&mut self) -> &mut Collection<Row> {
        &mut self.rows
    }

    /// Array representation: one entry per row.
    pub fn to_array(&self, groups: &[&str]) -> Vec<Vec<(Key, Value)>> {
        self.rows(&[])
            .into_iter()
            .map(|row| row.to_array(groups))
            .collect()
    }

    /// JSON rendering: an array of row renderings.
    pub fn to_json(&self, groups: &[&str]) -> JsonValue {
        JsonValue::Array(
            self.rows(&[])
                .into_iter()
                .map(|row| row.to_json(groups))
                .collect(),
        )
    }
}

impl Cellular for Table {
    fn cells(&self, groups: &[&str]) -> Vec<&Cell> {
        self.rows(&[])
            .into_iter()
            .flat_map(|row| row.cells(groups))
            .collect()
    }
}

impl CellularMut for Table {
    fn cells_mut(&mut self, groups: &[&str]) -> Vec<&mut Cell> {
        self.rows_mut(&[])
            .into_iter()
            .flat_map(|row| row.cells_mut(groups))
            .collect()
    }
}

impl Attributed for Table {
    fn attribute_bag(&self) -> &AttributeBag {
        &self.attributes
    }

    fn attribute_bag_mut(&mut self) -> &mut AttributeBag {
        &mut self.attributes
    }
}
