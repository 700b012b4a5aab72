use crate::builder::RowBuilder;
use crate::partition::Key;
use crate::row::Row;
use crate::table::Table;

/// Fluent builder for a table.
///
/// Rows are described with child [`RowBuilder`]s; on
/// [`build`](TableBuilder::build) the column names of all rows are
/// unified and every row is padded with null cells for the columns it
/// lacks, so the resulting table is always aligned.
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    rows: Vec<RowBuilder>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a builder from existing rows, cloning their cells.
    pub fn from_rows<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Self {
        TableBuilder {
            rows: rows.into_iter().map(RowBuilder::from_row).collect(),
        }
    }

    /// Start a new row with the given groups. The table builder moves
    /// into the row builder; get it back with [`RowBuilder::end`].
    pub fn row(self, groups: &[&str]) -> RowBuilder {
        RowBuilder::attached(self, groups)
    }

    /// Append a ready row builder.
    pub fn add_row(mut self, row: RowBuilder) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(&self) -> &[RowBuilder] {
        &self.rows
    }

    pub(crate) fn push_row(&mut self, row: RowBuilder) {
        self.rows.push(row);
    }

    /// Build the table, aligning all rows to the unified column set.
    pub fn build(mut self) -> Table {
        let mut column_names: Vec<Key> = Vec::new();
        for row in &self.rows {
            for name in row.column_names() {
                if !column_names.contains(name) {
                    column_names.push(name.clone());
                }
            }
        }
        for row in &mut self.rows {
            row.order(&column_names);
        }
        Table::from_rows(self.rows.into_iter().map(RowBuilder::build).collect())
    }
}
