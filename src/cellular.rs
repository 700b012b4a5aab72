//! Capability traits shared by every cell-bearing container.
//!
//! `Row`, `Table`, `Workspace` and the column projections all answer the
//! same questions (which cells match these groups, what do they sum to),
//! so the answers are implemented once here against a single `cells`
//! contract.

use crate::cell::Cell;
use crate::error::Result;
use crate::reduce;
use crate::value::Value;

/// Group-filtered read access to contained cells.
pub trait Cellular {
    /// Return the cells matching the given groups. No groups selects every
    /// cell; otherwise a cell matches when it belongs to any requested
    /// group.
    fn cells(&self, groups: &[&str]) -> Vec<&Cell>;

    /// The scalar values of the matching cells, in cell order.
    fn values(&self, groups: &[&str]) -> Vec<Value> {
        self.cells(groups)
            .into_iter()
            .map(|cell| cell.value().clone())
            .collect()
    }
}

/// Group-filtered write access to contained cells.
pub trait CellularMut: Cellular {
    fn cells_mut(&mut self, groups: &[&str]) -> Vec<&mut Cell>;

    /// Replace each matching cell's value with the closure's return value.
    fn map_values<F>(&mut self, mut f: F, groups: &[&str])
    where
        Self: Sized,
        F: FnMut(&Cell) -> Value,
    {
        for cell in self.cells_mut(groups) {
            let value = f(cell);
            cell.set_value(value);
        }
    }

    /// Assign the same value to each matching cell.
    fn fill(&mut self, value: Value, groups: &[&str]) {
        for cell in self.cells_mut(groups) {
            cell.set_value(value.clone());
        }
    }
}

/// Aggregate statistics over the matching cells' values.
///
/// Implemented once for every [`Cellular`] type; the arithmetic lives in
/// [`reduce`](crate::reduce).
pub trait Aggregate: Cellular {
    fn sum(&self, groups: &[&str]) -> Result<Value> {
        reduce::sum(&self.values(groups))
    }

    fn min(&self, groups: &[&str]) -> Result<Value> {
        reduce::min(&self.values(groups))
    }

    fn max(&self, groups: &[&str]) -> Result<Value> {
        reduce::max(&self.values(groups))
    }

    fn avg(&self, groups: &[&str]) -> Result<Value> {
        reduce::avg(&self.values(groups))
    }

    fn median(&self, groups: &[&str], ceil: bool) -> Result<Value> {
        reduce::median(&self.values(groups), ceil)
    }
}

impl<T: Cellular> Aggregate for T {}

/// A lone cell aggregates over itself, so a `Cell` can stand wherever a
/// row or column is accepted by the reducers.
impl Cellular for Cell {
    fn cells(&self, groups: &[&str]) -> Vec<&Cell> {
        if self.in_any_group(groups) {
            vec![self]
        } else {
            Vec::new()
        }
    }
}
