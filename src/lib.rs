//! In-memory tabular data containers.
//!
//! The crate is built around a generic partitioned [`Collection`]: an
//! ordered, keyed sequence of elements that can be segmented into
//! partitions, transformed per partition, and folded back together. The
//! domain types specialize it for spreadsheet-like data: a [`Table`] of
//! [`Row`]s of [`Cell`]s (plus [`Workspace`] above and [`Column`]
//! projections across), with per-cell group tags selecting the subsets
//! that aggregate statistics run over.
//!
//! ```
//! use cellular::{Aggregate, Table, Value};
//!
//! # fn main() -> cellular::Result<()> {
//! let mut table = Table::new();
//! table.create_and_add_row(&[])?
//!     .set("host", "web-1", &[])?
//!     .set("time", 32, &["perf"])?;
//! table.create_and_add_row(&[])?
//!     .set("host", "web-1", &[])?
//!     .set("time", 16, &["perf"])?;
//!
//! // Statistics over the group-tagged cells.
//! assert_eq!(table.sum(&["perf"])?, Value::Int(48));
//!
//! // Group rows by host, reduce each group to one row.
//! let summary = table.aggregate(
//!     &["host"],
//!     |rows, representative| {
//!         let total = rows.column("time").sum(&[])?;
//!         representative.set("time", total, &[])?;
//!         Ok(())
//!     },
//!     &[],
//! )?;
//! assert_eq!(summary.row_count(), 1);
//! assert_eq!(summary.row(0)?.cell("time")?.value(), &Value::Int(48));
//! # Ok(())
//! # }
//! ```
//!
//! All containers are plain single-threaded data structures; share them
//! across threads only behind external synchronization. `Clone` performs
//! a deep copy and is the one isolation mechanism offered.

pub mod attribute;
pub mod builder;
pub mod cell;
pub mod cellular;
pub mod collection;
pub mod column;
pub mod error;
pub mod partition;
pub mod reduce;
pub mod row;
pub mod table;
pub mod value;
pub mod workspace;

// Re-export commonly used types
pub use attribute::{AttributeBag, Attributed};
pub use builder::{RowBuilder, TableBuilder};
pub use cell::Cell;
pub use cellular::{Aggregate, Cellular, CellularMut};
pub use collection::Collection;
pub use column::{Column, ColumnMut};
pub use error::{Error, Result};
pub use partition::{Key, Partition};
pub use row::Row;
pub use table::Table;
pub use value::Value;
pub use workspace::Workspace;

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
