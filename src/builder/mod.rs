//! Fluent construction of tables and rows.
//!
//! ```
//! # use cellular::builder::TableBuilder;
//! # use cellular::Result;
//! # fn build() -> Result<()> {
//! let table = TableBuilder::new()
//!     .row(&[])
//!     .set("host", "web-1", &[])
//!     .set("time", 12, &["perf"])
//!     .end()?
//!     .row(&[])
//!     .set("host", "web-2", &[])
//!     .end()?
//!     .build();
//! assert_eq!(table.row_count(), 2);
//! # Ok(())
//! # }
//! ```

mod row;
mod table;

pub use row::RowBuilder;
pub use table::TableBuilder;
