//! Relational schema for the airport/airline domain.
//!
//! This crate holds everything that describes *what* gets provisioned: the
//! thirteen table definitions with their foreign keys and DDL, the creation
//! order those keys imply, and the seed dataset that fills them. It performs
//! no database I/O; see the `seeder` crate for that.
//!
//! ```rust,ignore
//! use airport::{Dataset, Schema};
//!
//! let schema = Schema::airport();
//! let dataset = Dataset::builtin()?;
//! for table in schema.tables() {
//!     let rows = dataset.rows(table.name).unwrap_or_default();
//!     println!("{}: {} rows", table.name, rows.len());
//! }
//! ```

pub mod dataset;
pub mod schema;

pub use dataset::{Dataset, DatasetError, Row, SeedValue, Timestamp};
pub use schema::{ForeignKey, ReferentialAction, Schema, SchemaError, TableDefinition};
