//! Schema definitions and creation-order validation.
//!
//! A [`Schema`] is an ordered list of [`TableDefinition`]s. Order matters:
//! tables are created, and seeded, in exactly this order, so every table must
//! come after all the tables it references.

mod tables;
mod types;

use std::borrow::Cow;
use std::collections::HashSet;

use thiserror::Error;

pub use tables::*;
pub use types::{ForeignKey, ReferentialAction, TableDefinition};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Table {table} is defined more than once")]
    DuplicateTable { table: String },
    #[error("Table {table} references {references}, which is defined after it")]
    OutOfOrder { table: String, references: String },
    #[error("Table {table} references unknown table {references}")]
    UnknownReference { table: String, references: String },
    #[error("Unknown table: {0}")]
    UnknownTable(String),
}

/// Ordered, validated list of table definitions.
#[derive(Debug, Clone)]
pub struct Schema {
    tables: Vec<TableDefinition>,
}

impl Schema {
    /// Builds a schema, checking that the given order is a valid creation
    /// order (parents before children).
    pub fn new(tables: Vec<TableDefinition>) -> Result<Self, SchemaError> {
        let all_names: HashSet<&str> = tables.iter().map(|t| t.name).collect();
        let mut defined: HashSet<&str> = HashSet::new();

        for table in &tables {
            if !defined.insert(table.name) {
                return Err(SchemaError::DuplicateTable {
                    table: table.name.to_string(),
                });
            }

            for dep in table.dependencies() {
                if dep == table.name || defined.contains(dep) {
                    continue;
                }
                let err = if all_names.contains(dep) {
                    SchemaError::OutOfOrder {
                        table: table.name.to_string(),
                        references: dep.to_string(),
                    }
                } else {
                    SchemaError::UnknownReference {
                        table: table.name.to_string(),
                        references: dep.to_string(),
                    }
                };
                return Err(err);
            }
        }

        Ok(Self { tables })
    }

    /// The thirteen-table airport schema.
    pub fn airport() -> Self {
        Self {
            tables: ALL_TABLES.iter().map(|t| (*t).clone()).collect(),
        }
    }

    /// Returns a copy of this schema with one table's DDL replaced.
    pub fn with_ddl_override(
        &self,
        table: &str,
        ddl: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let mut schema = self.clone();
        let definition = schema
            .tables
            .iter_mut()
            .find(|t| t.name == table)
            .ok_or_else(|| SchemaError::UnknownTable(table.to_string()))?;
        definition.ddl = Cow::Owned(ddl.into());
        Ok(schema)
    }

    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    pub fn get(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tables.iter().map(|t| t.name).collect()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::airport()
    }
}
