//! Seed dataset: rows of typed values keyed by table name.
//!
//! The dataset is plain JSON. Each table maps to an array of rows, each row
//! an array of values in the table's column order:
//!
//! ```json
//! {
//!   "reiziger": [[1, "Jan", "Jansen"]],
//!   "vluchtschema": [[1, 1, {"timestamp": "2024-10-16 10:00:00"}, {"timestamp": "2024-10-16 14:00:00"}, "Dagelijks"]]
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Format of seed timestamps: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// The dataset bundled with the crate.
const BUILTIN_DATASET: &str = include_str!("../data/seed.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: time::error::Parse,
    },
}

/// A `YYYY-MM-DD HH:MM:SS` timestamp without timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(PrimitiveDateTime);

impl Timestamp {
    pub fn parse(value: &str) -> Result<Self, DatasetError> {
        PrimitiveDateTime::parse(value, TIMESTAMP_FORMAT)
            .map(Timestamp)
            .map_err(|source| DatasetError::InvalidTimestamp {
                value: value.to_string(),
                source,
            })
    }

    pub fn as_datetime(&self) -> PrimitiveDateTime {
        self.0
    }
}

impl TryFrom<String> for Timestamp {
    type Error = DatasetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.format(TIMESTAMP_FORMAT) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// A single positional value in a seed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    Int(i64),
    Text(String),
    Timestamp { timestamp: Timestamp },
    Null,
}

impl SeedValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SeedValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SeedValue::Null)
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedValue::Int(v) => write!(f, "{v}"),
            SeedValue::Text(s) => write!(f, "{s:?}"),
            SeedValue::Timestamp { timestamp } => write!(f, "'{timestamp}'"),
            SeedValue::Null => f.write_str("NULL"),
        }
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        SeedValue::Int(value)
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        SeedValue::Text(value.to_string())
    }
}

impl From<Timestamp> for SeedValue {
    fn from(timestamp: Timestamp) -> Self {
        SeedValue::Timestamp { timestamp }
    }
}

/// One row of values, positionally matching the target table's columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row(pub Vec<SeedValue>);

impl Row {
    pub fn values(&self) -> &[SeedValue] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

/// Seed rows keyed by table name.
///
/// Iteration order of the map carries no meaning; the loader walks the
/// schema's creation order and looks tables up here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    tables: BTreeMap<String, Vec<Row>>,
}

impl Dataset {
    /// The bundled airport dataset: ten rows for each of the thirteen tables.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn rows(&self, table: &str) -> Option<&[Row]> {
        self.tables.get(table).map(Vec::as_slice)
    }

    /// Replaces the rows of `table`.
    pub fn set_rows(&mut self, table: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(table.into(), rows);
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn row_count(&self) -> usize {
        self.tables.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_has_ten_rows_per_table() {
        let dataset = Dataset::builtin().unwrap();
        let schema = Schema::airport();

        let mut names: Vec<&str> = dataset.table_names().collect();
        let mut expected = schema.names();
        names.sort_unstable();
        expected.sort_unstable();
        assert_eq!(names, expected);

        for table in schema.tables() {
            let rows = dataset.rows(table.name).unwrap();
            assert_eq!(rows.len(), 10, "{} should have 10 rows", table.name);
        }
        assert_eq!(dataset.row_count(), 130);
    }

    #[test]
    fn test_builtin_rows_match_column_count() {
        let dataset = Dataset::builtin().unwrap();
        for table in Schema::airport().tables() {
            for row in dataset.rows(table.name).unwrap() {
                assert_eq!(
                    row.len(),
                    table.columns.len(),
                    "row {} does not fit {}",
                    row,
                    table.name
                );
            }
        }
    }

    #[test]
    fn test_builtin_foreign_keys_resolve() {
        let dataset = Dataset::builtin().unwrap();
        let schema = Schema::airport();

        for table in schema.tables() {
            for fk in table.foreign_keys {
                let parent = schema.get(fk.references_table).unwrap();
                let parent_col = parent.column_index(fk.references_column).unwrap();
                let parent_ids: HashSet<i64> = dataset
                    .rows(parent.name)
                    .unwrap()
                    .iter()
                    .filter_map(|r| r.values()[parent_col].as_int())
                    .collect();

                let col = table.column_index(fk.column).unwrap();
                for row in dataset.rows(table.name).unwrap() {
                    let value = &row.values()[col];
                    if value.is_null() {
                        continue;
                    }
                    let id = value.as_int().expect("foreign key values are integers");
                    assert!(
                        parent_ids.contains(&id),
                        "{}.{} = {} has no {} row",
                        table.name,
                        fk.column,
                        id,
                        parent.name
                    );
                }
            }
        }
    }

    #[test]
    fn test_builtin_literal_values() {
        let dataset = Dataset::builtin().unwrap();

        let schiphol = &dataset.rows("luchthaven").unwrap()[0];
        assert_eq!(
            schiphol.values(),
            &[
                SeedValue::Int(1),
                "Schiphol".into(),
                "Amsterdam".into(),
                "Nederland".into(),
                "AMS".into(),
            ]
        );

        let schedule = &dataset.rows("vluchtschema").unwrap()[9];
        assert_eq!(
            schedule.values()[2],
            SeedValue::from(Timestamp::parse("2024-10-25 19:00:00").unwrap())
        );
        assert_eq!(schedule.values()[4], SeedValue::from("Dagelijks"));
    }

    #[test]
    fn test_value_json_forms() {
        let row: Row =
            serde_json::from_str(r#"[7, "O'Brien", {"timestamp": "2024-10-16 10:00:00"}, null]"#)
                .unwrap();
        assert_eq!(row.values()[0], SeedValue::Int(7));
        assert_eq!(row.values()[1], SeedValue::Text("O'Brien".to_string()));
        assert!(matches!(row.values()[2], SeedValue::Timestamp { .. }));
        assert!(row.values()[3].is_null());
    }

    #[test]
    fn test_timestamp_format() {
        let ts = Timestamp::parse("2024-10-16 10:00:00").unwrap();
        assert_eq!(ts.to_string(), "2024-10-16 10:00:00");
        assert_eq!(ts.as_datetime().hour(), 10);
    }

    #[test]
    fn test_invalid_timestamp_rejected() {
        assert!(Timestamp::parse("2024-13-16 10:00:00").is_err());
        assert!(Timestamp::parse("16-10-2024").is_err());

        let result = Dataset::from_json_str(
            r#"{"vluchtschema": [[1, 1, {"timestamp": "yesterday"}]]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_row_display() {
        let row = Row(vec![
            SeedValue::Int(1),
            "Gate A1".into(),
            SeedValue::Null,
            Timestamp::parse("2024-10-16 10:00:00").unwrap().into(),
        ]);
        assert_eq!(row.to_string(), r#"(1, "Gate A1", NULL, '2024-10-16 10:00:00')"#);
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_path("/nonexistent/seed.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
