//! SQL text for the statements the seeder issues.
//!
//! Identifiers (database and table names) cannot be bound, so they are
//! quoted here. Values never appear in statement text; inserts carry one `?`
//! placeholder per value.

/// Quotes a MySQL identifier with backticks, doubling embedded backticks.
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

pub fn drop_database(name: &str) -> String {
    format!("DROP DATABASE IF EXISTS {}", quote_identifier(name))
}

pub fn create_database(name: &str) -> String {
    format!("CREATE DATABASE IF NOT EXISTS {}", quote_identifier(name))
}

pub fn use_database(name: &str) -> String {
    format!("USE {}", quote_identifier(name))
}

/// Positional insert with `arity` placeholders, in the table's column order.
pub fn insert_row(table: &str, arity: usize) -> String {
    let placeholders = vec!["?"; arity].join(", ");
    format!(
        "INSERT INTO {} VALUES ({placeholders})",
        quote_identifier(table)
    )
}

/// Names of the base tables in the selected database.
pub const LIST_TABLES: &str = r#"
    SELECT CAST(table_name AS CHAR(64))
    FROM information_schema.tables
    WHERE table_schema = DATABASE()
    ORDER BY table_name
"#;
