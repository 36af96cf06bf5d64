//! Single MySQL session used for a whole run.
//!
//! Every public operation catches its own error, logs it with the operation
//! and target, and hands back a [`StepReport`]. Only [`Session::connect`]
//! returns an error to the caller.

use airport::{Row, SeedValue, TableDefinition};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tracing::{debug, error, info};

use crate::config::DatabaseConfig;
use crate::errors::SeedError;
use crate::report::{Operation, StepReport};
use crate::statements;

/// An open (or closed) connection to the database server.
///
/// The connection is released by [`Session::close`], or when the session is
/// dropped.
pub struct Session {
    conn: Option<MySqlConnection>,
    database: Option<String>,
}

impl Session {
    /// Connects to the server without selecting a database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, SeedError> {
        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password);

        let conn = MySqlConnection::connect_with(&options)
            .await
            .map_err(|source| SeedError::Connect {
                host: config.host.clone(),
                port: config.port,
                source,
            })?;

        info!("Database connection established.");
        Ok(Self {
            conn: Some(conn),
            database: None,
        })
    }

    #[cfg(test)]
    pub(crate) fn closed() -> Self {
        Self {
            conn: None,
            database: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Database selected by the last successful [`Session::select_database`].
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    fn conn(&mut self) -> Result<&mut MySqlConnection, SeedError> {
        self.conn.as_mut().ok_or(SeedError::SessionClosed)
    }

    /// Runs a statement over the text protocol. `USE` cannot be prepared, so
    /// all DDL goes this way.
    async fn execute_raw(&mut self, sql: &str) -> Result<(), SeedError> {
        let conn = self.conn()?;
        sqlx::raw_sql(sql).execute(conn).await?;
        Ok(())
    }

    pub async fn drop_database(&mut self, name: &str) -> StepReport {
        info!(database = name, "Deleting database with the name: {name}");
        let result = self.execute_raw(&statements::drop_database(name)).await;
        match &result {
            Ok(()) => {
                if self.database.as_deref() == Some(name) {
                    self.database = None;
                }
                info!(database = name, "Database {name} deleted successfully.");
            }
            Err(e) => error!(database = name, "Error deleting database: {e}"),
        }
        StepReport::from_result(Operation::DropDatabase, name, &result)
    }

    pub async fn create_database(&mut self, name: &str) -> StepReport {
        info!(database = name, "Creating database with the name: {name}");
        let result = self.execute_raw(&statements::create_database(name)).await;
        if let Err(e) = &result {
            error!(database = name, "Error creating database: {e}");
        }
        StepReport::from_result(Operation::CreateDatabase, name, &result)
    }

    pub async fn select_database(&mut self, name: &str) -> StepReport {
        info!(database = name, "Selecting database: {name}");
        let result = self.execute_raw(&statements::use_database(name)).await;
        match &result {
            Ok(()) => self.database = Some(name.to_string()),
            Err(e) => error!(database = name, "Error selecting database: {e}"),
        }
        StepReport::from_result(Operation::SelectDatabase, name, &result)
    }

    pub async fn create_table(&mut self, table: &TableDefinition) -> StepReport {
        let result = self.execute_raw(&table.ddl).await;
        match &result {
            Ok(()) => info!(table = table.name, "Created Table {}", table.name),
            Err(e) => error!(
                table = table.name,
                "Database error creating table {}, {e}", table.name
            ),
        }
        StepReport::from_result(Operation::CreateTable, table.name, &result)
    }

    /// Inserts one row with every value bound as a parameter.
    pub async fn insert_row(&mut self, table: &str, row: &Row) -> StepReport {
        let sql = statements::insert_row(table, row.len());
        info!(table, "Executing query: {sql} with values {row}");

        let result = self.try_insert_row(&sql, row).await;
        match &result {
            Ok(()) => info!(table, "{sql} - records inserted"),
            Err(e) => error!(table, "Error inserting rows: {sql}, {e}"),
        }
        StepReport::from_result(Operation::InsertRow, table, &result)
    }

    async fn try_insert_row(&mut self, sql: &str, row: &Row) -> Result<(), SeedError> {
        let mut query = sqlx::query(sql);
        for value in row.values() {
            query = match value {
                SeedValue::Int(v) => query.bind(*v),
                SeedValue::Text(s) => query.bind(s.as_str()),
                SeedValue::Timestamp { timestamp } => query.bind(timestamp.as_datetime()),
                SeedValue::Null => query.bind(None::<i64>),
            };
        }

        let conn = self.conn()?;
        query.execute(conn).await?;
        Ok(())
    }

    /// Lists and logs the tables of the selected database.
    pub async fn list_tables(&mut self) -> (Vec<String>, StepReport) {
        let target = self.database.clone().unwrap_or_default();
        let (tables, result) = match self.try_list_tables().await {
            Ok(tables) => {
                info!("Tables in the selected database:");
                for table in &tables {
                    info!("{table}");
                }
                (tables, Ok(()))
            }
            Err(e) => {
                error!("Error fetching tables: {e}");
                (Vec::new(), Err(e))
            }
        };

        let report = StepReport::from_result(Operation::ListTables, target, &result);
        (tables, report)
    }

    async fn try_list_tables(&mut self) -> Result<Vec<String>, SeedError> {
        let conn = self.conn()?;
        let tables: Vec<String> = sqlx::query_scalar(statements::LIST_TABLES)
            .fetch_all(conn)
            .await?;
        Ok(tables)
    }

    /// Closes the connection. Closing an already closed session does nothing.
    pub async fn close(&mut self) -> StepReport {
        let target = self.database.take().unwrap_or_default();
        let result = match self.conn.take() {
            Some(conn) => conn.close().await.map_err(SeedError::from),
            None => {
                debug!("Database connection already closed");
                Ok(())
            }
        };

        match &result {
            Ok(()) => info!("Database connection closed."),
            Err(e) => error!("Error closing the connection: {e}"),
        }
        StepReport::from_result(Operation::CloseConnection, target, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airport::schema::LUCHTHAVEN;

    #[tokio::test]
    async fn test_closed_session_reports_failures() {
        let mut session = Session::closed();
        assert!(!session.is_open());

        let step = session.drop_database("iprodamod_db").await;
        assert_eq!(step.operation, Operation::DropDatabase);
        assert_eq!(step.error.as_deref(), Some("Session is closed"));

        let step = session.create_table(&LUCHTHAVEN).await;
        assert_eq!(step.target, "luchthaven");
        assert!(!step.succeeded());

        let row = Row(vec![SeedValue::Int(1), "Schiphol".into()]);
        assert!(!session.insert_row("luchthaven", &row).await.succeeded());

        let (tables, step) = session.list_tables().await;
        assert!(tables.is_empty());
        assert!(!step.succeeded());
    }

    #[tokio::test]
    async fn test_failed_select_keeps_previous_database() {
        let mut session = Session::closed();
        assert!(!session.select_database("iprodamod_db").await.succeeded());
        assert_eq!(session.database(), None);
    }

    #[tokio::test]
    async fn test_close_is_idempotent() {
        let mut session = Session::closed();
        assert!(session.close().await.succeeded());
        assert!(session.close().await.succeeded());
    }
}
