//! Database seeding: recreate the database, create tables, insert rows.

use airport::{Dataset, Schema};
use tracing::{info, warn};

use super::session::Session;
use crate::report::RunReport;

/// Drives a [`Session`] through the seeding procedure, recording every step.
///
/// Steps never abort the run. A failed table creation is logged and the
/// next table is attempted; rows that depend on it are still tried and fail
/// on their own.
pub struct Seeder {
    session: Session,
    schema: Schema,
    report: RunReport,
}

impl Seeder {
    /// Creates a new seeder over an open session.
    pub fn new(session: Session, schema: Schema) -> Self {
        Self {
            session,
            schema,
            report: RunReport::default(),
        }
    }

    /// Drops, recreates and selects the target database.
    pub async fn reset_database(&mut self, name: &str) {
        let step = self.session.drop_database(name).await;
        self.report.record(step);
        let step = self.session.create_database(name).await;
        self.report.record(step);
        let step = self.session.select_database(name).await;
        self.report.record(step);
    }

    /// Creates every table of the schema, in schema order.
    pub async fn create_tables(&mut self) {
        info!("Creating {} tables...", self.schema.len());

        for table in self.schema.tables() {
            let step = self.session.create_table(table).await;
            self.report.record(step);
        }

        let created = self.report.tables_created();
        if created == self.schema.len() {
            info!("All tables created successfully.");
        } else {
            warn!("Created {} of {} tables", created, self.schema.len());
        }
    }

    /// Inserts the dataset table by table in schema order, row by row in
    /// dataset order.
    pub async fn seed_dataset(&mut self, dataset: &Dataset) {
        for name in dataset.table_names() {
            if self.schema.get(name).is_none() {
                warn!(table = name, "Skipping rows for {name}: not part of the schema");
            }
        }

        for table in self.schema.tables() {
            let Some(rows) = dataset.rows(table.name) else {
                warn!(table = table.name, "No seed rows for {}", table.name);
                continue;
            };

            info!("Seeding {} rows into {}...", rows.len(), table.name);
            for row in rows {
                let step = self.session.insert_row(table.name, row).await;
                self.report.record(step);
            }
        }

        info!("Seeded {} rows", self.report.rows_inserted());
    }

    /// Lists the tables of the selected database into the report.
    pub async fn list_tables(&mut self) -> &[String] {
        let (tables, step) = self.session.list_tables().await;
        self.report.record(step);
        self.report.tables = tables;
        &self.report.tables
    }

    /// Closes the session and returns everything that happened.
    pub async fn finish(mut self) -> RunReport {
        let step = self.session.close().await;
        self.report.record(step);
        self.report
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Operation;
    use airport::{Row, SeedValue};

    #[tokio::test]
    async fn test_every_step_attempted_when_statements_fail() {
        let dataset = Dataset::builtin().unwrap();
        let mut seeder = Seeder::new(Session::closed(), Schema::airport());

        seeder.reset_database("iprodamod_db").await;
        seeder.create_tables().await;
        seeder.seed_dataset(&dataset).await;
        assert!(seeder.list_tables().await.is_empty());
        let report = seeder.finish().await;

        let attempts = |op: Operation| report.steps.iter().filter(|s| s.operation == op).count();
        assert_eq!(attempts(Operation::DropDatabase), 1);
        assert_eq!(attempts(Operation::CreateTable), 13);
        assert_eq!(attempts(Operation::InsertRow), 130);
        assert_eq!(attempts(Operation::ListTables), 1);

        // Closing an already closed session is the one step that succeeds.
        assert_eq!(report.failure_count(), report.steps.len() - 1);
        assert_eq!(report.steps.last().unwrap().operation, Operation::CloseConnection);
    }

    #[tokio::test]
    async fn test_rows_follow_schema_order() {
        let dataset = Dataset::builtin().unwrap();
        let mut seeder = Seeder::new(Session::closed(), Schema::airport());
        seeder.seed_dataset(&dataset).await;

        let mut seen: Vec<&str> = Vec::new();
        for step in &seeder.report().steps {
            if seen.last() != Some(&step.target.as_str()) {
                seen.push(step.target.as_str());
            }
        }
        assert_eq!(seen, seeder.schema().names());
    }

    #[tokio::test]
    async fn test_unknown_dataset_table_is_skipped() {
        let mut dataset = Dataset::default();
        dataset.set_rows("hangar", vec![Row(vec![SeedValue::Int(1)])]);

        let mut seeder = Seeder::new(Session::closed(), Schema::airport());
        seeder.seed_dataset(&dataset).await;
        assert!(seeder.report().steps.is_empty());
    }
}
