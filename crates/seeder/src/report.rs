//! Outcome of each step of a seeding run.
//!
//! Every database-facing step yields a [`StepReport`] instead of an error;
//! the run keeps going and the [`RunReport`] collects what happened.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    DropDatabase,
    CreateDatabase,
    SelectDatabase,
    CreateTable,
    InsertRow,
    ListTables,
    CloseConnection,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::DropDatabase => "drop database",
            Operation::CreateDatabase => "create database",
            Operation::SelectDatabase => "select database",
            Operation::CreateTable => "create table",
            Operation::InsertRow => "insert row",
            Operation::ListTables => "list tables",
            Operation::CloseConnection => "close connection",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub operation: Operation,
    /// Database or table the step acted on.
    pub target: String,
    /// Failure message, `None` on success.
    pub error: Option<String>,
}

impl StepReport {
    pub fn from_result<E: fmt::Display>(
        operation: Operation,
        target: impl Into<String>,
        result: &Result<(), E>,
    ) -> Self {
        Self {
            operation,
            target: target.into(),
            error: result.as_ref().err().map(|e| e.to_string()),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Everything a run did, in order.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub steps: Vec<StepReport>,
    /// Table names reported by the final listing.
    pub tables: Vec<String>,
}

impl RunReport {
    pub fn record(&mut self, step: StepReport) {
        self.steps.push(step);
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.succeeded())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn is_clean(&self) -> bool {
        self.failure_count() == 0
    }

    fn successes(&self, operation: Operation) -> usize {
        self.steps
            .iter()
            .filter(|s| s.operation == operation && s.succeeded())
            .count()
    }

    pub fn tables_created(&self) -> usize {
        self.successes(Operation::CreateTable)
    }

    pub fn rows_inserted(&self) -> usize {
        self.successes(Operation::InsertRow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(operation: Operation, target: &str) -> StepReport {
        StepReport::from_result::<String>(operation, target, &Ok(()))
    }

    fn failed(operation: Operation, target: &str) -> StepReport {
        StepReport::from_result(operation, target, &Err("boom".to_string()))
    }

    #[test]
    fn test_counts() {
        let mut report = RunReport::default();
        report.record(ok(Operation::CreateTable, "luchthaven"));
        report.record(failed(Operation::CreateTable, "terminal"));
        report.record(ok(Operation::InsertRow, "luchthaven"));
        report.record(ok(Operation::InsertRow, "luchthaven"));
        report.record(failed(Operation::InsertRow, "terminal"));

        assert_eq!(report.tables_created(), 1);
        assert_eq!(report.rows_inserted(), 2);
        assert_eq!(report.failure_count(), 2);
        assert!(!report.is_clean());

        let targets: Vec<&str> = report.failures().map(|s| s.target.as_str()).collect();
        assert_eq!(targets, vec!["terminal", "terminal"]);
    }

    #[test]
    fn test_failure_message_kept() {
        let step = failed(Operation::SelectDatabase, "iprodamod_db");
        assert_eq!(step.error.as_deref(), Some("boom"));
        assert!(!step.succeeded());
    }

    #[test]
    fn test_empty_report_is_clean() {
        let report = RunReport::default();
        assert!(report.is_clean());
        assert_eq!(report.tables_created(), 0);
    }
}
