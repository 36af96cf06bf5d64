//! One-shot provisioning of the airport database.
//!
//! A run connects to the server, drops and recreates the target database,
//! creates the schema's tables in dependency order, inserts the seed dataset
//! in the same order, lists the resulting tables and closes the connection.
//!
//! The run is best-effort rather than transactional: apart from the initial
//! connection, a failing statement is logged, recorded in the [`RunReport`]
//! and skipped.
//!
//! ```rust,ignore
//! use airport::{Dataset, Schema};
//! use seeder::{run, SeedConfig};
//!
//! let config = SeedConfig::from_env();
//! let report = run(&config, &Schema::airport(), &Dataset::builtin()?).await?;
//! assert!(report.is_clean());
//! ```

pub mod config;
pub mod db;
pub mod errors;
pub mod report;
pub mod statements;

use airport::{Dataset, Schema};
use tracing::{Instrument, info_span};

pub use config::{DatabaseConfig, SeedConfig};
pub use db::{Seeder, Session};
pub use errors::SeedError;
pub use report::{Operation, RunReport, StepReport};

/// Runs the full procedure. The only error returned is a failed connection.
pub async fn run(
    config: &SeedConfig,
    schema: &Schema,
    dataset: &Dataset,
) -> Result<RunReport, SeedError> {
    let database = config.database.name.as_str();
    let span = info_span!("seed_run", database);

    async move {
        let session = Session::connect(&config.database).await?;
        let mut seeder = Seeder::new(session, schema.clone());

        seeder.reset_database(database).await;
        seeder.create_tables().await;
        seeder.seed_dataset(dataset).await;
        seeder.list_tables().await;

        Ok::<_, SeedError>(seeder.finish().await)
    }
    .instrument(span)
    .await
}
