//! Drops, recreates and seeds the airport database.
//!
//! Run with:
//! ```
//! DATABASE_PASSWORD=... cargo run -p seeder --bin seed
//! ```

use std::process::ExitCode;

use airport::{Dataset, Schema};
use anyhow::Context;
use seeder::SeedConfig;
use tracing::dispatcher::DefaultGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the subscriber for the lifetime of the returned guard.
fn init_logging() -> DefaultGuard {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .set_default()
}

fn load_dataset(config: &SeedConfig) -> anyhow::Result<Dataset> {
    let source = config
        .seed_data_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled dataset".to_string());

    config
        .load_dataset()
        .with_context(|| format!("Failed to load seed data from {source}"))
}

// Current-thread runtime: the subscriber guard is thread-local and the run is
// sequential anyway.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _logging = init_logging();

    let config = SeedConfig::from_env();
    let dataset = match load_dataset(&config) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let report = match seeder::run(&config, &Schema::airport(), &dataset).await {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Tables created: {}", report.tables_created());
    tracing::info!("  Rows inserted: {}", report.rows_inserted());
    tracing::info!("  Tables listed: {}", report.tables.len());
    if !report.is_clean() {
        tracing::warn!("  Failed steps: {}", report.failure_count());
        for step in report.failures() {
            tracing::warn!(
                "    {} {}: {}",
                step.operation,
                step.target,
                step.error.as_deref().unwrap_or_default()
            );
        }
    }

    ExitCode::SUCCESS
}
