use airport::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Error connecting to MySQL at {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Session is closed")]
    SessionClosed,

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
}
