//! Run configuration, read once from the environment and passed down.

use std::env;
use std::fmt;
use std::path::PathBuf;

use airport::{Dataset, DatasetError};
use serde::{Deserialize, Serialize};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3306;
const DEFAULT_USER: &str = "root";
const DEFAULT_PASSWORD: &str = "password";
const DEFAULT_DATABASE: &str = "iprodamod_db";

/// Server credentials and the name of the database to (re)create.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    /// Database dropped, recreated and seeded on every run.
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            name: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

/// Configuration for a seeding run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    pub database: DatabaseConfig,

    /// JSON dataset to load instead of the bundled one.
    pub seed_data_path: Option<PathBuf>,
}

impl SeedConfig {
    /// Reads `DATABASE_HOST`, `DATABASE_PORT`, `DATABASE_USER`,
    /// `DATABASE_PASSWORD`, `DATABASE_NAME` and `SEED_DATA_PATH`, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SeedConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = DatabaseConfig {
            host: lookup("DATABASE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("DATABASE_PORT")
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT),
            user: lookup("DATABASE_USER").unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: lookup("DATABASE_PASSWORD")
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            name: lookup("DATABASE_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
        };

        Self {
            database,
            seed_data_path: lookup("SEED_DATA_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn with_database_name(mut self, name: impl Into<String>) -> Self {
        self.database.name = name.into();
        self
    }

    pub fn with_seed_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.seed_data_path = Some(path.into());
        self
    }

    /// Loads the configured dataset, or the bundled one if no path is set.
    pub fn load_dataset(&self) -> Result<Dataset, DatasetError> {
        match &self.seed_data_path {
            Some(path) => Dataset::from_path(path),
            None => Dataset::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SeedConfig::from_lookup(|_| None);
        assert_eq!(config.database.host, "127.0.0.1");
        assert_eq!(config.database.port, 3306);
        assert_eq!(config.database.user, "root");
        assert_eq!(config.database.password, "password");
        assert_eq!(config.database.name, "iprodamod_db");
        assert!(config.seed_data_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = SeedConfig::from_lookup(lookup_from(&[
            ("DATABASE_HOST", "db.internal"),
            ("DATABASE_PORT", "3307"),
            ("DATABASE_NAME", "airport_test"),
            ("SEED_DATA_PATH", "/tmp/seed.json"),
        ]));
        assert_eq!(config.database.host, "db.internal");
        assert_eq!(config.database.port, 3307);
        assert_eq!(config.database.name, "airport_test");
        assert_eq!(config.seed_data_path, Some(PathBuf::from("/tmp/seed.json")));
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = SeedConfig::from_lookup(lookup_from(&[("DATABASE_PORT", "mysql")]));
        assert_eq!(config.database.port, 3306);
    }

    #[test]
    fn test_debug_hides_password() {
        let config = SeedConfig::default();
        let debug = format!("{config:?}");
        assert!(!debug.contains("\"password\""));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_load_bundled_dataset() {
        let dataset = SeedConfig::default().load_dataset().unwrap();
        assert_eq!(dataset.row_count(), 130);
    }
}
