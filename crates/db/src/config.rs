//! Connection settings for the job-listing store.

use std::time::Duration;

/// Address of the document store. Not read from the environment.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "graphql-job-board";
pub const DEFAULT_COLLECTION: &str = "jobs";

/// Bound applied to connection setup and to every individual request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub timeout: Duration,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl DbConfig {
    /// Same database and collection, different server address.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_job_board() {
        let cfg = DbConfig::default();
        assert_eq!(cfg.uri, "mongodb://localhost:27017");
        assert_eq!(cfg.database, "graphql-job-board");
        assert_eq!(cfg.collection, "jobs");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn with_uri_keeps_database_and_collection() {
        let cfg = DbConfig::with_uri("mongodb://db.internal:27017");
        assert_eq!(cfg.uri, "mongodb://db.internal:27017");
        assert_eq!(cfg.database, DEFAULT_DATABASE);
        assert_eq!(cfg.collection, DEFAULT_COLLECTION);
    }
}
