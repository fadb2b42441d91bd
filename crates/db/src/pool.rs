//! Document-store connection handle.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReadPreference, SelectionCriteria};
use mongodb::{Client, Collection};
use tracing::info;

use crate::models::JobDocument;
use crate::repository::bounded;
use crate::{DbConfig, DbError};

const APP_NAME: &str = "job-board";

/// Shared handle to the job-listing store.
///
/// Built once at start-up and passed by reference into every operation. The
/// driver client is internally pooled, so clones share connections.
#[derive(Debug, Clone)]
pub struct DbHandle {
    client: Client,
    config: DbConfig,
}

impl DbHandle {
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    pub(crate) fn jobs(&self) -> Collection<JobDocument> {
        self.client
            .database(&self.config.database)
            .collection(&self.config.collection)
    }

    /// Round-trip a `ping` command to the primary node.
    pub async fn ping(&self) -> Result<(), DbError> {
        let db = self.client.database(&self.config.database);
        bounded("ping", self.config.timeout, async {
            db.run_command(doc! { "ping": 1 })
                .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
                .await
                .map(|_| ())
        })
        .await
    }
}

/// Connect to the fixed job-board store and verify the primary is reachable.
pub async fn connect() -> Result<DbHandle, DbError> {
    connect_with(DbConfig::default()).await
}

/// Connect using explicit settings.
///
/// Driver connect and server-selection timeouts are both set to
/// `config.timeout`. No retry is attempted if the health check fails.
pub async fn connect_with(config: DbConfig) -> Result<DbHandle, DbError> {
    info!(uri = %config.uri, database = %config.database, "Connecting to document store");

    let mut options = ClientOptions::parse(config.uri.as_str()).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.connect_timeout = Some(config.timeout);
    options.server_selection_timeout = Some(config.timeout);

    let client = Client::with_options(options)?;
    let handle = DbHandle { client, config };

    handle.ping().await?;
    info!("Primary node is reachable");
    Ok(handle)
}
