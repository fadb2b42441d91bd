//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbHandle` and returns a `Result<T, DbError>`.
//! Each call runs inside its own bounded-duration scope; nothing is shared
//! between calls except the handle.

pub mod jobs;

use std::future::IntoFuture;
use std::time::Duration;

use tracing::warn;

use crate::DbError;

/// Run a single driver request, failing with [`DbError::Timeout`] once
/// `after` has elapsed.
pub(crate) async fn bounded<T, F>(op: &'static str, after: Duration, request: F) -> Result<T, DbError>
where
    F: IntoFuture<Output = mongodb::error::Result<T>>,
{
    match tokio::time::timeout(after, request).await {
        Ok(result) => Ok(result?),
        Err(_) => {
            warn!(op, ?after, "request exceeded its time bound");
            Err(DbError::Timeout { op, after })
        }
    }
}
