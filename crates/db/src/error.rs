//! Typed error type for the db crate.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("job listing not found")]
    NotFound,

    /// The bounded-duration scope around a single request expired.
    #[error("{op} timed out after {after:?}")]
    Timeout { op: &'static str, after: Duration },

    /// `insert_one` handed back an `_id` that is not an ObjectId.
    #[error("unexpected inserted id: {0}")]
    UnexpectedId(String),
}
