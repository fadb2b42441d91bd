//! `db` crate — data-access layer for the job board.
//!
//! Owns the document-store connection, the record types exchanged with
//! callers, and one repository function per CRUD operation on job listings.
//! Callers (a GraphQL resolver layer, the `job-board` CLI) talk to it through
//! the [`JobStore`] trait.

pub mod config;
pub mod error;
pub mod mock;
pub mod models;
pub mod pool;
pub mod repository;
pub mod store;

pub use config::DbConfig;
pub use error::DbError;
pub use models::{CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput};
pub use pool::{connect, connect_with, DbHandle};
pub use store::JobStore;

pub use mongodb;
