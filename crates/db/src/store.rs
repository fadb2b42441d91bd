//! The `JobStore` trait — the contract the resolver layer calls into.

use async_trait::async_trait;

use crate::models::{CreateJobListingInput, DeleteJobResponse, JobListing, UpdateJobListingInput};
use crate::repository::jobs;
use crate::{DbError, DbHandle};

/// CRUD over job listings.
///
/// Implementations perform no coordination of their own; concurrent calls
/// are independent requests.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Fails with [`DbError::NotFound`] when nothing matches `id`.
    async fn get_job(&self, id: &str) -> Result<JobListing, DbError>;

    async fn get_jobs(&self) -> Result<Vec<JobListing>, DbError>;

    async fn create_job_listing(&self, input: CreateJobListingInput)
        -> Result<JobListing, DbError>;

    /// Fails with [`DbError::NotFound`] when nothing matches `id`.
    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing, DbError>;

    /// Always acknowledges `id`, even when no listing was removed.
    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse, DbError>;
}

#[async_trait]
impl JobStore for DbHandle {
    async fn get_job(&self, id: &str) -> Result<JobListing, DbError> {
        jobs::get_job(self, id).await
    }

    async fn get_jobs(&self) -> Result<Vec<JobListing>, DbError> {
        jobs::get_jobs(self).await
    }

    async fn create_job_listing(
        &self,
        input: CreateJobListingInput,
    ) -> Result<JobListing, DbError> {
        jobs::create_job_listing(self, input).await
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing, DbError> {
        jobs::update_job_listing(self, id, input).await
    }

    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse, DbError> {
        jobs::delete_job_listing(self, id).await
    }
}
