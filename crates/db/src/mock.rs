//! `MemoryJobStore` — an in-process test double for `JobStore`.
//!
//! Follows the same observable rules as the MongoDB-backed store: identities
//! are ObjectIds, malformed identities become the zero id, updates never
//! touch `company`, and deletes always acknowledge.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{
    CreateJobListingInput, DeleteJobResponse, JobDocument, JobListing, UpdateJobListingInput,
};
use crate::repository::jobs::parse_object_id;
use crate::{DbError, JobStore};

/// Listings kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryJobStore {
    docs: Arc<RwLock<Vec<JobDocument>>>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listings currently stored.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn get_job(&self, id: &str) -> Result<JobListing, DbError> {
        let oid = parse_object_id(id);
        self.docs
            .read()
            .await
            .iter()
            .find(|d| d.id == oid)
            .cloned()
            .map(JobListing::from)
            .ok_or(DbError::NotFound)
    }

    async fn get_jobs(&self) -> Result<Vec<JobListing>, DbError> {
        Ok(self
            .docs
            .read()
            .await
            .iter()
            .cloned()
            .map(JobListing::from)
            .collect())
    }

    async fn create_job_listing(
        &self,
        input: CreateJobListingInput,
    ) -> Result<JobListing, DbError> {
        let id = ObjectId::new();
        self.docs.write().await.push(JobDocument {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            company: input.company.clone(),
            url: input.url.clone(),
        });
        Ok(JobListing::from_input(id, input))
    }

    async fn update_job_listing(
        &self,
        id: &str,
        input: UpdateJobListingInput,
    ) -> Result<JobListing, DbError> {
        let oid = parse_object_id(id);
        let mut docs = self.docs.write().await;
        let doc = docs.iter_mut().find(|d| d.id == oid).ok_or(DbError::NotFound)?;

        if let Some(title) = input.title {
            doc.title = title;
        }
        if let Some(description) = input.description {
            doc.description = description;
        }
        if let Some(url) = input.url {
            doc.url = url;
        }
        Ok(JobListing::from(doc.clone()))
    }

    async fn delete_job_listing(&self, id: &str) -> Result<DeleteJobResponse, DbError> {
        let oid = parse_object_id(id);
        let mut docs = self.docs.write().await;
        if let Some(pos) = docs.iter().position(|d| d.id == oid) {
            docs.remove(pos);
        }
        Ok(DeleteJobResponse {
            delete_job_id: Some(id.to_string()),
        })
    }
}
