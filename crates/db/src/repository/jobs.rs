//! Job-listing CRUD operations.
//!
//! Identities arrive as hex strings. They are parsed best-effort: a string
//! that is not a valid ObjectId is replaced by the all-zero id, so the
//! request still goes out and simply matches nothing.

use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, Document};
use mongodb::options::ReturnDocument;
use tracing::debug;

use super::bounded;
use crate::models::{
    CreateJobListingInput, DeleteJobResponse, JobDocument, JobListing, UpdateJobListingInput,
};
use crate::{DbError, DbHandle};

/// Parse a caller-supplied identity, falling back to the zero ObjectId.
pub fn parse_object_id(id: &str) -> ObjectId {
    ObjectId::parse_str(id).unwrap_or_else(|e| {
        debug!(id, error = %e, "identity is not an ObjectId, using zero id");
        ObjectId::from_bytes([0; 12])
    })
}

pub(crate) fn id_filter(id: &str) -> Document {
    doc! { "_id": parse_object_id(id) }
}

/// Build the `$set` body for a partial update.
///
/// Only fields present in `input` are included. `company` never is.
pub fn update_fields(input: &UpdateJobListingInput) -> Document {
    let mut set = Document::new();
    if let Some(title) = &input.title {
        set.insert("title", title.as_str());
    }
    if let Some(description) = &input.description {
        set.insert("description", description.as_str());
    }
    if let Some(url) = &input.url {
        set.insert("url", url.as_str());
    }
    set
}

/// Fetch a single job listing by identity.
pub async fn get_job(db: &DbHandle, id: &str) -> Result<JobListing, DbError> {
    debug!(id, "get_job");
    let filter = id_filter(id);
    let found = bounded("get_job", db.config().timeout, db.jobs().find_one(filter)).await?;
    found.map(JobListing::from).ok_or(DbError::NotFound)
}

/// Return every job listing in the store's natural order.
pub async fn get_jobs(db: &DbHandle) -> Result<Vec<JobListing>, DbError> {
    debug!("get_jobs");
    let jobs = db.jobs();
    let docs: Vec<JobDocument> = bounded("get_jobs", db.config().timeout, async {
        let cursor = jobs.find(doc! {}).await?;
        cursor.try_collect().await
    })
    .await?;

    Ok(docs.into_iter().map(JobListing::from).collect())
}

/// Insert a new job listing and return it with its store-assigned identity.
pub async fn create_job_listing(
    db: &DbHandle,
    input: CreateJobListingInput,
) -> Result<JobListing, DbError> {
    let new_doc = doc! {
        "title": input.title.as_str(),
        "description": input.description.as_str(),
        "url": input.url.as_str(),
        "company": input.company.as_str(),
    };

    let inserted = bounded(
        "create_job_listing",
        db.config().timeout,
        db.jobs().clone_with_type::<Document>().insert_one(new_doc),
    )
    .await?;

    let id = inserted
        .inserted_id
        .as_object_id()
        .ok_or_else(|| DbError::UnexpectedId(inserted.inserted_id.to_string()))?;
    debug!(id = %id, "created job listing");

    Ok(JobListing::from_input(id, input))
}

/// Apply a partial update and return the listing as it is afterwards.
///
/// An input with no fields set does not write anything; the current
/// document is read back instead.
pub async fn update_job_listing(
    db: &DbHandle,
    id: &str,
    input: UpdateJobListingInput,
) -> Result<JobListing, DbError> {
    debug!(id, "update_job_listing");
    let filter = id_filter(id);
    let set = update_fields(&input);
    let timeout = db.config().timeout;
    let jobs = db.jobs();

    let updated = if set.is_empty() {
        bounded("update_job_listing", timeout, jobs.find_one(filter)).await?
    } else {
        bounded(
            "update_job_listing",
            timeout,
            jobs.find_one_and_update(filter, doc! { "$set": set })
                .return_document(ReturnDocument::After),
        )
        .await?
    };

    updated.map(JobListing::from).ok_or(DbError::NotFound)
}

/// Delete a job listing by identity.
///
/// The acknowledgment echoes `id` whether or not a document matched.
pub async fn delete_job_listing(db: &DbHandle, id: &str) -> Result<DeleteJobResponse, DbError> {
    let filter = id_filter(id);
    let result = bounded("delete_job_listing", db.config().timeout, db.jobs().delete_one(filter)).await?;
    debug!(id, deleted = result.deleted_count, "delete_job_listing");

    Ok(DeleteJobResponse {
        delete_job_id: Some(id.to_string()),
    })
}
