//! Record types exchanged with callers, plus the stored document shape.
//!
//! The boundary types carry no behaviour. [`JobDocument`] is the only type
//! that knows the store keeps `_id` as a native ObjectId.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// boundary records
// ---------------------------------------------------------------------------

/// A job listing as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    /// Hex form of the store-assigned ObjectId.
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobListingInput {
    pub title: String,
    pub description: String,
    pub company: String,
    pub url: String,
}

/// Partial update. `None` leaves the stored value untouched.
///
/// There is no `company` field: a listing's company cannot be changed
/// through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateJobListingInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteJobResponse {
    #[serde(
        rename = "deleteJobId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_job_id: Option<String>,
}

// ---------------------------------------------------------------------------
// stored document
// ---------------------------------------------------------------------------

/// A document in the `jobs` collection.
///
/// Missing text fields decode as empty strings rather than failing the read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub url: String,
}

impl From<JobDocument> for JobListing {
    fn from(doc: JobDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            title: doc.title,
            description: doc.description,
            company: doc.company,
            url: doc.url,
        }
    }
}

impl JobListing {
    /// Combine a freshly assigned identity with the fields that were inserted.
    pub fn from_input(id: ObjectId, input: CreateJobListingInput) -> Self {
        Self {
            id: id.to_hex(),
            title: input.title,
            description: input.description,
            company: input.company,
            url: input.url,
        }
    }
}
