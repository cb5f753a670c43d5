//! Project submission entity model and DTOs.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// The ten-field project intake payload.
///
/// This is both the request body for `POST /project` and the exact shape
/// inserted into the `projects` collection (the store adds `_id`). Field
/// names are camelCase on the wire and in the stored document. Every field
/// is a required string; none is semantically validated, so any text value
/// (including the empty string) is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSubmission {
    pub client_name: String,
    pub project_name: String,
    /// Free-form; not validated as a number.
    pub budget: String,
    /// Free-form; not validated as a date.
    pub deadline: String,
    /// Contact address as submitted; no format validation.
    pub email: String,
    pub phone: String,
    pub address: String,
    pub description: String,
    pub requirements: String,
    /// Free-form label; there is no status state machine.
    pub status: String,
}

/// A document read back from the `projects` collection: the submission
/// fields plus the store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProject {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub submission: ProjectSubmission,
}

/// Wire DTO for `GET /projects`: a stored document with `_id` rendered as
/// its 24-character hex string.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub submission: ProjectSubmission,
}

impl From<StoredProject> for ProjectDocument {
    fn from(stored: StoredProject) -> Self {
        Self {
            id: stored.id.to_hex(),
            submission: stored.submission,
        }
    }
}
