//! The project store seam and its MongoDB implementation.

use bson::oid::ObjectId;
use futures::stream::TryStreamExt;
use mongodb::options::FindOptions;
use mongodb::{Client, Collection};

use crate::error::StoreError;
use crate::models::project::{ProjectSubmission, StoredProject};

/// Database holding the project collection.
const DATABASE_NAME: &str = "project_db";

/// Collection the submissions land in.
const COLLECTION_NAME: &str = "projects";

/// Fixed cap on the number of documents a listing returns.
pub const MAX_LISTED_PROJECTS: i64 = 500;

/// Persistence operations for project submissions.
///
/// Handlers program against this trait; [`MongoProjectStore`] is the
/// production implementation. Tests supply in-memory fakes so the full
/// request flow runs without a live server.
#[async_trait::async_trait]
pub trait ProjectStore: Send + Sync + 'static {
    /// Insert the submission as a new document and return the
    /// store-assigned identifier.
    ///
    /// No uniqueness constraint applies beyond `_id` itself: identical
    /// submissions are stored as separate documents.
    async fn create_project(&self, submission: &ProjectSubmission) -> Result<ObjectId, StoreError>;

    /// Return up to `limit` stored documents in store-native order.
    ///
    /// No sort is applied; the contract promises "some order" only.
    async fn list_projects(&self, limit: i64) -> Result<Vec<StoredProject>, StoreError>;
}

/// [`ProjectStore`] backed by the `projects` collection in MongoDB.
///
/// Holds typed collection handles off the process-wide client. Cloning is
/// cheap and the handles are safe for concurrent use by in-flight requests.
#[derive(Clone)]
pub struct MongoProjectStore {
    submissions: Collection<ProjectSubmission>,
    documents: Collection<StoredProject>,
}

impl MongoProjectStore {
    pub fn new(client: &Client) -> Self {
        let database = client.database(DATABASE_NAME);
        Self {
            submissions: database.collection(COLLECTION_NAME),
            documents: database.collection(COLLECTION_NAME),
        }
    }
}

#[async_trait::async_trait]
impl ProjectStore for MongoProjectStore {
    async fn create_project(&self, submission: &ProjectSubmission) -> Result<ObjectId, StoreError> {
        let result = self.submissions.insert_one(submission, None).await?;

        // The driver assigns an ObjectId when the document carries no _id;
        // anything else here means the collection is being written to by
        // something other than this service.
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            StoreError::Internal(format!(
                "inserted id was not an ObjectId: {}",
                result.inserted_id
            ))
        })?;

        tracing::debug!(%id, "Stored project submission");
        Ok(id)
    }

    async fn list_projects(&self, limit: i64) -> Result<Vec<StoredProject>, StoreError> {
        let options = FindOptions::builder().limit(limit).build();
        let cursor = self.documents.find(bson::doc! {}, options).await?;
        let projects = cursor.try_collect().await?;
        Ok(projects)
    }
}
