use crate::domain::{Budget, EmailAddress, ProjectType, SubmissionId, SubmissionStatus};
use crate::error::{StoreError, StoreResult};
use crate::models::ContactSubmission;
use crate::repositories::traits::SubmissionRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, DateTime as BsonDateTime, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};
use serde::{Deserialize, Serialize};

/// Stored shape of a submission.
///
/// Mirrors [`ContactSubmission`] except that `submittedAt` is a native BSON
/// datetime, so the store sorts it chronologically. The driver-assigned `_id`
/// is not declared and is therefore dropped on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SubmissionDocument {
    id: SubmissionId,
    name: String,
    email: EmailAddress,
    company: Option<String>,
    project_type: ProjectType,
    budget: Option<Budget>,
    message: String,
    status: SubmissionStatus,
    submitted_at: BsonDateTime,
    ip_address: Option<String>,
}

impl From<&ContactSubmission> for SubmissionDocument {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            id: submission.id.clone(),
            name: submission.name.clone(),
            email: submission.email.clone(),
            company: submission.company.clone(),
            project_type: submission.project_type,
            budget: submission.budget,
            message: submission.message.clone(),
            status: submission.status,
            submitted_at: BsonDateTime::from_millis(submission.submitted_at.timestamp_millis()),
            ip_address: submission.ip_address.clone(),
        }
    }
}

impl SubmissionDocument {
    fn into_submission(self) -> StoreResult<ContactSubmission> {
        let millis = self.submitted_at.timestamp_millis();
        let submitted_at = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
            StoreError::CorruptRecord(format!(
                "submission {} has out-of-range submittedAt ({} ms)",
                self.id, millis
            ))
        })?;

        Ok(ContactSubmission {
            id: self.id,
            name: self.name,
            email: self.email,
            company: self.company,
            project_type: self.project_type,
            budget: self.budget,
            message: self.message,
            status: self.status,
            submitted_at,
            ip_address: self.ip_address,
        })
    }
}

fn status_filter(status: Option<SubmissionStatus>) -> Document {
    match status {
        Some(status) => doc! { "status": status.as_str() },
        None => doc! {},
    }
}

/// Submission repository backed by a MongoDB collection.
///
/// Holds driver handles only; the driver manages its own connection pool, so
/// the repository can be shared across requests behind an `Arc`.
pub struct MongoSubmissionRepository {
    database: Database,
    collection: Collection<SubmissionDocument>,
}

impl MongoSubmissionRepository {
    /// Connect to MongoDB and bind to the given database and collection.
    pub async fn connect(uri: &str, db_name: &str, collection_name: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(client.database(db_name), collection_name))
    }

    /// Create a repository over an existing database handle.
    pub fn new(database: Database, collection_name: &str) -> Self {
        let collection = database.collection::<SubmissionDocument>(collection_name);
        Self {
            database,
            collection,
        }
    }

    /// Create the unique `id` index and the listing index.
    pub async fn ensure_indexes(&self) -> StoreResult<()> {
        let indexes = vec![
            IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(IndexOptions::builder().unique(true).build())
                .build(),
            IndexModel::builder()
                .keys(doc! { "status": 1, "submittedAt": -1 })
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::debug!(
            collection = %self.collection.name(),
            "Submission indexes ensured"
        );
        Ok(())
    }
}

#[async_trait]
impl SubmissionRepository for MongoSubmissionRepository {
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()> {
        let document = SubmissionDocument::from(submission);
        self.collection.insert_one(&document).await?;
        Ok(())
    }

    async fn find_page(
        &self,
        status: Option<SubmissionStatus>,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<ContactSubmission>> {
        // A driver limit of 0 means "no limit"
        if limit == 0 {
            return Ok(Vec::new());
        }

        let cursor = self
            .collection
            .find(status_filter(status))
            .sort(doc! { "submittedAt": -1 })
            .skip(skip)
            .limit(i64::try_from(limit).unwrap_or(i64::MAX))
            .await?;

        let documents: Vec<SubmissionDocument> = cursor.try_collect().await?;
        documents
            .into_iter()
            .map(SubmissionDocument::into_submission)
            .collect()
    }

    async fn count(&self, status: Option<SubmissionStatus>) -> StoreResult<u64> {
        Ok(self.collection.count_documents(status_filter(status)).await?)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ContactSubmission>> {
        self.collection
            .find_one(doc! { "id": id })
            .await?
            .map(SubmissionDocument::into_submission)
            .transpose()
    }

    async fn update_status(&self, id: &str, status: SubmissionStatus) -> StoreResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$set": { "status": status.as_str() } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }
}
