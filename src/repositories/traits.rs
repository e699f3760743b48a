use crate::domain::SubmissionStatus;
use crate::error::StoreResult;
use crate::models::ContactSubmission;
use async_trait::async_trait;

/// Repository for persisted contact submissions.
///
/// Provides abstraction over the document store, enabling different
/// implementations (MongoDB, in-memory, test doubles). Records returned by
/// any implementation carry only the logical `id`, never a store-internal key.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Insert a new record.
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()>;

    /// Retrieve one page of records, newest `submitted_at` first.
    ///
    /// `skip` is applied before `limit`. A `None` status matches every record.
    async fn find_page(
        &self,
        status: Option<SubmissionStatus>,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<ContactSubmission>>;

    /// Count records matching the status filter, ignoring pagination.
    async fn count(&self, status: Option<SubmissionStatus>) -> StoreResult<u64>;

    /// Retrieve a single record by its logical ID.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ContactSubmission>>;

    /// Set the status of the record with the given ID.
    ///
    /// Returns `false` when no record matched.
    async fn update_status(&self, id: &str, status: SubmissionStatus) -> StoreResult<bool>;

    /// Check that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
