use crate::domain::SubmissionStatus;
use crate::error::{StoreError, StoreResult};
use crate::models::ContactSubmission;
use crate::repositories::traits::SubmissionRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Submission repository held in process memory.
///
/// Used for local runs without a database (`MONGO_URL=memory://`) and in
/// tests. Records are kept in insertion order; listing sorts by
/// `submitted_at` newest first, with later insertions winning ties.
#[derive(Default)]
pub struct InMemorySubmissionRepository {
    submissions: RwLock<Vec<ContactSubmission>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.submissions.read().await.is_empty()
    }
}

fn matches(submission: &ContactSubmission, status: Option<SubmissionStatus>) -> bool {
    status.map_or(true, |status| submission.status == status)
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()> {
        let mut submissions = self.submissions.write().await;

        if submissions.iter().any(|s| s.id == submission.id) {
            return Err(StoreError::DuplicateId(submission.id.to_string()));
        }

        submissions.push(submission.clone());
        Ok(())
    }

    async fn find_page(
        &self,
        status: Option<SubmissionStatus>,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<ContactSubmission>> {
        let submissions = self.submissions.read().await;

        let mut matching: Vec<ContactSubmission> = submissions
            .iter()
            .rev()
            .filter(|s| matches(s, status))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matching.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self, status: Option<SubmissionStatus>) -> StoreResult<u64> {
        let submissions = self.submissions.read().await;
        Ok(submissions.iter().filter(|s| matches(s, status)).count() as u64)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ContactSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.iter().find(|s| s.id.as_str() == id).cloned())
    }

    async fn update_status(&self, id: &str, status: SubmissionStatus) -> StoreResult<bool> {
        let mut submissions = self.submissions.write().await;

        match submissions.iter_mut().find(|s| s.id.as_str() == id) {
            Some(submission) => {
                submission.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
