use async_trait::async_trait;
use contact_intake::domain::SubmissionStatus;
use contact_intake::error::{StoreError, StoreResult};
use contact_intake::models::ContactSubmission;
use contact_intake::repositories::SubmissionRepository;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock submission repository for testing.
///
/// Stores submissions in insertion order, tracks method calls for
/// verification and can be switched into a failing mode where every
/// operation returns a store error.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockSubmissionRepository {
    submissions: Arc<Mutex<Vec<ContactSubmission>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockSubmissionRepository {
    /// Create a new empty MockSubmissionRepository.
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a repository whose store is unreachable.
    pub fn failing() -> Self {
        let repo = Self::new();
        repo.set_failing(true);
        repo
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Add a submission directly, bypassing validation.
    pub fn add_submission(&self, submission: ContactSubmission) {
        self.submissions.lock().unwrap().push(submission);
    }

    pub fn stored(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;

        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable(
                "connection refused by mongo-0.internal:27017".to_string(),
            ))
        } else {
            Ok(())
        }
    }

    fn matching(&self, status: Option<SubmissionStatus>) -> Vec<ContactSubmission> {
        let submissions = self.submissions.lock().unwrap();
        let mut matching: Vec<ContactSubmission> = submissions
            .iter()
            .filter(|s| status.map_or(true, |status| s.status == status))
            .cloned()
            .collect();
        matching.reverse();
        matching.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        matching
    }
}

impl Default for MockSubmissionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionRepository for MockSubmissionRepository {
    async fn insert(&self, submission: &ContactSubmission) -> StoreResult<()> {
        self.track_call("insert")?;
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }

    async fn find_page(
        &self,
        status: Option<SubmissionStatus>,
        skip: u64,
        limit: u64,
    ) -> StoreResult<Vec<ContactSubmission>> {
        self.track_call("find_page")?;
        Ok(self
            .matching(status)
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, status: Option<SubmissionStatus>) -> StoreResult<u64> {
        self.track_call("count")?;
        Ok(self.matching(status).len() as u64)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ContactSubmission>> {
        self.track_call("find_by_id")?;
        let submissions = self.submissions.lock().unwrap();
        Ok(submissions.iter().find(|s| s.id.as_str() == id).cloned())
    }

    async fn update_status(&self, id: &str, status: SubmissionStatus) -> StoreResult<bool> {
        self.track_call("update_status")?;
        let mut submissions = self.submissions.lock().unwrap();
        match submissions.iter_mut().find(|s| s.id.as_str() == id) {
            Some(submission) => {
                submission.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> StoreResult<()> {
        self.track_call("ping")
    }
}
