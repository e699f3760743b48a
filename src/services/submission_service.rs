//! Submission service layer.
//!
//! Business logic for creating, listing, fetching and triaging contact-form
//! submissions.

use crate::domain::SubmissionStatus;
use crate::error::{StoreResult, SubmissionError, SubmissionResult};
use crate::models::{ContactSubmission, ContactSubmissionCreate, SubmissionPage};
use crate::repositories::SubmissionRepository;
use crate::validation::{validate_status, validate_submission};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

/// Page size used when the caller does not give one.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Parameters for listing submissions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    /// Raw status filter; `None` or an empty string lists every record
    pub status: Option<String>,
    pub limit: u64,
    pub skip: u64,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_PAGE_SIZE,
            skip: 0,
        }
    }
}

/// Submission service trait for business operations.
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Validate and persist a new submission.
    ///
    /// `ip_address` is supplied by the transport layer, never by the payload.
    async fn create_submission(
        &self,
        payload: ContactSubmissionCreate,
        ip_address: Option<String>,
    ) -> SubmissionResult<ContactSubmission>;

    /// List submissions newest first, with the total count of matches.
    async fn list_submissions(&self, params: ListParams) -> SubmissionResult<SubmissionPage>;

    /// Get a single submission by ID.
    async fn get_submission(&self, id: &str) -> SubmissionResult<ContactSubmission>;

    /// Change the status of a submission.
    ///
    /// The status literal is validated before the store is touched.
    async fn update_status(&self, id: &str, status: &str) -> SubmissionResult<()>;

    /// Check that the backing store is reachable.
    async fn check_store(&self) -> SubmissionResult<()>;
}

/// Default implementation of SubmissionService.
pub struct SubmissionServiceImpl {
    repository: Arc<dyn SubmissionRepository>,
}

impl SubmissionServiceImpl {
    /// Create a new submission service.
    pub fn new(repository: Arc<dyn SubmissionRepository>) -> Self {
        Self { repository }
    }

    fn invalid_status() -> SubmissionError {
        SubmissionError::Validation(format!(
            "Invalid status. Must be one of: {}",
            SubmissionStatus::allowed_values()
        ))
    }

    async fn fetch_page(
        &self,
        status: Option<SubmissionStatus>,
        skip: u64,
        limit: u64,
    ) -> StoreResult<SubmissionPage> {
        let submissions = self.repository.find_page(status, skip, limit).await?;
        let total = self.repository.count(status).await?;
        Ok(SubmissionPage { total, submissions })
    }
}

#[async_trait]
impl SubmissionService for SubmissionServiceImpl {
    async fn create_submission(
        &self,
        payload: ContactSubmissionCreate,
        ip_address: Option<String>,
    ) -> SubmissionResult<ContactSubmission> {
        let validated = validate_submission(payload)?;
        let submission = ContactSubmission::from_validated(validated, ip_address);

        if let Err(e) = self.repository.insert(&submission).await {
            error!(error = %e, "Error creating contact submission");
            return Err(e.into());
        }

        info!(
            email = %submission.email,
            id = %submission.id,
            "New contact submission received"
        );
        Ok(submission)
    }

    async fn list_submissions(&self, params: ListParams) -> SubmissionResult<SubmissionPage> {
        let status = match params.status.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(validate_status(raw).map_err(|_| Self::invalid_status())?),
        };

        self.fetch_page(status, params.skip, params.limit)
            .await
            .map_err(|e| {
                error!(error = %e, "Error fetching contact submissions");
                e.into()
            })
    }

    async fn get_submission(&self, id: &str) -> SubmissionResult<ContactSubmission> {
        match self.repository.find_by_id(id).await {
            Ok(Some(submission)) => Ok(submission),
            Ok(None) => Err(SubmissionError::not_found()),
            Err(e) => {
                error!(error = %e, id = %id, "Error fetching contact submission");
                Err(e.into())
            }
        }
    }

    async fn update_status(&self, id: &str, status: &str) -> SubmissionResult<()> {
        let status = validate_status(status).map_err(|_| Self::invalid_status())?;

        match self.repository.update_status(id, status).await {
            Ok(true) => {
                info!(id = %id, status = %status, "Submission status updated");
                Ok(())
            }
            Ok(false) => Err(SubmissionError::not_found()),
            Err(e) => {
                error!(error = %e, id = %id, "Error updating submission status");
                Err(e.into())
            }
        }
    }

    async fn check_store(&self) -> SubmissionResult<()> {
        self.repository.ping().await.map_err(|e| {
            error!(error = %e, "Store health check failed");
            e.into()
        })
    }
}
