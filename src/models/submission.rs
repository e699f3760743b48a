//! Contact submission model.

use crate::domain::{Budget, EmailAddress, ProjectType, SubmissionId, SubmissionStatus};
use crate::validation::ValidatedSubmission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acknowledgement text returned after a successful submission.
pub const THANK_YOU_MESSAGE: &str =
    "Thank you for reaching out! I'll get back to you within 24-48 hours.";

/// Acknowledgement text returned after a status change.
pub const STATUS_UPDATED_MESSAGE: &str = "Status updated successfully";

/// The payload accepted from the contact form.
///
/// Constrained fields are kept as raw strings here; the validation passes in
/// [`crate::validation`] decide whether they are acceptable. Server-computed
/// fields (`id`, `status`, `submittedAt`, `ipAddress`) are not part of this
/// type, so a caller supplying them has no effect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub project_type: String,
    #[serde(default)]
    pub budget: Option<String>,
    pub message: String,
}

/// A persisted contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    /// Server-generated identifier, never reassigned
    pub id: SubmissionId,

    pub name: String,

    pub email: EmailAddress,

    pub company: Option<String>,

    pub project_type: ProjectType,

    pub budget: Option<Budget>,

    pub message: String,

    /// Triage status, the only field that changes after creation
    pub status: SubmissionStatus,

    /// Creation time in UTC
    pub submitted_at: DateTime<Utc>,

    /// Address of the connection the submission arrived on
    pub ip_address: Option<String>,
}

impl ContactSubmission {
    /// Build a new record from validated input, stamping the server-side fields.
    pub fn from_validated(input: ValidatedSubmission, ip_address: Option<String>) -> Self {
        Self::from_validated_at(input, ip_address, Utc::now())
    }

    /// Same as [`ContactSubmission::from_validated`] with an explicit timestamp.
    pub fn from_validated_at(
        input: ValidatedSubmission,
        ip_address: Option<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: SubmissionId::generate(),
            name: input.name,
            email: input.email,
            company: input.company,
            project_type: input.project_type,
            budget: input.budget,
            message: input.message,
            status: SubmissionStatus::New,
            submitted_at,
            ip_address,
        }
    }
}

/// One page of a listing plus the total number of matching records.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPage {
    pub total: u64,
    pub submissions: Vec<ContactSubmission>,
}

/// Response to a successful create.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub submission_id: Option<String>,
}

impl ContactResponse {
    pub fn created(id: &SubmissionId) -> Self {
        Self {
            success: true,
            message: THANK_YOU_MESSAGE.to_string(),
            submission_id: Some(id.to_string()),
        }
    }
}

/// Response to a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactListResponse {
    pub success: bool,
    pub count: u64,
    pub submissions: Vec<ContactSubmission>,
}

impl From<SubmissionPage> for ContactListResponse {
    fn from(page: SubmissionPage) -> Self {
        Self {
            success: true,
            count: page.total,
            submissions: page.submissions,
        }
    }
}

/// Response wrapping a single record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionEnvelope {
    pub success: bool,
    pub submission: ContactSubmission,
}

/// Response to a successful status update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub message: String,
}

impl StatusUpdateResponse {
    pub fn updated() -> Self {
        Self {
            success: true,
            message: STATUS_UPDATED_MESSAGE.to_string(),
        }
    }
}
