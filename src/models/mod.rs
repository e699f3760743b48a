//! Data models for contact-form submissions.
//!
//! This module contains the persisted submission record, the input-only
//! projection accepted from the website, and the response envelopes returned
//! by the HTTP layer.

pub mod submission;

pub use submission::{
    ContactListResponse, ContactResponse, ContactSubmission, ContactSubmissionCreate,
    StatusUpdateResponse, SubmissionEnvelope, SubmissionPage,
};
