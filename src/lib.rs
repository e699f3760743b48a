//! Contact Intake - the backend behind a portfolio website's contact form.
//!
//! Visitors submit project inquiries which are validated, stamped with an ID,
//! timestamp, status and client address, and persisted. An administrator can
//! list, fetch and triage submissions through the same HTTP API.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (IDs, emails, closed literal sets)
//! - **models**: The submission record, its input projection and response envelopes
//! - **validation**: Two-tier validation of incoming submissions
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Submission store abstraction (MongoDB and in-memory)
//! - **services**: Business operations over the store
//! - **observability**: Request counters and timing
//! - **server**: axum router, handlers and HTTP error mapping

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;

pub use config::{Config, StoreBackend};
pub use domain::{Budget, EmailAddress, ProjectType, SubmissionId, SubmissionStatus};
pub use error::{ConfigError, StoreError, SubmissionError};
pub use models::{ContactSubmission, ContactSubmissionCreate, SubmissionPage};
pub use server::AppState;
pub use services::{ListParams, SubmissionService, SubmissionServiceImpl};
