//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the constrained fields of a
//! contact submission: identifiers, email addresses and the three closed
//! literal sets (project type, budget range, status). Each value object is
//! validated at construction time so invalid data cannot be represented.

pub mod budget;
pub mod email;
pub mod errors;
pub mod project_type;
pub mod status;
pub mod submission_id;

pub use budget::Budget;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use project_type::ProjectType;
pub use status::SubmissionStatus;
pub use submission_id::SubmissionId;
