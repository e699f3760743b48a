//! Application service layer.
//!
//! Services contain business logic and orchestrate validation and the
//! repository. They provide a clean boundary between the HTTP handlers and
//! the data access layer.

mod submission_service;

pub use submission_service::{
    ListParams, SubmissionService, SubmissionServiceImpl, DEFAULT_PAGE_SIZE,
};
