mod memory_submission_repository;
mod mongo_submission_repository;
mod traits;

pub use memory_submission_repository::InMemorySubmissionRepository;
pub use mongo_submission_repository::MongoSubmissionRepository;
pub use traits::SubmissionRepository;
