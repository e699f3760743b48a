pub mod mock_submission_repository;

pub use mock_submission_repository::MockSubmissionRepository;
