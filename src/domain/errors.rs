//! Domain validation errors.

use super::{Budget, ProjectType, SubmissionStatus};
use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The project type is not one of the accepted literals.
    InvalidProjectType(String),

    /// The budget range is not one of the accepted literals.
    InvalidBudget(String),

    /// The status is not one of the accepted literals.
    InvalidStatus(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidProjectType(_) => write!(
                f,
                "Project type must be one of: {}",
                ProjectType::allowed_values()
            ),
            Self::InvalidBudget(_) => {
                write!(f, "Budget must be one of: {}", Budget::allowed_values())
            }
            Self::InvalidStatus(_) => write!(
                f,
                "Status must be one of: {}",
                SubmissionStatus::allowed_values()
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
