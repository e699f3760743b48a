//! Two-pass validation of contact-form input.
//!
//! Input is checked in two ordered passes. The schema pass covers
//! structural problems (lengths of free-text fields, email syntax); the domain
//! pass covers business rules (closed literal sets, message length). The two
//! passes are reported as different failure kinds so the HTTP layer can map
//! them to different status codes. The domain pass only runs once the schema
//! pass is clean.

use crate::domain::{Budget, EmailAddress, ProjectType, SubmissionStatus, ValidationError};
use crate::models::ContactSubmissionCreate;
use serde::Serialize;
use std::fmt;

pub const NAME_MAX_CHARS: usize = 100;
pub const COMPANY_MAX_CHARS: usize = 100;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const MESSAGE_MAX_CHARS: usize = 2000;

/// A single rule violation, tied to the wire name of the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// Structural problems found by the schema pass.
    Schema(Vec<FieldError>),
    /// Business-rule violations found by the domain pass.
    Domain(Vec<FieldError>),
}

/// Input that passed both validation passes, with constrained fields parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub company: Option<String>,
    pub project_type: ProjectType,
    pub budget: Option<Budget>,
    pub message: String,
}

/// Validate a create payload.
///
/// Runs every schema rule and reports all schema violations together; only if
/// there are none does it run the domain rules. Each rule hands back the value
/// it parsed, so a clean pass yields the typed fields directly.
pub fn validate_submission(
    input: ContactSubmissionCreate,
) -> Result<ValidatedSubmission, ValidationFailure> {
    let mut errors = Vec::new();
    let name = collect(check_name(&input.name), &mut errors);
    let email = collect(check_email(&input.email), &mut errors);
    let company = collect(check_company(input.company.as_deref()), &mut errors);

    let (Some(()), Some(email), Some(())) = (name, email, company) else {
        return Err(ValidationFailure::Schema(errors));
    };

    let project_type = collect(check_project_type(&input.project_type), &mut errors);
    let budget = collect(check_budget(input.budget.as_deref()), &mut errors);
    let message = collect(check_message(&input.message), &mut errors);

    let (Some(project_type), Some(budget), Some(())) = (project_type, budget, message) else {
        return Err(ValidationFailure::Domain(errors));
    };

    Ok(ValidatedSubmission {
        name: input.name,
        email,
        company: input.company,
        project_type,
        budget,
        message: input.message,
    })
}

/// Validate a status literal supplied on update or as a list filter.
pub fn validate_status(status: &str) -> Result<SubmissionStatus, FieldError> {
    status
        .parse::<SubmissionStatus>()
        .map_err(|e| FieldError::new("status", e.to_string()))
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    result.map_err(|e| errors.push(e)).ok()
}

fn field_error(field: &str) -> impl FnOnce(ValidationError) -> FieldError + '_ {
    move |e| FieldError::new(field, e.to_string())
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn check_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::new("name", "Name cannot be empty"));
    }
    if char_len(name) > NAME_MAX_CHARS {
        return Err(FieldError::new(
            "name",
            format!("Name too long (max {} characters)", NAME_MAX_CHARS),
        ));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<EmailAddress, FieldError> {
    EmailAddress::new(email).map_err(field_error("email"))
}

fn check_company(company: Option<&str>) -> Result<(), FieldError> {
    match company {
        Some(company) if char_len(company) > COMPANY_MAX_CHARS => Err(FieldError::new(
            "company",
            format!("Company too long (max {} characters)", COMPANY_MAX_CHARS),
        )),
        _ => Ok(()),
    }
}

fn check_project_type(project_type: &str) -> Result<ProjectType, FieldError> {
    project_type
        .parse::<ProjectType>()
        .map_err(field_error("projectType"))
}

fn check_budget(budget: Option<&str>) -> Result<Option<Budget>, FieldError> {
    budget
        .map(str::parse::<Budget>)
        .transpose()
        .map_err(field_error("budget"))
}

fn check_message(message: &str) -> Result<(), FieldError> {
    let len = char_len(message);
    if len < MESSAGE_MIN_CHARS {
        return Err(FieldError::new(
            "message",
            format!("Message must be at least {} characters", MESSAGE_MIN_CHARS),
        ));
    }
    if len > MESSAGE_MAX_CHARS {
        return Err(FieldError::new(
            "message",
            format!("Message must be at most {} characters", MESSAGE_MAX_CHARS),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ContactSubmissionCreate {
        ContactSubmissionCreate {
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            company: None,
            project_type: "web".to_string(),
            budget: None,
            message: "This is a test message with more than 10 characters".to_string(),
        }
    }

    fn schema_fields(failure: ValidationFailure) -> Vec<String> {
        match failure {
            ValidationFailure::Schema(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("Expected schema failure, got: {:?}", other),
        }
    }

    fn domain_fields(failure: ValidationFailure) -> Vec<String> {
        match failure {
            ValidationFailure::Domain(errors) => errors.into_iter().map(|e| e.field).collect(),
            other => panic!("Expected domain failure, got: {:?}", other),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let mut input = valid_input();
        input.company = Some("Tech Solutions Inc".to_string());
        input.budget = Some("10k-25k".to_string());

        let validated = validate_submission(input).unwrap();
        assert_eq!(validated.project_type, ProjectType::Web);
        assert_eq!(validated.budget, Some(Budget::From10kTo25k));
        assert_eq!(validated.email.as_str(), "test@example.com");
    }

    #[test]
    fn test_minimal_example_passes() {
        let input = ContactSubmissionCreate {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            company: None,
            project_type: "web".to_string(),
            budget: None,
            message: "0123456789".to_string(),
        };
        assert!(validate_submission(input).is_ok());
    }

    #[test]
    fn test_invalid_emails_are_schema_failures() {
        for email in ["invalid-email", "test@", "@example.com", "test.example.com"] {
            let mut input = valid_input();
            input.email = email.to_string();
            let failure = validate_submission(input).unwrap_err();
            assert_eq!(schema_fields(failure), vec!["email"], "email: {}", email);
        }
    }

    #[test]
    fn test_name_bounds_are_schema_failures() {
        let mut input = valid_input();
        input.name = String::new();
        assert_eq!(schema_fields(validate_submission(input).unwrap_err()), vec!["name"]);

        let mut input = valid_input();
        input.name = "n".repeat(101);
        assert_eq!(schema_fields(validate_submission(input).unwrap_err()), vec!["name"]);

        let mut input = valid_input();
        input.name = "n".repeat(100);
        assert!(validate_submission(input).is_ok());
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        let mut input = valid_input();
        input.name = "   ".to_string();
        let validated = validate_submission(input).unwrap();
        assert_eq!(validated.name, "   ");
    }

    #[test]
    fn test_domain_pass_reports_every_violation() {
        let mut input = valid_input();
        input.project_type = "invalid_type".to_string();
        input.budget = Some("invalid_budget".to_string());
        input.message = "Short".to_string();

        assert_eq!(
            domain_fields(validate_submission(input).unwrap_err()),
            vec!["projectType", "budget", "message"]
        );
    }

    #[test]
    fn test_company_too_long_is_schema_failure() {
        let mut input = valid_input();
        input.company = Some("c".repeat(101));
        assert_eq!(
            schema_fields(validate_submission(input).unwrap_err()),
            vec!["company"]
        );
    }

    #[test]
    fn test_schema_pass_reports_every_violation() {
        let mut input = valid_input();
        input.name = String::new();
        input.email = "nope".to_string();
        input.company = Some("c".repeat(101));
        input.project_type = "invalid_type".to_string();

        assert_eq!(
            schema_fields(validate_submission(input).unwrap_err()),
            vec!["name", "email", "company"]
        );
    }

    #[test]
    fn test_invalid_project_type_is_domain_failure() {
        let mut input = valid_input();
        input.project_type = "invalid_type".to_string();

        match validate_submission(input).unwrap_err() {
            ValidationFailure::Domain(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "projectType");
                assert_eq!(
                    errors[0].message,
                    "Project type must be one of: mobile, web, aiml, dashboard, other"
                );
            }
            other => panic!("Expected domain failure, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_budget_is_domain_failure() {
        let mut input = valid_input();
        input.budget = Some("invalid_budget".to_string());
        assert_eq!(
            domain_fields(validate_submission(input).unwrap_err()),
            vec!["budget"]
        );
    }

    #[test]
    fn test_message_bounds_are_domain_failures() {
        let mut input = valid_input();
        input.message = "Short".to_string();
        assert_eq!(
            domain_fields(validate_submission(input).unwrap_err()),
            vec!["message"]
        );

        let mut input = valid_input();
        input.message = "m".repeat(2001);
        assert_eq!(
            domain_fields(validate_submission(input).unwrap_err()),
            vec!["message"]
        );

        let mut input = valid_input();
        input.message = "m".repeat(2000);
        assert!(validate_submission(input).is_ok());
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        let mut input = valid_input();
        input.name = "é".repeat(100);
        input.message = "ü".repeat(10);
        assert!(validate_submission(input).is_ok());
    }

    #[test]
    fn test_domain_pass_waits_for_schema_pass() {
        let mut input = valid_input();
        input.email = "invalid-email".to_string();
        input.message = "Short".to_string();

        assert_eq!(
            schema_fields(validate_submission(input).unwrap_err()),
            vec!["email"]
        );
    }

    #[test]
    fn test_validate_status() {
        assert_eq!(validate_status("archived"), Ok(SubmissionStatus::Archived));

        let err = validate_status("closed").unwrap_err();
        assert_eq!(err.field, "status");
        assert_eq!(err.message, "Status must be one of: new, read, replied, archived");
    }
}
