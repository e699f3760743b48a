//! ProjectType literal set.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of project a visitor is enquiring about.
///
/// Serialized as the lowercase literal the contact form sends
/// (`mobile`, `web`, `aiml`, `dashboard`, `other`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Mobile,
    Web,
    Aiml,
    Dashboard,
    Other,
}

impl ProjectType {
    /// Every accepted value, in the order they are listed to callers.
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Mobile,
        ProjectType::Web,
        ProjectType::Aiml,
        ProjectType::Dashboard,
        ProjectType::Other,
    ];

    /// The wire literal for this value.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Mobile => "mobile",
            ProjectType::Web => "web",
            ProjectType::Aiml => "aiml",
            ProjectType::Dashboard => "dashboard",
            ProjectType::Other => "other",
        }
    }

    /// Comma-separated list of accepted literals for error messages.
    pub fn allowed_values() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl FromStr for ProjectType {
    type Err = ValidationError;

    /// Parse an exact literal. Matching is case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidProjectType(s.to_string()))
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
