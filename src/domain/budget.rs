//! Budget range literal set.

use super::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Budget range selected on the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Budget {
    #[serde(rename = "under5k")]
    Under5k,
    #[serde(rename = "5k-10k")]
    From5kTo10k,
    #[serde(rename = "10k-25k")]
    From10kTo25k,
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    #[serde(rename = "over50k")]
    Over50k,
    #[serde(rename = "discuss")]
    Discuss,
}

impl Budget {
    pub const ALL: [Budget; 6] = [
        Budget::Under5k,
        Budget::From5kTo10k,
        Budget::From10kTo25k,
        Budget::From25kTo50k,
        Budget::Over50k,
        Budget::Discuss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Budget::Under5k => "under5k",
            Budget::From5kTo10k => "5k-10k",
            Budget::From10kTo25k => "10k-25k",
            Budget::From25kTo50k => "25k-50k",
            Budget::Over50k => "over50k",
            Budget::Discuss => "discuss",
        }
    }

    pub fn allowed_values() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl FromStr for Budget {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidBudget(s.to_string()))
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
