//! Plan record status model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a plan record
///
/// Rows are created `active` and normally move to `paused`, `completed` or
/// `abandoned` through the application. The reset forces the last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Active,
    Paused,
    Completed,
    Abandoned,
}

impl PlanStatus {
    /// Get all statuses
    pub fn all() -> &'static [PlanStatus] {
        &[
            PlanStatus::Active,
            PlanStatus::Paused,
            PlanStatus::Completed,
            PlanStatus::Abandoned,
        ]
    }

    /// Value stored in the `status` column
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Active => "active",
            PlanStatus::Paused => "paused",
            PlanStatus::Completed => "completed",
            PlanStatus::Abandoned => "abandoned",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a column value is not a known plan status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for PlanStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanStatus::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_values() {
        assert_eq!(PlanStatus::Active.as_str(), "active");
        assert_eq!(PlanStatus::Abandoned.to_string(), "abandoned");
    }

    #[test]
    fn test_parse_known_and_unknown() {
        assert_eq!("paused".parse::<PlanStatus>(), Ok(PlanStatus::Paused));
        assert_eq!(
            "Active".parse::<PlanStatus>(),
            Err(UnknownStatus("Active".to_string()))
        );
    }

    #[test]
    fn test_serde_matches_column_value() {
        for status in PlanStatus::all() {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
