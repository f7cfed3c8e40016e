//! Partial-update bodies

use serde::{Deserialize, Serialize};

use crate::plan::PlanStatus;

/// Body of a PATCH that rewrites only the `status` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPatch {
    pub status: PlanStatus,
}

impl StatusPatch {
    pub fn new(status: PlanStatus) -> Self {
        Self { status }
    }

    /// JSON text sent on the wire
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abandon_body_is_single_field() {
        let body = StatusPatch::new(PlanStatus::Abandoned).to_json().unwrap();
        assert_eq!(body, r#"{"status":"abandoned"}"#);
    }
}
