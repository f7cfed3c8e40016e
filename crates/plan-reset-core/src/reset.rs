//! Reset invoker
//!
//! Forces every `active` plan into `abandoned` with one conditional bulk
//! update. Running it again matches no rows and changes nothing.

use std::fmt;

use reqwest::StatusCode;
use tracing::{info, warn};

use crate::constants;
use crate::error::ResetError;
use crate::plan::PlanStatus;
use crate::rest::{BulkUpdateTransport, Filter, StatusPatch};

/// Status reported by the backend for one reset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetOutcome {
    pub status: StatusCode,
}

impl ResetOutcome {
    /// Whether the backend answered 2xx
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Line printed for the operator
    pub fn status_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResetOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reset Status: {}", self.status.as_u16())
    }
}

/// Issues the active-to-abandoned bulk update through a transport
pub struct PlanResetter<T> {
    transport: T,
}

impl<T: BulkUpdateTransport> PlanResetter<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Rows the reset selects: `status=eq.active`
    pub fn filter() -> Filter {
        Filter::eq(constants::backend::STATUS_COLUMN, PlanStatus::Active)
    }

    /// Body the reset applies: `{"status":"abandoned"}`
    pub fn patch() -> StatusPatch {
        StatusPatch::new(PlanStatus::Abandoned)
    }

    /// Submit the reset once and return whatever status the backend gave
    pub async fn reset_active_plans(&self) -> Result<ResetOutcome, ResetError> {
        let outcome = ResetOutcome {
            status: self.transport.submit(&Self::filter(), &Self::patch()).await?,
        };

        if outcome.is_success() {
            info!(status = outcome.status.as_u16(), "Active plans reset");
        } else {
            warn!(status = outcome.status.as_u16(), "Backend rejected plan reset");
        }

        Ok(outcome)
    }
}
