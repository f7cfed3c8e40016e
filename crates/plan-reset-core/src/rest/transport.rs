//! Transport seam for bulk updates

use reqwest::StatusCode;

use super::filter::Filter;
use super::patch::StatusPatch;
use crate::error::ResetError;

/// Submits one filtered partial update and reports the backend's status
///
/// Implementations must not retry and must not interpret the status: any
/// answer the backend gives, 2xx or not, is returned as `Ok`. Only failures
/// that leave no status to report come back as `Err`.
#[async_trait::async_trait]
pub trait BulkUpdateTransport: Send + Sync {
    async fn submit(&self, filter: &Filter, patch: &StatusPatch) -> Result<StatusCode, ResetError>;
}
