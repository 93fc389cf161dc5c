//! Error taxonomy for report aggregation.

use crate::category::Category;
use health_connect_client::HealthConnectError;
use thiserror::Error;

/// Why a daily report could not be produced. None of these are retried
/// internally, and no partial report is ever returned.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The health platform is not available at all.
    #[error("health platform initialization failed: {0}")]
    Initialization(String),

    /// The read-capability grant was refused for one or more categories.
    #[error("health permissions denied: {0}")]
    PermissionDenied(String),

    /// A category query failed after initialization and permissions
    /// succeeded; wraps the first underlying failure.
    #[error("aggregation failed for {category}: {source}")]
    Aggregation {
        category: Category,
        source: HealthConnectError,
    },
}

pub type ReportResult<T> = Result<T, ReportError>;
