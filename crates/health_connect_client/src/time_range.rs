//! Time-range filter sent with every record read.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RangeOperator {
    Between,
}

/// Absolute time range for a record read.
///
/// Both bounds are inclusive: the caller computes end-of-day as
/// 23:59:59.999, so a record stamped exactly at `end_time` belongs to the
/// range.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeRangeFilter {
    pub operator: RangeOperator,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl TimeRangeFilter {
    pub fn between(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            operator: RangeOperator::Between,
            start_time,
            end_time,
        }
    }

    /// Inclusive on both bounds.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start_time && instant <= self.end_time
    }
}
