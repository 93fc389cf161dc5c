//! Per-category aggregation policies.
//!
//! Every category carries exactly one query-window policy and one reduction
//! policy. The trailing window for Height and Weight is a policy value, not
//! a special case in the aggregator.

use health_connect_client::RecordType;

/// A report category is a broker record kind.
pub type Category = RecordType;

/// Days of lookback for trailing-window categories.
pub const TRAILING_DAYS: i64 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowPolicy {
    /// The requested report day, local midnight through 23:59:59.999.
    Daily,
    /// A trailing window ending at the current wall-clock time, independent
    /// of the requested report date.
    Trailing { days: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reduction {
    /// Σ measurement; empty sequence yields zero.
    Sum,
    /// Σ measurement; empty sequence yields no-data.
    SumOptional,
    /// Newest record by resolved timestamp; empty sequence yields no-data.
    LatestByTime,
    /// Σ (endTime − startTime), reported in hours.
    DurationHours,
    /// Non-empty flag plus the newest record's instant.
    Presence,
}

pub trait CategoryPolicy {
    fn window_policy(&self) -> WindowPolicy;
    fn reduction(&self) -> Reduction;
}

impl CategoryPolicy for Category {
    fn window_policy(&self) -> WindowPolicy {
        match self {
            Category::Height | Category::Weight => WindowPolicy::Trailing {
                days: TRAILING_DAYS,
            },
            _ => WindowPolicy::Daily,
        }
    }

    fn reduction(&self) -> Reduction {
        match self {
            Category::Steps
            | Category::Distance
            | Category::TotalCaloriesBurned
            | Category::ActiveCaloriesBurned
            | Category::Hydration => Reduction::Sum,
            Category::ElevationGained
            | Category::FloorsClimbed
            | Category::WheelchairPushes => Reduction::SumOptional,
            Category::SleepSession => Reduction::DurationHours,
            Category::SexualActivity => Reduction::Presence,
            _ => Reduction::LatestByTime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_height_and_weight_use_the_trailing_window() {
        let trailing: Vec<Category> = Category::ALL
            .iter()
            .copied()
            .filter(|c| c.window_policy() != WindowPolicy::Daily)
            .collect();
        assert_eq!(trailing, vec![Category::Height, Category::Weight]);
        assert_eq!(
            Category::Height.window_policy(),
            WindowPolicy::Trailing { days: 30 }
        );
    }

    #[test]
    fn reduction_table_matches_category_semantics() {
        assert_eq!(Category::Steps.reduction(), Reduction::Sum);
        assert_eq!(Category::Hydration.reduction(), Reduction::Sum);
        assert_eq!(Category::FloorsClimbed.reduction(), Reduction::SumOptional);
        assert_eq!(Category::SleepSession.reduction(), Reduction::DurationHours);
        assert_eq!(Category::SexualActivity.reduction(), Reduction::Presence);
        assert_eq!(Category::Weight.reduction(), Reduction::LatestByTime);
        assert_eq!(Category::HeartRate.reduction(), Reduction::LatestByTime);
        assert_eq!(
            Category::MenstruationPeriod.reduction(),
            Reduction::LatestByTime
        );
    }
}
