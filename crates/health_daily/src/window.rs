//! Query-window computation.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use health_connect_client::TimeRangeFilter;

/// The report day's range in the caller's local timezone: midnight through
/// 23:59:59.999. The end bound is inclusive.
pub fn daily_range(date: NaiveDate) -> TimeRangeFilter {
    daily_range_in(date, &chrono::Local)
}

/// Timezone-explicit variant of [`daily_range`].
pub fn daily_range_in<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> TimeRangeFilter {
    let start = date.and_time(NaiveTime::MIN);
    let end = date.and_time(
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("valid end-of-day time"),
    );
    TimeRangeFilter::between(resolve_local(tz, start), resolve_local(tz, end))
}

/// A trailing lookback window ending at `now`.
pub fn trailing_range(days: i64, now: DateTime<Utc>) -> TimeRangeFilter {
    TimeRangeFilter::between(now - Duration::days(days), now)
}

// A local wall-clock time can be skipped or doubled across DST transitions;
// take the earliest valid instant, or read the naive time as UTC when the
// wall-clock time does not exist at all.
fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: chrono::NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}
