//! Pure per-category reducers.
//!
//! Sum and duration reducers are order-independent. The latest-by-time
//! reducer always orders by resolved timestamp, newest first, regardless of
//! the order the source returned records in; ties keep the source's order.

use chrono::{DateTime, Utc};
use health_connect_client::HealthRecord;

/// Σ `measure(record)` over the sequence; empty sequence sums to zero.
pub fn sum_by<F>(records: &[HealthRecord], measure: F) -> f64
where
    F: Fn(&HealthRecord) -> f64,
{
    records.iter().map(measure).sum()
}

/// Like [`sum_by`], but an empty sequence means "no data", not zero.
pub fn sum_optional<F>(records: &[HealthRecord], measure: F) -> Option<f64>
where
    F: Fn(&HealthRecord) -> f64,
{
    if records.is_empty() {
        None
    } else {
        Some(sum_by(records, measure))
    }
}

/// Σ `count` over the sequence.
pub fn sum_counts(records: &[HealthRecord]) -> u64 {
    records.iter().map(|r| r.count.unwrap_or(0)).sum()
}

/// Like [`sum_counts`], but an empty sequence means "no data".
pub fn sum_counts_optional(records: &[HealthRecord]) -> Option<u64> {
    if records.is_empty() {
        None
    } else {
        Some(sum_counts(records))
    }
}

/// The record with the newest resolved timestamp. Records without any
/// resolvable timestamp order last; ties keep the first occurrence.
pub fn latest(records: &[HealthRecord]) -> Option<&HealthRecord> {
    let mut best: Option<(&HealthRecord, i64)> = None;
    for record in records {
        let at = record
            .resolved_time()
            .map(|t| t.timestamp_millis())
            .unwrap_or(i64::MIN);
        let newer = match best {
            None => true,
            Some((_, current)) => at > current,
        };
        if newer {
            best = Some((record, at));
        }
    }
    best.map(|(record, _)| record)
}

/// Σ (endTime − startTime) in hours; records missing either bound
/// contribute nothing.
pub fn duration_hours(records: &[HealthRecord]) -> f64 {
    let millis: f64 = records
        .iter()
        .filter_map(|r| match (r.start_time, r.end_time) {
            (Some(start), Some(end)) => Some((end - start).num_milliseconds() as f64),
            _ => None,
        })
        .sum();
    millis / 3_600_000.0
}

/// Whether any record exists, plus the newest record's instant.
pub fn presence(records: &[HealthRecord]) -> (bool, Option<DateTime<Utc>>) {
    match latest(records) {
        Some(record) => (true, record.time),
        None => (false, None),
    }
}
