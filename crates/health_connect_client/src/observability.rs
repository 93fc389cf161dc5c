//! Metric hooks for record reads. No-ops until a recorder is installed.

use crate::RecordType;

pub fn record_read(record_type: RecordType) {
    metrics::counter!("health_connect_reads_total", "record_type" => record_type.as_str())
        .increment(1);
}

pub fn record_read_error(record_type: RecordType) {
    metrics::counter!("health_connect_read_errors_total", "record_type" => record_type.as_str())
        .increment(1);
}
