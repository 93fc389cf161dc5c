//! `HealthConnectClient` trait and reqwest-based implementation for a
//! health-data broker bridge.
//!
//! The broker exposes per-category record reads over a small JSON API. This
//! crate owns the boundary types (record kinds, permissions, time-range
//! filter, record payloads) and nothing about how the records are reduced or
//! displayed.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod middleware;
pub mod observability;
pub mod records;
pub mod time_range;

pub use records::{HealthRecord, RecordsResponse};
pub use time_range::TimeRangeFilter;

#[derive(Debug, Error)]
pub enum HealthConnectError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("broker unavailable: {0}")]
    Unavailable(String),
    #[error("permission denied: {0}")]
    Denied(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The record kinds the broker can serve. Variant names are the broker's
/// wire names.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
pub enum RecordType {
    Steps,
    Height,
    Weight,
    SleepSession,
    Distance,
    TotalCaloriesBurned,
    MenstruationFlow,
    MenstruationPeriod,
    HeartRate,
    Hydration,
    BloodPressure,
    BodyTemperature,
    ActiveCaloriesBurned,
    BasalBodyTemperature,
    BasalMetabolicRate,
    BloodGlucose,
    BodyFat,
    BoneMass,
    CervicalMucus,
    ElevationGained,
    ExerciseSession,
    FloorsClimbed,
    LeanBodyMass,
    Nutrition,
    OvulationTest,
    OxygenSaturation,
    Power,
    RespiratoryRate,
    RestingHeartRate,
    SexualActivity,
    Speed,
    StepsCadence,
    Vo2Max,
    WheelchairPushes,
}

impl RecordType {
    /// Every record kind, in the broker's catalogue order.
    pub const ALL: [RecordType; 34] = [
        RecordType::Steps,
        RecordType::Height,
        RecordType::Weight,
        RecordType::SleepSession,
        RecordType::Distance,
        RecordType::TotalCaloriesBurned,
        RecordType::MenstruationFlow,
        RecordType::MenstruationPeriod,
        RecordType::HeartRate,
        RecordType::Hydration,
        RecordType::BloodPressure,
        RecordType::BodyTemperature,
        RecordType::ActiveCaloriesBurned,
        RecordType::BasalBodyTemperature,
        RecordType::BasalMetabolicRate,
        RecordType::BloodGlucose,
        RecordType::BodyFat,
        RecordType::BoneMass,
        RecordType::CervicalMucus,
        RecordType::ElevationGained,
        RecordType::ExerciseSession,
        RecordType::FloorsClimbed,
        RecordType::LeanBodyMass,
        RecordType::Nutrition,
        RecordType::OvulationTest,
        RecordType::OxygenSaturation,
        RecordType::Power,
        RecordType::RespiratoryRate,
        RecordType::RestingHeartRate,
        RecordType::SexualActivity,
        RecordType::Speed,
        RecordType::StepsCadence,
        RecordType::Vo2Max,
        RecordType::WheelchairPushes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Steps => "Steps",
            RecordType::Height => "Height",
            RecordType::Weight => "Weight",
            RecordType::SleepSession => "SleepSession",
            RecordType::Distance => "Distance",
            RecordType::TotalCaloriesBurned => "TotalCaloriesBurned",
            RecordType::MenstruationFlow => "MenstruationFlow",
            RecordType::MenstruationPeriod => "MenstruationPeriod",
            RecordType::HeartRate => "HeartRate",
            RecordType::Hydration => "Hydration",
            RecordType::BloodPressure => "BloodPressure",
            RecordType::BodyTemperature => "BodyTemperature",
            RecordType::ActiveCaloriesBurned => "ActiveCaloriesBurned",
            RecordType::BasalBodyTemperature => "BasalBodyTemperature",
            RecordType::BasalMetabolicRate => "BasalMetabolicRate",
            RecordType::BloodGlucose => "BloodGlucose",
            RecordType::BodyFat => "BodyFat",
            RecordType::BoneMass => "BoneMass",
            RecordType::CervicalMucus => "CervicalMucus",
            RecordType::ElevationGained => "ElevationGained",
            RecordType::ExerciseSession => "ExerciseSession",
            RecordType::FloorsClimbed => "FloorsClimbed",
            RecordType::LeanBodyMass => "LeanBodyMass",
            RecordType::Nutrition => "Nutrition",
            RecordType::OvulationTest => "OvulationTest",
            RecordType::OxygenSaturation => "OxygenSaturation",
            RecordType::Power => "Power",
            RecordType::RespiratoryRate => "RespiratoryRate",
            RecordType::RestingHeartRate => "RestingHeartRate",
            RecordType::SexualActivity => "SexualActivity",
            RecordType::Speed => "Speed",
            RecordType::StepsCadence => "StepsCadence",
            RecordType::Vo2Max => "Vo2Max",
            RecordType::WheelchairPushes => "WheelchairPushes",
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    Read,
}

/// A single capability in the broker's grant request.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub access_type: AccessType,
    pub record_type: RecordType,
}

impl Permission {
    pub fn read(record_type: RecordType) -> Self {
        Self {
            access_type: AccessType::Read,
            record_type,
        }
    }

    /// Read capability for the full record catalogue.
    pub fn read_all() -> Vec<Permission> {
        RecordType::ALL.iter().copied().map(Permission::read).collect()
    }
}

#[async_trait]
pub trait HealthConnectClient: Send + Sync + 'static {
    /// Probe broker availability. `false` means the platform answered but is
    /// not ready to serve records.
    async fn initialize(&self) -> Result<bool, HealthConnectError>;

    /// Request read capabilities; returns the set actually granted.
    async fn request_permissions(
        &self,
        permissions: &[Permission],
    ) -> Result<Vec<Permission>, HealthConnectError>;

    /// Read all records of one kind within the filter's range. Calls are
    /// independent: a failure in one concurrent read never affects another.
    async fn read_records(
        &self,
        record_type: RecordType,
        filter: &TimeRangeFilter,
    ) -> Result<RecordsResponse, HealthConnectError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_catalogue_is_complete() {
        assert_eq!(RecordType::ALL.len(), 34);
        for rt in RecordType::ALL {
            // wire name round-trips through serde
            let json = serde_json::to_string(&rt).expect("serialize");
            assert_eq!(json, format!("\"{}\"", rt.as_str()));
        }
    }

    #[test]
    fn permission_serializes_with_broker_field_names() {
        let p = Permission::read(RecordType::Steps);
        let json = serde_json::to_value(p).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"accessType": "read", "recordType": "Steps"})
        );
    }

    #[test]
    fn read_all_covers_the_catalogue() {
        let all = Permission::read_all();
        assert_eq!(all.len(), RecordType::ALL.len());
        assert!(all.iter().any(|p| p.record_type == RecordType::StepsCadence));
    }
}
