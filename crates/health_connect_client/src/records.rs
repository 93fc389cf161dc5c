//! Record payloads as the broker serves them.
//!
//! Every record kind shares one permissive shape: up to three timestamps and
//! the measurement fields for that kind, everything else absent. Measurement
//! values arrive wrapped in unit objects (`{"inMeters": 1.82}`), mirroring
//! the broker's wire format.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Length {
    pub in_meters: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Mass {
    pub in_kilograms: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Energy {
    pub in_kilocalories: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub in_liters: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Temperature {
    pub in_celsius: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pressure {
    pub in_millimeters_of_mercury: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodGlucoseLevel {
    pub in_millimoles_per_liter: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetabolicRate {
    pub in_kilocalories_per_day: f64,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Velocity {
    pub in_meters_per_second: f64,
}

/// Power in watts. Some broker versions emit a bare number, others the
/// wrapped `{"inWatts": ...}` object; both deserialize here.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PowerOutput {
    pub in_watts: f64,
}

impl<'de> Deserialize<'de> for PowerOutput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Wrapped {
                #[serde(rename = "inWatts")]
                in_watts: f64,
            },
            Bare(f64),
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Wrapped { in_watts } => PowerOutput { in_watts },
            Repr::Bare(in_watts) => PowerOutput { in_watts },
        })
    }
}

/// Enumerated codes (menstrual flow, cervical mucus appearance, ovulation
/// test result) arrive as either a string label or a numeric code.
#[derive(Clone, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub struct CodedValue(pub String);

impl<'de> Deserialize<'de> for CodedValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::String(s) => Ok(CodedValue(s)),
            serde_json::Value::Number(n) => Ok(CodedValue(n.to_string())),
            other => Err(D::Error::custom(format!(
                "expected string or number, got {other}"
            ))),
        }
    }
}

impl std::fmt::Display for CodedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry of a sampled series (heart rate, power, speed, cadence).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Sample {
    pub time: Option<DateTime<Utc>>,
    pub beats_per_minute: Option<f64>,
    pub power: Option<PowerOutput>,
    pub speed: Option<Velocity>,
    pub rate: Option<f64>,
}

/// A single time-stamped record of any kind.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct HealthRecord {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub time: Option<DateTime<Utc>>,
    pub count: Option<u64>,
    pub height: Option<Length>,
    pub weight: Option<Mass>,
    pub distance: Option<Length>,
    pub elevation: Option<Length>,
    pub energy: Option<Energy>,
    pub volume: Option<Volume>,
    pub systolic: Option<Pressure>,
    pub diastolic: Option<Pressure>,
    pub temperature: Option<Temperature>,
    pub basal_metabolic_rate: Option<MetabolicRate>,
    pub level: Option<BloodGlucoseLevel>,
    pub mass: Option<Mass>,
    pub percentage: Option<f64>,
    pub floors: Option<f64>,
    pub rate: Option<f64>,
    pub beats_per_minute: Option<f64>,
    pub vo2_milliliters_per_minute_kilogram: Option<f64>,
    pub title: Option<String>,
    pub flow: Option<CodedValue>,
    pub appearance: Option<CodedValue>,
    pub result: Option<CodedValue>,
    pub samples: Option<Vec<Sample>>,
}

impl HealthRecord {
    /// The record's effective timestamp: `endTime`, else `startTime`, else
    /// the instantaneous `time`.
    pub fn resolved_time(&self) -> Option<DateTime<Utc>> {
        self.end_time.or(self.start_time).or(self.time)
    }

    /// First entry of the sampled series, if any.
    pub fn first_sample(&self) -> Option<&Sample> {
        self.samples.as_deref().and_then(<[Sample]>::first)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct RecordsResponse {
    pub records: Vec<HealthRecord>,
}
