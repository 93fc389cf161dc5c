//! The fixed-shape daily report.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Latest blood-pressure reading; each side is independently nullable.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BloodPressureReading {
    pub systolic: Option<f64>,
    pub diastolic: Option<f64>,
}

/// One day of reduced health metrics.
///
/// Exactly one field per category; absent data is `None`, never an omitted
/// field. Distance and height stay in their source units (meters); sleep is
/// already converted to hours. Display conversions (km, cm, hr/min text)
/// belong to the presenter.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyReport {
    /// Total step count for the day.
    pub steps: u64,
    /// Latest height in meters, from the trailing lookback window.
    pub height: Option<f64>,
    /// Latest weight in kilograms, from the trailing lookback window.
    pub weight: Option<f64>,
    /// Total sleep-session time in hours.
    pub sleep_duration: f64,
    /// Total distance in meters.
    pub distance: f64,
    /// Total calories burned, kcal.
    pub calories: f64,
    pub menstruation_flow: Option<String>,
    /// Start instant of the newest menstruation-period record.
    pub menstruation_period: Option<DateTime<Utc>>,
    /// First sample of the newest heart-rate series, bpm.
    pub heart_rate: Option<f64>,
    /// Total water intake in liters.
    pub hydration: f64,
    pub blood_pressure: BloodPressureReading,
    pub body_temperature: Option<f64>,
    pub active_calories: f64,
    pub basal_body_temperature: Option<f64>,
    /// kcal per day.
    pub basal_metabolic_rate: Option<f64>,
    /// mmol/L.
    pub blood_glucose: Option<f64>,
    /// Percent.
    pub body_fat: Option<f64>,
    /// Kilograms.
    pub bone_mass: Option<f64>,
    pub cervical_mucus: Option<String>,
    /// Total meters climbed; `None` when no records exist.
    pub elevation_gained: Option<f64>,
    /// Title of the newest exercise session.
    pub exercise_session: Option<String>,
    pub floors_climbed: Option<f64>,
    /// Kilograms.
    pub lean_body_mass: Option<f64>,
    /// Energy of the newest nutrition record, kcal.
    pub nutrition: Option<f64>,
    pub ovulation_test: Option<String>,
    /// Percent.
    pub oxygen_saturation: Option<f64>,
    /// Watts, from the newest power series.
    pub power: Option<f64>,
    /// Breaths per minute.
    pub respiratory_rate: Option<f64>,
    /// Bpm.
    pub resting_heart_rate: Option<f64>,
    pub sexual_activity: bool,
    pub sexual_activity_timestamp: Option<DateTime<Utc>>,
    /// Meters per second, from the newest speed series.
    pub speed: Option<f64>,
    /// Steps per minute, from the newest cadence series.
    pub steps_cadence: Option<f64>,
    /// ml/(min·kg).
    pub vo2_max: Option<f64>,
    pub wheelchair_pushes: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_report() -> DailyReport {
        DailyReport {
            steps: 0,
            height: None,
            weight: None,
            sleep_duration: 0.0,
            distance: 0.0,
            calories: 0.0,
            menstruation_flow: None,
            menstruation_period: None,
            heart_rate: None,
            hydration: 0.0,
            blood_pressure: BloodPressureReading::default(),
            body_temperature: None,
            active_calories: 0.0,
            basal_body_temperature: None,
            basal_metabolic_rate: None,
            blood_glucose: None,
            body_fat: None,
            bone_mass: None,
            cervical_mucus: None,
            elevation_gained: None,
            exercise_session: None,
            floors_climbed: None,
            lean_body_mass: None,
            nutrition: None,
            ovulation_test: None,
            oxygen_saturation: None,
            power: None,
            respiratory_rate: None,
            resting_heart_rate: None,
            sexual_activity: false,
            sexual_activity_timestamp: None,
            speed: None,
            steps_cadence: None,
            vo2_max: None,
            wheelchair_pushes: None,
        }
    }

    #[test]
    fn serializes_every_category_even_without_data() {
        let json = serde_json::to_value(empty_report()).expect("serialize");
        let obj = json.as_object().expect("object");
        // one entry per category, plus the split presence timestamp
        assert_eq!(obj.len(), 35);
        assert!(obj.contains_key("sleepDuration"));
        assert!(obj.contains_key("vo2Max"));
        assert!(obj.contains_key("sexualActivityTimestamp"));
        assert_eq!(json["weight"], serde_json::Value::Null);
        assert_eq!(json["steps"], 0);
    }

    #[test]
    fn blood_pressure_sides_are_independent() {
        let mut report = empty_report();
        report.blood_pressure.systolic = Some(120.0);
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["bloodPressure"]["systolic"], 120.0);
        assert_eq!(json["bloodPressure"]["diastolic"], serde_json::Value::Null);
    }
}
