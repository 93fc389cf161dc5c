//! Display rows for a daily report.
//!
//! Turns the report into labeled, unit-annotated rows grouped into sections.
//! Display-only unit conversions happen here: distance meters→km, height
//! meters→cm, sleep hours→"H hr M min" text. Absent values render as "N/A".

use crate::report::DailyReport;
use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Activity,
    BodyMeasurements,
    Nutrition,
    Sleep,
    Vitals,
    ReproductiveHealth,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Activity => "Activity",
            Section::BodyMeasurements => "Body Measurements",
            Section::Nutrition => "Nutrition",
            Section::Sleep => "Sleep",
            Section::Vitals => "Vitals",
            Section::ReproductiveHealth => "Reproductive Health",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub section: Section,
    pub label: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl ReportRow {
    fn new(section: Section, label: &'static str, value: String, unit: &'static str) -> Self {
        Self {
            section,
            label,
            value,
            unit,
        }
    }
}

const NO_DATA: &str = "N/A";

fn opt_fixed(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{v:.decimals$}"),
        None => NO_DATA.into(),
    }
}

fn opt_count(value: Option<u64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| NO_DATA.into())
}

fn opt_text(value: Option<&str>) -> String {
    value.map(str::to_string).unwrap_or_else(|| NO_DATA.into())
}

fn opt_instant(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| NO_DATA.into())
}

/// Thousands-separated integer, "7521" → "7,521".
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "7 hrs 30 mins", with singular forms at exactly one.
fn sleep_text(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let h = total_minutes / 60;
    let m = total_minutes % 60;
    format!(
        "{} hr{} {} min{}",
        h,
        if h != 1 { "s" } else { "" },
        m,
        if m != 1 { "s" } else { "" }
    )
}

fn blood_pressure_text(report: &DailyReport) -> String {
    match (
        report.blood_pressure.systolic,
        report.blood_pressure.diastolic,
    ) {
        (Some(sys), Some(dia)) => format!("{sys:.0}/{dia:.0}"),
        _ => NO_DATA.into(),
    }
}

/// Every category as a display row, in presentation order.
pub fn report_rows(report: &DailyReport) -> Vec<ReportRow> {
    use Section::*;

    let hydration = if report.hydration > 0.0 {
        format!("{:.2}", report.hydration)
    } else {
        NO_DATA.into()
    };

    vec![
        ReportRow::new(Activity, "Steps", group_thousands(report.steps), "steps"),
        ReportRow::new(
            Activity,
            "Distance",
            format!("{:.2}", report.distance / 1000.0),
            "km",
        ),
        ReportRow::new(
            Activity,
            "Total Calories Burned",
            format!("{:.0}", report.calories),
            "kcal",
        ),
        ReportRow::new(
            Activity,
            "Active Calories",
            format!("{:.0}", report.active_calories),
            "kcal",
        ),
        ReportRow::new(
            Activity,
            "Elevation Gained",
            opt_fixed(report.elevation_gained, 1),
            "m",
        ),
        ReportRow::new(
            Activity,
            "Exercise Session",
            opt_text(report.exercise_session.as_deref()),
            "",
        ),
        ReportRow::new(
            Activity,
            "Floors Climbed",
            opt_fixed(report.floors_climbed, 0),
            "floors",
        ),
        ReportRow::new(Activity, "Power", opt_fixed(report.power, 1), "W"),
        ReportRow::new(Activity, "Speed", opt_fixed(report.speed, 2), "m/s"),
        ReportRow::new(
            Activity,
            "Steps Cadence",
            opt_fixed(report.steps_cadence, 0),
            "spm",
        ),
        ReportRow::new(
            Activity,
            "Wheelchair Pushes",
            opt_count(report.wheelchair_pushes),
            "pushes",
        ),
        ReportRow::new(
            BodyMeasurements,
            "Height",
            opt_fixed(report.height.map(|m| m * 100.0), 1),
            "cm",
        ),
        ReportRow::new(
            BodyMeasurements,
            "Weight",
            opt_fixed(report.weight, 1),
            "kg",
        ),
        ReportRow::new(
            BodyMeasurements,
            "Body Fat",
            opt_fixed(report.body_fat, 1),
            "%",
        ),
        ReportRow::new(
            BodyMeasurements,
            "Lean Body Mass",
            opt_fixed(report.lean_body_mass, 2),
            "kg",
        ),
        ReportRow::new(
            BodyMeasurements,
            "Bone Mass",
            opt_fixed(report.bone_mass, 2),
            "kg",
        ),
        ReportRow::new(
            Nutrition,
            "Nutrition",
            opt_fixed(report.nutrition, 0),
            "kcal",
        ),
        ReportRow::new(Nutrition, "Hydration", hydration, "L"),
        ReportRow::new(Sleep, "Sleep", sleep_text(report.sleep_duration), ""),
        ReportRow::new(Vitals, "Heart Rate", opt_fixed(report.heart_rate, 0), "bpm"),
        ReportRow::new(
            Vitals,
            "Resting Heart Rate",
            opt_fixed(report.resting_heart_rate, 0),
            "bpm",
        ),
        ReportRow::new(
            Vitals,
            "Blood Pressure",
            blood_pressure_text(report),
            "mmHg",
        ),
        ReportRow::new(
            Vitals,
            "Blood Glucose",
            opt_fixed(report.blood_glucose, 2),
            "mmol/L",
        ),
        ReportRow::new(
            Vitals,
            "Body Temperature",
            opt_fixed(report.body_temperature, 1),
            "°C",
        ),
        ReportRow::new(
            Vitals,
            "Basal Body Temp.",
            opt_fixed(report.basal_body_temperature, 1),
            "°C",
        ),
        ReportRow::new(
            Vitals,
            "Basal Metabolic Rate",
            opt_fixed(report.basal_metabolic_rate, 0),
            "kcal/day",
        ),
        ReportRow::new(
            Vitals,
            "Oxygen Saturation",
            opt_fixed(report.oxygen_saturation, 1),
            "%",
        ),
        ReportRow::new(
            Vitals,
            "Respiratory Rate",
            opt_fixed(report.respiratory_rate, 1),
            "breaths/min",
        ),
        ReportRow::new(Vitals, "VO2 Max", opt_fixed(report.vo2_max, 1), "ml/(min·kg)"),
        ReportRow::new(
            ReproductiveHealth,
            "Menstruation Flow",
            opt_text(report.menstruation_flow.as_deref()),
            "",
        ),
        ReportRow::new(
            ReproductiveHealth,
            "Menstruation Period",
            opt_instant(report.menstruation_period),
            "",
        ),
        ReportRow::new(
            ReproductiveHealth,
            "Ovulation Test",
            opt_text(report.ovulation_test.as_deref()),
            "",
        ),
        ReportRow::new(
            ReproductiveHealth,
            "Cervical Mucus",
            opt_text(report.cervical_mucus.as_deref()),
            "",
        ),
        ReportRow::new(
            ReproductiveHealth,
            "Sexual Activity Time",
            opt_instant(report.sexual_activity_timestamp),
            "",
        ),
    ]
}
