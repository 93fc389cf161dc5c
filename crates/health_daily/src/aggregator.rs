//! The daily aggregation routine.
//!
//! One aggregation call issues every daily-window category query
//! concurrently, joins them, then runs the two trailing-window queries, and
//! reduces each category's records into the fixed-shape report. The whole
//! call is fail-fast: the first failed query aborts the aggregation and no
//! partial report is returned.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use futures_util::future;
use tokio::sync::OnceCell;

use crate::category::{Category, CategoryPolicy, TRAILING_DAYS, WindowPolicy};
use crate::error::{ReportError, ReportResult};
use crate::reduce;
use crate::report::{BloodPressureReading, DailyReport};
use crate::window;
use health_connect_client::{HealthConnectClient, HealthRecord, Permission};

pub struct DailyAggregator {
    client: Arc<dyn HealthConnectClient>,
    ready: OnceCell<()>,
}

impl DailyAggregator {
    pub fn new(client: Arc<dyn HealthConnectClient>) -> Self {
        Self {
            client,
            ready: OnceCell::new(),
        }
    }

    /// Produce the report for `date` (caller's local calendar day). The
    /// trailing-window categories are anchored to the current wall-clock
    /// time, so paging to a past date still reports the most recent known
    /// height and weight.
    pub async fn aggregate(&self, date: NaiveDate) -> ReportResult<DailyReport> {
        self.aggregate_at(date, Utc::now()).await
    }

    /// Like [`aggregate`](Self::aggregate) with an explicit trailing-window
    /// anchor. Two calls with the same date, the same anchor, and an
    /// unchanged record source produce identical reports.
    pub async fn aggregate_at(
        &self,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> ReportResult<DailyReport> {
        let result = self.aggregate_inner(date, now).await;
        match &result {
            Ok(_) => metrics::counter!("health_daily_aggregations_total").increment(1),
            Err(_) => metrics::counter!("health_daily_aggregation_failures_total").increment(1),
        }
        result
    }

    async fn aggregate_inner(
        &self,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> ReportResult<DailyReport> {
        self.ensure_ready().await?;

        let daily = window::daily_range(date);
        let queries = Category::ALL
            .iter()
            .copied()
            .filter(|c| c.window_policy() == WindowPolicy::Daily)
            .map(|category| {
                let filter = daily.clone();
                let client = Arc::clone(&self.client);
                async move {
                    client
                        .read_records(category, &filter)
                        .await
                        .map(|resp| (category, resp.records))
                        .map_err(|source| ReportError::Aggregation { category, source })
                }
            });
        // barrier: every daily query completes (or the first failure aborts
        // the lot) before any reducer runs
        let mut by_category: HashMap<Category, Vec<HealthRecord>> =
            future::try_join_all(queries).await?.into_iter().collect();

        // trailing lookback queries run after the daily barrier
        let trailing = window::trailing_range(TRAILING_DAYS, now);
        for category in [Category::Height, Category::Weight] {
            let resp = self
                .client
                .read_records(category, &trailing)
                .await
                .map_err(|source| ReportError::Aggregation { category, source })?;
            by_category.insert(category, resp.records);
        }

        Ok(assemble(&by_category))
    }

    /// Initialize the platform and obtain the read grant once per
    /// aggregator. A failed attempt is not cached, so a later call retries
    /// the handshake (not the aggregation).
    async fn ensure_ready(&self) -> ReportResult<()> {
        self.ready
            .get_or_try_init(|| async {
                let available = self
                    .client
                    .initialize()
                    .await
                    .map_err(|e| ReportError::Initialization(e.to_string()))?;
                if !available {
                    return Err(ReportError::Initialization(
                        "health platform reported unavailable".into(),
                    ));
                }

                let requested = Permission::read_all();
                let granted = self
                    .client
                    .request_permissions(&requested)
                    .await
                    .map_err(|e| match e {
                        health_connect_client::HealthConnectError::Denied(msg) => {
                            ReportError::PermissionDenied(msg)
                        }
                        other => ReportError::Initialization(other.to_string()),
                    })?;
                let missing: Vec<&Permission> = requested
                    .iter()
                    .filter(|p| !granted.contains(*p))
                    .collect();
                if !missing.is_empty() {
                    let names: Vec<&str> =
                        missing.iter().map(|p| p.record_type.as_str()).collect();
                    return Err(ReportError::PermissionDenied(names.join(", ")));
                }
                Ok(())
            })
            .await
            .map(|_| ())
    }
}

fn assemble(by_category: &HashMap<Category, Vec<HealthRecord>>) -> DailyReport {
    let records = |category: Category| -> &[HealthRecord] {
        by_category.get(&category).map(Vec::as_slice).unwrap_or(&[])
    };
    let latest_of = |category: Category| reduce::latest(records(category));

    let (sexual_activity, sexual_activity_timestamp) =
        reduce::presence(records(Category::SexualActivity));

    DailyReport {
        steps: reduce::sum_counts(records(Category::Steps)),
        height: latest_of(Category::Height).and_then(|r| r.height.map(|l| l.in_meters)),
        weight: latest_of(Category::Weight).and_then(|r| r.weight.map(|m| m.in_kilograms)),
        sleep_duration: reduce::duration_hours(records(Category::SleepSession)),
        distance: reduce::sum_by(records(Category::Distance), |r| {
            r.distance.map(|l| l.in_meters).unwrap_or(0.0)
        }),
        calories: reduce::sum_by(records(Category::TotalCaloriesBurned), |r| {
            r.energy.map(|e| e.in_kilocalories).unwrap_or(0.0)
        }),
        menstruation_flow: latest_of(Category::MenstruationFlow)
            .and_then(|r| r.flow.as_ref().map(ToString::to_string)),
        menstruation_period: latest_of(Category::MenstruationPeriod).and_then(|r| r.start_time),
        heart_rate: latest_of(Category::HeartRate)
            .and_then(|r| r.first_sample())
            .and_then(|s| s.beats_per_minute),
        hydration: reduce::sum_by(records(Category::Hydration), |r| {
            r.volume.map(|v| v.in_liters).unwrap_or(0.0)
        }),
        blood_pressure: latest_of(Category::BloodPressure)
            .map(|r| BloodPressureReading {
                systolic: r.systolic.map(|p| p.in_millimeters_of_mercury),
                diastolic: r.diastolic.map(|p| p.in_millimeters_of_mercury),
            })
            .unwrap_or_default(),
        body_temperature: latest_of(Category::BodyTemperature)
            .and_then(|r| r.temperature.map(|t| t.in_celsius)),
        active_calories: reduce::sum_by(records(Category::ActiveCaloriesBurned), |r| {
            r.energy.map(|e| e.in_kilocalories).unwrap_or(0.0)
        }),
        basal_body_temperature: latest_of(Category::BasalBodyTemperature)
            .and_then(|r| r.temperature.map(|t| t.in_celsius)),
        basal_metabolic_rate: latest_of(Category::BasalMetabolicRate)
            .and_then(|r| r.basal_metabolic_rate.map(|b| b.in_kilocalories_per_day)),
        blood_glucose: latest_of(Category::BloodGlucose)
            .and_then(|r| r.level.map(|l| l.in_millimoles_per_liter)),
        body_fat: latest_of(Category::BodyFat).and_then(|r| r.percentage),
        bone_mass: latest_of(Category::BoneMass).and_then(|r| r.mass.map(|m| m.in_kilograms)),
        cervical_mucus: latest_of(Category::CervicalMucus)
            .and_then(|r| r.appearance.as_ref().map(ToString::to_string)),
        elevation_gained: reduce::sum_optional(records(Category::ElevationGained), |r| {
            r.elevation.map(|l| l.in_meters).unwrap_or(0.0)
        }),
        exercise_session: latest_of(Category::ExerciseSession).and_then(|r| r.title.clone()),
        floors_climbed: reduce::sum_optional(records(Category::FloorsClimbed), |r| {
            r.floors.unwrap_or(0.0)
        }),
        lean_body_mass: latest_of(Category::LeanBodyMass)
            .and_then(|r| r.mass.map(|m| m.in_kilograms)),
        nutrition: latest_of(Category::Nutrition)
            .and_then(|r| r.energy.map(|e| e.in_kilocalories)),
        ovulation_test: latest_of(Category::OvulationTest)
            .and_then(|r| r.result.as_ref().map(ToString::to_string)),
        oxygen_saturation: latest_of(Category::OxygenSaturation).and_then(|r| r.percentage),
        power: latest_of(Category::Power)
            .and_then(|r| r.first_sample())
            .and_then(|s| s.power.map(|p| p.in_watts)),
        respiratory_rate: latest_of(Category::RespiratoryRate).and_then(|r| r.rate),
        resting_heart_rate: latest_of(Category::RestingHeartRate)
            .and_then(|r| r.beats_per_minute),
        sexual_activity,
        sexual_activity_timestamp,
        speed: latest_of(Category::Speed)
            .and_then(|r| r.first_sample())
            .and_then(|s| s.speed.map(|v| v.in_meters_per_second)),
        steps_cadence: latest_of(Category::StepsCadence)
            .and_then(|r| r.first_sample())
            .and_then(|s| s.rate),
        vo2_max: latest_of(Category::Vo2Max)
            .and_then(|r| r.vo2_milliliters_per_minute_kilogram),
        wheelchair_pushes: reduce::sum_counts_optional(records(Category::WheelchairPushes)),
    }
}
