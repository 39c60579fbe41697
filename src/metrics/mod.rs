mod types;

pub use types::{Achievement, DaySummary};

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};

use crate::config::PedometerConfig;
use crate::utils::time::{hours_since_midnight, parse_time};

const METERS_PER_KM: f64 = 1000.0;
const MINUTES_PER_HOUR: f64 = 60.0;

/// Distance in km for a step count, using the default stride.
pub fn get_distance(steps: i64) -> f64 {
    distance_km(steps, &PedometerConfig::default())
}

/// Calories burned since midnight for a distance walked by `time_str` (`HH:MM:SS`).
pub fn get_spent_calories(distance_km: f64, time_str: &str) -> Result<f64> {
    let time = parse_time(time_str)?;
    Ok(spent_calories(distance_km, time, &PedometerConfig::default()))
}

pub fn distance_km(steps: i64, config: &PedometerConfig) -> f64 {
    steps as f64 * config.step_length_m / METERS_PER_KM
}

/// Walking calorie estimate over the time elapsed since midnight.
/// Mean speed is zero at midnight so the division never happens.
pub fn spent_calories(distance_km: f64, time: NaiveTime, config: &PedometerConfig) -> f64 {
    let hours = hours_since_midnight(time);
    let minutes = hours * MINUTES_PER_HOUR;
    let mean_speed = if hours > 0.0 { distance_km / hours } else { 0.0 };

    (config.k1 * config.weight_kg
        + (mean_speed.powi(2) / config.height_cm) * config.k2 * config.weight_kg)
        * minutes
}

/// Derive every metric for a day's running total at `time`.
pub fn summarize(
    date: NaiveDate,
    time: NaiveTime,
    total_steps: i64,
    config: &PedometerConfig,
) -> DaySummary {
    let distance = distance_km(total_steps, config);
    let calories = spent_calories(distance, time, config);

    DaySummary {
        date,
        time,
        total_steps,
        distance_km: distance,
        calories_kcal: calories,
        achievement: Achievement::for_distance(distance, config),
    }
}
