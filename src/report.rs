//! Text summary printed after each accepted reading.

use crate::config::PedometerConfig;
use crate::metrics::{Achievement, DaySummary};
use crate::utils::time::TIME_FORMAT;

/// Build the summary block for a running total.
pub fn format_message(time: &str, steps: i64, distance_km: f64, calories_kcal: f64) -> String {
    let achievement = Achievement::for_distance(distance_km, &PedometerConfig::default());

    format!(
        "\n\n\
         Time: {time}.\n\
         Steps today: {steps}.\n\
         Distance covered: {distance_km:.2} km.\n\
         Calories burned: {calories_kcal:.2} kcal.\n\
         {}\n\
         \n\n",
        achievement.message()
    )
}

pub fn show_message(time: &str, steps: i64, distance_km: f64, calories_kcal: f64) {
    print!("{}", format_message(time, steps, distance_km, calories_kcal));
}

pub fn show_summary(summary: &DaySummary) {
    show_message(
        &summary.time.format(TIME_FORMAT).to_string(),
        summary.total_steps,
        summary.distance_km,
        summary.calories_kcal,
    );
}
