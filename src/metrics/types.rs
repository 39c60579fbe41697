use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::PedometerConfig;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Achievement {
    Excellent,
    Good,
    KeepGoing,
    Participation,
}

impl Achievement {
    pub fn for_distance(distance_km: f64, config: &PedometerConfig) -> Self {
        if distance_km >= config.excellent_km {
            Achievement::Excellent
        } else if distance_km >= config.good_km {
            Achievement::Good
        } else if distance_km >= config.keep_going_km {
            Achievement::KeepGoing
        } else {
            Achievement::Participation
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Achievement::Excellent => "Excellent result! Goal reached.",
            Achievement::Good => "Not bad! The day was productive.",
            Achievement::KeepGoing => "We'll catch up tomorrow!",
            Achievement::Participation => {
                "Resting is useful too. Taking part matters more than winning!"
            }
        }
    }
}

/// Running totals for one day as of its latest reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub total_steps: i64,
    pub distance_km: f64,
    pub calories_kcal: f64,
    pub achievement: Achievement,
}
