use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One accepted step observation: steps counted in the interval ending at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub steps: i64,
}
