use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{check_correct_data, Package};
use crate::utils::time::parse_checked_time;

/// Why a package was left out of the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RejectReason {
    /// Not a pair of truthy values.
    InvalidData,
    /// Truthy pair, but not a `(string, whole number)` one.
    WrongType,
    /// Time is not an `HH:MM:SS` string.
    MalformedTime,
    /// Time is not strictly after the day's latest reading.
    OutOfOrder,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::InvalidData => "InvalidData",
            RejectReason::WrongType => "WrongType",
            RejectReason::MalformedTime => "MalformedTime",
            RejectReason::OutOfOrder => "OutOfOrder",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn validate_package(values: &[Value]) -> Result<Package, RejectReason> {
    if !check_correct_data(values) {
        return Err(RejectReason::InvalidData);
    }
    Package::from_values(values).ok_or(RejectReason::WrongType)
}

/// Parse `time_str` and check it lands after `latest`, the day's last recorded time.
pub fn validate_time(
    time_str: &str,
    latest: Option<NaiveTime>,
) -> Result<NaiveTime, RejectReason> {
    let time = parse_checked_time(time_str).ok_or(RejectReason::MalformedTime)?;

    match latest {
        Some(last) if time <= last => Err(RejectReason::OutOfOrder),
        _ => Ok(time),
    }
}
