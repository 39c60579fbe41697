use std::collections::BTreeMap;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use serde_json::Value;

use crate::config::PedometerConfig;
use crate::log_debug;
use crate::metrics::{self, DaySummary};
use crate::models::Reading;
use crate::report;

use super::validation::{validate_package, validate_time, RejectReason};

const ENABLE_LOGS: bool = true;

/// Steps per reading time for one day. Keys only ever grow, so iteration
/// order is also acceptance order.
pub type DayLog = BTreeMap<NaiveTime, i64>;

pub type LedgerMap = BTreeMap<NaiveDate, DayLog>;

#[derive(Debug, Clone)]
pub enum Acceptance {
    Accepted(DaySummary),
    Rejected(RejectReason),
}

impl Acceptance {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Acceptance::Accepted(_))
    }

    pub fn summary(&self) -> Option<&DaySummary> {
        match self {
            Acceptance::Accepted(summary) => Some(summary),
            Acceptance::Rejected(_) => None,
        }
    }
}

/// In-memory step ledger, one ordered log per calendar date.
#[derive(Debug, Default)]
pub struct StepLedger {
    days: LedgerMap,
    config: PedometerConfig,
}

impl StepLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn days(&self) -> &LedgerMap {
        &self.days
    }

    pub fn get_day(&self, date: NaiveDate) -> Option<&DayLog> {
        self.days.get(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn reading_count(&self, date: NaiveDate) -> usize {
        self.days.get(&date).map_or(0, BTreeMap::len)
    }

    pub fn latest_time(&self, date: NaiveDate) -> Option<NaiveTime> {
        self.days
            .get(&date)
            .and_then(|log| log.last_key_value())
            .map(|(time, _)| *time)
    }

    pub fn readings(&self, date: NaiveDate) -> impl Iterator<Item = Reading> + '_ {
        self.days
            .get(&date)
            .into_iter()
            .flat_map(move |log| {
                log.iter().map(move |(time, steps)| Reading {
                    date,
                    time: *time,
                    steps: *steps,
                })
            })
    }

    /// Total steps recorded for `date`, zero when the day has no readings.
    pub fn get_step_day(&self, date: NaiveDate) -> i64 {
        self.days
            .get(&date)
            .map_or(0, |log| log.values().fold(0i64, |acc, steps| acc.saturating_add(*steps)))
    }

    /// Whether `time_str` is a well-formed time later than everything stored for `date`.
    pub fn check_correct_time(&self, time_str: &str, date: NaiveDate) -> bool {
        validate_time(time_str, self.latest_time(date)).is_ok()
    }

    /// Summary of `date` as of its latest reading.
    pub fn summary_for(&self, date: NaiveDate) -> Option<DaySummary> {
        let time = self.latest_time(date)?;
        Some(metrics::summarize(
            date,
            time,
            self.get_step_day(date),
            &self.config,
        ))
    }

    /// Validate a raw `(time, steps)` pair and record it under `date`.
    pub fn accept(&mut self, date: NaiveDate, values: &[Value]) -> Acceptance {
        match self.try_accept(date, values) {
            Ok(summary) => Acceptance::Accepted(summary),
            Err(reason) => {
                log_debug!("Rejected package {:?} for {}: {}", values, date, reason);
                Acceptance::Rejected(reason)
            }
        }
    }

    fn try_accept(
        &mut self,
        date: NaiveDate,
        values: &[Value],
    ) -> Result<DaySummary, RejectReason> {
        let package = validate_package(values)?;
        let time = validate_time(&package.time, self.latest_time(date))?;

        self.days.entry(date).or_default().insert(time, package.steps);
        log_debug!("Recorded {} steps at {} on {}", package.steps, time, date);

        let total_steps = self.get_step_day(date);
        Ok(metrics::summarize(date, time, total_steps, &self.config))
    }

    /// Record a package for `date`, print the day's summary when it is accepted,
    /// and hand back the whole ledger. Rejected packages leave it untouched.
    pub fn accept_package_on(&mut self, date: NaiveDate, values: &[Value]) -> &LedgerMap {
        if let Acceptance::Accepted(summary) = self.accept(date, values) {
            report::show_summary(&summary);
        }
        &self.days
    }

    /// [`accept_package_on`](Self::accept_package_on) for the local system date.
    pub fn accept_package(&mut self, values: &[Value]) -> &LedgerMap {
        let today = Local::now().date_naive();
        self.accept_package_on(today, values)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.days).context("failed to serialize step ledger")
    }
}
