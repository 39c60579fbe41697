//! Line-oriented package feed: one JSON pair per line, e.g. `["09:00:00", 1000]`.

use std::io::BufRead;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;

use crate::ledger::StepLedger;
use crate::log_warn;

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub lines: usize,
    pub unreadable: usize,
}

/// Push every line of `reader` through [`StepLedger::accept_package`].
/// Lines that are not a JSON array are logged and skipped.
pub fn feed_packages<R: BufRead>(reader: R, ledger: &mut StepLedger) -> Result<FeedStats> {
    feed(reader, ledger, None)
}

/// Same as [`feed_packages`], with every package recorded under `date`.
pub fn feed_packages_on<R: BufRead>(
    reader: R,
    ledger: &mut StepLedger,
    date: NaiveDate,
) -> Result<FeedStats> {
    feed(reader, ledger, Some(date))
}

fn feed<R: BufRead>(
    reader: R,
    ledger: &mut StepLedger,
    date: Option<NaiveDate>,
) -> Result<FeedStats> {
    let mut stats = FeedStats::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read input line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        stats.lines += 1;
        match serde_json::from_str::<Vec<Value>>(trimmed) {
            Ok(values) => match date {
                Some(date) => {
                    ledger.accept_package_on(date, &values);
                }
                None => {
                    ledger.accept_package(&values);
                }
            },
            Err(err) => {
                stats.unreadable += 1;
                log_warn!("Skipping line {}: {}", index + 1, err);
            }
        }
    }

    Ok(stats)
}
