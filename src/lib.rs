//! Daily step ledger.
//!
//! Accepts `(time, steps)` packages for the current day, rejects malformed or
//! out-of-order ones, and reports the running step total together with the
//! distance walked and calories burned.

pub mod config;
pub mod feed;
pub mod ledger;
pub mod metrics;
pub mod models;
pub mod report;
pub mod utils;

pub use config::PedometerConfig;
pub use ledger::{Acceptance, RejectReason, StepLedger};
pub use metrics::{get_distance, get_spent_calories, Achievement, DaySummary};
pub use models::{check_correct_data, Package, Reading};
pub use report::show_message;

use chrono::Local;

const ENABLE_LOGS: bool = true;

/// Read packages from stdin until EOF. `--json` prints the final ledger.
pub fn run() -> anyhow::Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let print_json = std::env::args().skip(1).any(|arg| arg == "--json");

    let mut ledger = StepLedger::new();
    let stdin = std::io::stdin();
    let stats = feed::feed_packages(stdin.lock(), &mut ledger)?;

    let today = Local::now().date_naive();
    crate::log_info!(
        "Processed {} packages ({} unreadable); {} readings, {} steps today",
        stats.lines,
        stats.unreadable,
        ledger.reading_count(today),
        ledger.get_step_day(today)
    );

    if print_json {
        println!("{}", ledger.to_json()?);
    }

    Ok(())
}
