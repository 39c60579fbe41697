pub mod store;
pub mod validation;

pub use store::{Acceptance, DayLog, LedgerMap, StepLedger};
pub use validation::RejectReason;
