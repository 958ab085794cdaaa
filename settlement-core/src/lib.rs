//! Core computation for a simplified year-end settlement (연말정산) estimate.
//!
//! The crate is a pure leaf: it maps (gross salary, total deductions, total
//! credits) to (taxable income, computed tax, final tax) over a validated
//! progressive bracket schedule. No I/O, no global state, no async.

pub mod calculations;
pub mod models;

pub use calculations::{BracketSchedule, ScheduleError, SettlementCalculator};
pub use models::*;
