//! Calculation logic for the simplified settlement estimate.

pub mod common;
pub mod schedule;
pub mod settlement;

pub use schedule::{BracketSchedule, ScheduleError};
pub use settlement::SettlementCalculator;
