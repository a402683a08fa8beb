//! Discounted savings projection for a single investment

mod cashflows;
mod engine;

pub use cashflows::{CashflowRow, CashflowSchedule};
pub use engine::{NpvCalculator, NpvResult};
