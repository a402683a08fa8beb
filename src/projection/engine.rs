//! NPV calculator: validates inputs, projects savings, and summarizes the result

use super::cashflows::CashflowSchedule;
use crate::error::Result;
use crate::investment::SolarInvestment;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a single investment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpvResult {
    /// Net present value of the investment ($)
    pub npv: f64,

    /// First year the discounted savings recover the system cost, if any
    pub payback_period: Option<u32>,

    /// Discount rate applied to the projection
    pub discount_rate: f64,

    /// Lifetime savings before discounting ($)
    pub total_nominal_savings: f64,

    /// Lifetime savings discounted to present value ($)
    pub total_discounted_savings: f64,

    /// Year-by-year detail
    pub schedule: CashflowSchedule,
}

impl NpvResult {
    pub fn breaks_even(&self) -> bool {
        self.payback_period.is_some()
    }
}

/// Stateless evaluator for solar investments
#[derive(Debug, Clone, Copy, Default)]
pub struct NpvCalculator;

impl NpvCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Validate and project one investment
    pub fn evaluate(&self, investment: &SolarInvestment) -> Result<NpvResult> {
        investment.validate()?;

        let schedule = CashflowSchedule::project(investment);

        if investment.uses_fallback_rate() {
            if investment.interest_rate < 0.0 {
                warn!(
                    "Negative interest rate {} replaced by fallback discount rate {}",
                    investment.interest_rate, schedule.discount_rate
                );
            } else {
                debug!(
                    "No financing interest; using fallback discount rate {}",
                    schedule.discount_rate
                );
            }
        }

        let npv = schedule.npv();
        let payback_period = schedule.payback_period();

        debug!(
            "Projected {} years at discount rate {:.4}: npv={:.2}, payback={:?}",
            schedule.len(),
            schedule.discount_rate,
            npv,
            payback_period
        );

        Ok(NpvResult {
            npv,
            payback_period,
            discount_rate: schedule.discount_rate,
            total_nominal_savings: schedule.total_nominal_savings(),
            total_discounted_savings: schedule.total_discounted_savings(),
            schedule,
        })
    }
}
