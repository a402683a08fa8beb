//! Yearly savings schedule and its summary measures

use crate::investment::{SolarInvestment, MAX_SYSTEM_LIFESPAN};
use serde::{Deserialize, Serialize};

/// One projection year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowRow {
    /// Projection year (1-indexed)
    pub year: u32,

    /// Remaining output fraction: (1 - degradation)^(year - 1)
    pub degradation_factor: f64,

    /// Nominal savings for the year ($)
    pub annual_savings: f64,

    /// Present-value factor: 1 / (1 + discount_rate)^year
    pub discount_factor: f64,

    /// Savings discounted to present value ($)
    pub discounted_savings: f64,

    /// Net position after this year: -system_cost + discounted savings to date
    pub cumulative: f64,
}

/// Discounted savings schedule over the system lifespan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowSchedule {
    pub system_cost: f64,
    pub discount_rate: f64,
    pub rows: Vec<CashflowRow>,
}

impl CashflowSchedule {
    /// Project the schedule without validating inputs
    ///
    /// A zero lifespan produces an empty schedule. Factors are carried forward
    /// year over year, so no exponent is ever narrowed to `i32`.
    pub fn project(investment: &SolarInvestment) -> Self {
        let discount_rate = investment.discount_rate();
        let base_savings = investment.base_annual_savings();
        let retention = 1.0 - investment.annual_degradation;

        let capacity = investment.system_lifespan.min(MAX_SYSTEM_LIFESPAN) as usize;
        let mut rows = Vec::with_capacity(capacity);
        let mut cumulative = -investment.system_cost;
        let mut degradation_factor = 1.0;
        let mut discount = 1.0;

        for year in 1..=investment.system_lifespan {
            if year > 1 {
                degradation_factor *= retention;
            }
            discount *= 1.0 + discount_rate;
            let annual_savings = base_savings * degradation_factor;
            let discounted_savings = annual_savings / discount;
            cumulative += discounted_savings;

            rows.push(CashflowRow {
                year,
                degradation_factor,
                annual_savings,
                discount_factor: 1.0 / discount,
                discounted_savings,
                cumulative,
            });
        }

        Self {
            system_cost: investment.system_cost,
            discount_rate,
            rows,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Discounted savings in year order
    pub fn discounted_savings(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.discounted_savings).collect()
    }

    /// Sum of discounted savings over the lifespan ($)
    pub fn total_discounted_savings(&self) -> f64 {
        self.rows.iter().map(|r| r.discounted_savings).sum()
    }

    /// Sum of nominal (undiscounted) savings over the lifespan ($)
    pub fn total_nominal_savings(&self) -> f64 {
        self.rows.iter().map(|r| r.annual_savings).sum()
    }

    /// Net present value: -system_cost + total discounted savings
    pub fn npv(&self) -> f64 {
        -self.system_cost + self.total_discounted_savings()
    }

    /// First year whose cumulative discounted position is non-negative
    ///
    /// Returns None when the system does not break even within its lifespan.
    pub fn payback_period(&self) -> Option<u32> {
        self.rows
            .iter()
            .find(|r| r.cumulative >= 0.0)
            .map(|r| r.year)
    }
}
