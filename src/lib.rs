//! Solar NPV - discounted savings projection for solar energy investments
//!
//! This library provides:
//! - Investment inputs with defaults and domain validation
//! - Yearly degraded, discounted savings schedules
//! - Net present value and discounted payback period
//! - Batch evaluation of scenarios loaded from CSV
//! - Currency, table, CSV and JSON reporting

pub mod error;
pub mod investment;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use error::{NpvError, Result};
pub use investment::SolarInvestment;
pub use projection::{CashflowRow, CashflowSchedule, NpvCalculator, NpvResult};

/// Compute NPV and payback period for a solar investment
///
/// # Arguments
/// * `consumption_kwh_per_year` - Annual electricity consumption (kWh)
/// * `utility_rate_per_kwh` - Current utility rate ($/kWh)
/// * `system_cost` - Total upfront cost of the system ($)
/// * `interest_rate` - Annual loan interest rate; non-positive values discount at 3%
/// * `system_lifespan` - Expected lifespan of the system (years)
/// * `annual_degradation` - Annual efficiency loss as a decimal
///
/// # Returns
/// `(npv, payback_period)`, where a `None` payback means the system does not
/// break even within its lifespan.
pub fn compute_npv(
    consumption_kwh_per_year: f64,
    utility_rate_per_kwh: f64,
    system_cost: f64,
    interest_rate: f64,
    system_lifespan: u32,
    annual_degradation: f64,
) -> Result<(f64, Option<u32>)> {
    let investment =
        SolarInvestment::new(consumption_kwh_per_year, utility_rate_per_kwh, system_cost)
            .with_interest_rate(interest_rate)
            .with_lifespan(system_lifespan)
            .with_degradation(annual_degradation);

    let result = NpvCalculator::new().evaluate(&investment)?;
    Ok((result.npv, result.payback_period))
}
