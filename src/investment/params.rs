//! Solar investment parameters
//!
//! Holds the scalar inputs of a single projection along with their defaults
//! and the domain checks applied before projecting.

use super::{
    DEFAULT_ANNUAL_DEGRADATION, DEFAULT_DISCOUNT_RATE, DEFAULT_INTEREST_RATE,
    DEFAULT_SYSTEM_LIFESPAN, MAX_SYSTEM_LIFESPAN,
};
use crate::error::{NpvError, Result};
use serde::{Deserialize, Serialize};

/// Inputs for one solar investment projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarInvestment {
    /// Annual electricity consumption offset by the system (kWh)
    pub consumption_kwh_per_year: f64,

    /// Current utility rate ($/kWh)
    pub utility_rate_per_kwh: f64,

    /// Total upfront cost of the system ($)
    pub system_cost: f64,

    /// Annual loan interest rate as a decimal (0.05 = 5%)
    /// Non-positive values fall back to the default discount rate
    #[serde(default = "default_interest_rate")]
    pub interest_rate: f64,

    /// Expected lifespan of the system (years)
    #[serde(default = "default_system_lifespan")]
    pub system_lifespan: u32,

    /// Annual efficiency loss as a decimal (0.005 = 0.5%)
    #[serde(default = "default_annual_degradation")]
    pub annual_degradation: f64,
}

fn default_interest_rate() -> f64 { DEFAULT_INTEREST_RATE }
fn default_system_lifespan() -> u32 { DEFAULT_SYSTEM_LIFESPAN }
fn default_annual_degradation() -> f64 { DEFAULT_ANNUAL_DEGRADATION }

/// Discount rate for a given interest rate
///
/// Uses the interest rate only when it is strictly positive. Zero and every
/// negative rate resolve to `DEFAULT_DISCOUNT_RATE`.
pub fn resolve_discount_rate(interest_rate: f64) -> f64 {
    if interest_rate > 0.0 {
        interest_rate
    } else {
        DEFAULT_DISCOUNT_RATE
    }
}

impl SolarInvestment {
    /// Create an investment with default interest, lifespan, and degradation
    pub fn new(consumption_kwh_per_year: f64, utility_rate_per_kwh: f64, system_cost: f64) -> Self {
        Self {
            consumption_kwh_per_year,
            utility_rate_per_kwh,
            system_cost,
            interest_rate: DEFAULT_INTEREST_RATE,
            system_lifespan: DEFAULT_SYSTEM_LIFESPAN,
            annual_degradation: DEFAULT_ANNUAL_DEGRADATION,
        }
    }

    pub fn with_interest_rate(mut self, interest_rate: f64) -> Self {
        self.interest_rate = interest_rate;
        self
    }

    pub fn with_lifespan(mut self, system_lifespan: u32) -> Self {
        self.system_lifespan = system_lifespan;
        self
    }

    pub fn with_degradation(mut self, annual_degradation: f64) -> Self {
        self.annual_degradation = annual_degradation;
        self
    }

    /// Discount rate applied to every year of the projection
    pub fn discount_rate(&self) -> f64 {
        resolve_discount_rate(self.interest_rate)
    }

    /// True when the interest rate was replaced by `DEFAULT_DISCOUNT_RATE`
    pub fn uses_fallback_rate(&self) -> bool {
        self.discount_rate() != self.interest_rate
    }

    /// Year-1 savings before degradation and discounting ($)
    pub fn base_annual_savings(&self) -> f64 {
        self.consumption_kwh_per_year * self.utility_rate_per_kwh
    }

    /// Check that every input lies in the domain the projection is defined on
    ///
    /// Negative interest rates are accepted; they resolve to the fallback
    /// discount rate rather than being rejected.
    pub fn validate(&self) -> Result<()> {
        require_positive("consumption_kwh_per_year", self.consumption_kwh_per_year)?;
        require_positive("utility_rate_per_kwh", self.utility_rate_per_kwh)?;
        require_positive("system_cost", self.system_cost)?;
        require_finite("interest_rate", self.interest_rate)?;

        if self.system_lifespan == 0 {
            return Err(NpvError::invalid("system_lifespan", "must be at least 1 year"));
        }
        if self.system_lifespan > MAX_SYSTEM_LIFESPAN {
            return Err(NpvError::invalid(
                "system_lifespan",
                format!(
                    "must be at most {MAX_SYSTEM_LIFESPAN} years, got {}",
                    self.system_lifespan
                ),
            ));
        }

        require_finite("annual_degradation", self.annual_degradation)?;
        if !(0.0..1.0).contains(&self.annual_degradation) {
            return Err(NpvError::invalid(
                "annual_degradation",
                format!("must be in [0, 1), got {}", self.annual_degradation),
            ));
        }

        Ok(())
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(NpvError::invalid(field, format!("must be finite, got {value}")))
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<()> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(NpvError::invalid(field, format!("must be positive, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> SolarInvestment {
        SolarInvestment::new(12_000.0, 0.15, 75_000.0).with_interest_rate(0.05)
    }

    #[test]
    fn test_defaults() {
        let inv = SolarInvestment::new(12_000.0, 0.15, 75_000.0);
        assert_eq!(inv.interest_rate, 0.0);
        assert_eq!(inv.system_lifespan, 25);
        assert_eq!(inv.annual_degradation, 0.005);
        assert!((inv.base_annual_savings() - 1_800.0).abs() < 1e-9);
    }

    #[test]
    fn test_discount_rate_threshold() {
        // Strictly positive rates are used exactly as given
        assert_eq!(resolve_discount_rate(0.05), 0.05);
        assert_eq!(resolve_discount_rate(1e-12), 1e-12);

        // Zero and any negative magnitude fall back to 3%
        assert_eq!(resolve_discount_rate(0.0), DEFAULT_DISCOUNT_RATE);
        assert_eq!(resolve_discount_rate(-0.0), DEFAULT_DISCOUNT_RATE);
        assert_eq!(resolve_discount_rate(-1e-12), DEFAULT_DISCOUNT_RATE);
        assert_eq!(resolve_discount_rate(-0.5), DEFAULT_DISCOUNT_RATE);

        assert_eq!(demo().discount_rate(), 0.05);
    }

    #[test]
    fn test_uses_fallback_rate() {
        assert!(!demo().uses_fallback_rate());
        assert!(demo().with_interest_rate(0.0).uses_fallback_rate());
        assert!(demo().with_interest_rate(-0.02).uses_fallback_rate());

        // An explicit 3% loan is used as given even though it equals the fallback
        assert!(!demo().with_interest_rate(DEFAULT_DISCOUNT_RATE).uses_fallback_rate());
    }

    #[test]
    fn test_validate_accepts_demo_and_negative_interest() {
        assert!(demo().validate().is_ok());
        assert!(demo().with_interest_rate(-0.02).validate().is_ok());
        assert!(demo().with_degradation(0.0).validate().is_ok());
        assert!(demo().with_lifespan(MAX_SYSTEM_LIFESPAN).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_domain() {
        let cases = [
            (
                SolarInvestment { consumption_kwh_per_year: 0.0, ..demo() },
                "consumption_kwh_per_year",
            ),
            (SolarInvestment { utility_rate_per_kwh: -0.1, ..demo() }, "utility_rate_per_kwh"),
            (SolarInvestment { system_cost: f64::NAN, ..demo() }, "system_cost"),
            (demo().with_interest_rate(f64::INFINITY), "interest_rate"),
            (demo().with_lifespan(0), "system_lifespan"),
            (demo().with_lifespan(MAX_SYSTEM_LIFESPAN + 1), "system_lifespan"),
            (demo().with_lifespan(u32::MAX), "system_lifespan"),
            (demo().with_degradation(1.0), "annual_degradation"),
            (demo().with_degradation(-0.01), "annual_degradation"),
        ];

        for (inv, expected) in cases {
            match inv.validate() {
                Err(NpvError::InvalidArgument { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidArgument for {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let json = r#"{
            "consumption_kwh_per_year": 9000,
            "utility_rate_per_kwh": 0.2,
            "system_cost": 30000
        }"#;
        let inv: SolarInvestment = serde_json::from_str(json).expect("valid json");
        assert_eq!(inv, SolarInvestment::new(9_000.0, 0.2, 30_000.0));
    }
}
