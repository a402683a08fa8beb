//! Investment inputs and discount rate resolution

mod params;

pub use params::{SolarInvestment, resolve_discount_rate};

// ============================================================================
// Default Financial Assumptions
// ============================================================================
// Applied when an input set leaves the optional fields unspecified.
// - A system bought outright (no loan) is discounted at the fallback rate
// - Panels lose half a percent of output per year

/// Discount rate used whenever the interest rate is not strictly positive (3%)
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.03;

/// Default annual loan interest rate (0% = purchased outright)
pub const DEFAULT_INTEREST_RATE: f64 = 0.0;

/// Default expected system lifespan in years
pub const DEFAULT_SYSTEM_LIFESPAN: u32 = 25;

/// Default annual efficiency loss (0.5%)
pub const DEFAULT_ANNUAL_DEGRADATION: f64 = 0.005;

/// Longest lifespan accepted by validation (years)
pub const MAX_SYSTEM_LIFESPAN: u32 = 200;
