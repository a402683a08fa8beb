//! Scenario CSV loading
//!
//! Columns: name, consumption_kwh_per_year, utility_rate_per_kwh, system_cost,
//! and optionally interest_rate, system_lifespan, annual_degradation. Empty or
//! missing optional cells take the investment defaults.

use crate::error::Result;
use crate::investment::{
    SolarInvestment, DEFAULT_ANNUAL_DEGRADATION, DEFAULT_INTEREST_RATE, DEFAULT_SYSTEM_LIFESPAN,
};
use log::info;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A named set of investment inputs
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub investment: SolarInvestment,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct ScenarioRecord {
    name: String,
    consumption_kwh_per_year: f64,
    utility_rate_per_kwh: f64,
    system_cost: f64,
    #[serde(default)]
    interest_rate: Option<f64>,
    #[serde(default)]
    system_lifespan: Option<u32>,
    #[serde(default)]
    annual_degradation: Option<f64>,
}

impl From<ScenarioRecord> for Scenario {
    fn from(rec: ScenarioRecord) -> Self {
        Self {
            name: rec.name,
            investment: SolarInvestment {
                consumption_kwh_per_year: rec.consumption_kwh_per_year,
                utility_rate_per_kwh: rec.utility_rate_per_kwh,
                system_cost: rec.system_cost,
                interest_rate: rec.interest_rate.unwrap_or(DEFAULT_INTEREST_RATE),
                system_lifespan: rec.system_lifespan.unwrap_or(DEFAULT_SYSTEM_LIFESPAN),
                annual_degradation: rec.annual_degradation.unwrap_or(DEFAULT_ANNUAL_DEGRADATION),
            },
        }
    }
}

/// Load scenarios from any reader producing CSV with a header row
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for record in rdr.deserialize::<ScenarioRecord>() {
        scenarios.push(Scenario::from(record?));
    }

    Ok(scenarios)
}

/// Load scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}
