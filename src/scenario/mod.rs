//! Batch evaluation of independent investment scenarios

pub mod loader;

pub use loader::{Scenario, load_scenarios, load_scenarios_from_reader};

use crate::error::{NpvError, Result};
use crate::projection::{NpvCalculator, NpvResult};
use log::info;

/// Result of evaluating one named scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: NpvResult,
}

/// Evaluate every scenario in order
///
/// Stops at the first invalid scenario, reporting its 1-based row number.
pub fn evaluate_scenarios(scenarios: &[Scenario]) -> Result<Vec<ScenarioOutcome>> {
    let calc = NpvCalculator::new();

    let outcomes = scenarios
        .iter()
        .enumerate()
        .map(|(idx, scenario)| {
            calc.evaluate(&scenario.investment)
                .map(|result| ScenarioOutcome {
                    name: scenario.name.clone(),
                    result,
                })
                .map_err(|err| NpvError::InvalidScenario {
                    row: idx + 1,
                    source: Box::new(err),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let break_even = outcomes.iter().filter(|o| o.result.breaks_even()).count();
    info!(
        "Evaluated {} scenarios, {} break even within lifespan",
        outcomes.len(),
        break_even
    );

    Ok(outcomes)
}
