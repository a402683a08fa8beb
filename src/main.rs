//! Solar investment NPV calculator
//!
//! With no arguments, evaluates the reference system (12,000 kWh/year at
//! $0.15/kWh, $75,000 installed, 5% financing) and prints NPV and payback.

use anyhow::{Context, Result};
use clap::Parser;
use solar_npv::investment::{DEFAULT_ANNUAL_DEGRADATION, DEFAULT_SYSTEM_LIFESPAN};
use solar_npv::projection::NpvCalculator;
use solar_npv::report::{
    summary_lines, to_json, write_scenario_lines, write_schedule, write_summary_csv,
};
use solar_npv::scenario::{evaluate_scenarios, load_scenarios};
use solar_npv::SolarInvestment;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "solar_npv",
    version,
    about = "Net present value and payback of a solar investment"
)]
struct Cli {
    /// Annual electricity consumption (kWh)
    #[arg(long, default_value_t = 12_000.0)]
    consumption: f64,

    /// Utility rate ($/kWh)
    #[arg(long, default_value_t = 0.15)]
    utility_rate: f64,

    /// Upfront system cost ($)
    #[arg(long, default_value_t = 75_000.0)]
    system_cost: f64,

    /// Annual loan interest rate as a decimal; non-positive values use 3%
    #[arg(long, default_value_t = 0.05, allow_negative_numbers = true)]
    interest_rate: f64,

    /// System lifespan (years)
    #[arg(long, default_value_t = DEFAULT_SYSTEM_LIFESPAN)]
    lifespan: u32,

    /// Annual efficiency loss as a decimal
    #[arg(long, default_value_t = DEFAULT_ANNUAL_DEGRADATION)]
    degradation: f64,

    /// Print the year-by-year schedule after the summary
    #[arg(long)]
    schedule: bool,

    /// Print the full result as JSON
    #[arg(long, conflicts_with = "schedule")]
    json: bool,

    /// Evaluate every scenario in a CSV file instead of the single input set
    #[arg(long, value_name = "CSV")]
    scenarios: Option<PathBuf>,

    /// Write the scenario summary to a CSV file (requires --scenarios)
    #[arg(long, value_name = "CSV", requires = "scenarios")]
    output: Option<PathBuf>,
}

impl Cli {
    fn investment(&self) -> SolarInvestment {
        SolarInvestment::new(self.consumption, self.utility_rate, self.system_cost)
            .with_interest_rate(self.interest_rate)
            .with_lifespan(self.lifespan)
            .with_degradation(self.degradation)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.scenarios {
        Some(path) => run_scenarios(&mut out, path, cli.output.as_deref()),
        None => run_single(&mut out, &cli),
    }
}

fn run_single<W: Write>(out: &mut W, cli: &Cli) -> Result<()> {
    let result = NpvCalculator::new()
        .evaluate(&cli.investment())
        .context("Failed to evaluate investment")?;

    if cli.json {
        writeln!(out, "{}", to_json(&result)?)?;
        return Ok(());
    }

    for line in summary_lines(&result) {
        writeln!(out, "{line}")?;
    }

    if cli.schedule {
        writeln!(out)?;
        write_schedule(out, &result.schedule)?;
    }

    Ok(())
}

fn run_scenarios<W: Write>(out: &mut W, path: &Path, output: Option<&Path>) -> Result<()> {
    let scenarios = load_scenarios(path)
        .with_context(|| format!("Failed to load scenarios from {}", path.display()))?;
    let outcomes = evaluate_scenarios(&scenarios).context("Failed to evaluate scenarios")?;

    match output {
        Some(output_path) => {
            let file = File::create(output_path)
                .with_context(|| format!("Failed to create {}", output_path.display()))?;
            write_summary_csv(BufWriter::new(file), &outcomes)?;
            writeln!(out, "Wrote {} scenarios to {}", outcomes.len(), output_path.display())?;
        }
        None => write_scenario_lines(out, &outcomes)?,
    }

    Ok(())
}
