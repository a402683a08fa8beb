//! Human and machine readable output for projection results

use crate::error::Result;
use crate::projection::{CashflowSchedule, NpvResult};
use crate::scenario::ScenarioOutcome;
use serde::Serialize;
use std::io::Write;

/// Format a dollar amount with thousands separators and two decimals
///
/// The sign follows the dollar sign: `-1234.5` becomes `$-1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // Rounds to zero: no sign
    let sign = if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("${sign}{grouped}.{cents}")
}

/// The two-line NPV/payback summary
pub fn summary_lines(result: &NpvResult) -> Vec<String> {
    let mut lines = vec![format!("NPV of Solar Investment: {}", format_currency(result.npv))];
    match result.payback_period {
        Some(years) => lines.push(format!("Estimated Payback Period: {years} years")),
        None => lines.push(
            "The investment does not break even within the system's lifespan.".to_string(),
        ),
    }
    lines
}

/// Write the year-by-year schedule as an aligned table
pub fn write_schedule<W: Write>(out: &mut W, schedule: &CashflowSchedule) -> Result<()> {
    writeln!(
        out,
        "{:<6} {:>10} {:>14} {:>10} {:>14} {:>16}",
        "Year", "Output", "Savings", "DF", "PV Savings", "Cumulative"
    )?;
    for row in &schedule.rows {
        writeln!(
            out,
            "{:<6} {:>10.6} {:>14} {:>10.6} {:>14} {:>16}",
            row.year,
            row.degradation_factor,
            format_currency(row.annual_savings),
            row.discount_factor,
            format_currency(row.discounted_savings),
            format_currency(row.cumulative),
        )?;
    }
    Ok(())
}

/// Write one aligned line per scenario with its NPV and payback
pub fn write_scenario_lines<W: Write>(out: &mut W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    for outcome in outcomes {
        let payback = match outcome.result.payback_period {
            Some(years) => format!("{years} years"),
            None => "none within lifespan".to_string(),
        };
        writeln!(
            out,
            "{:<20} NPV {:>16}  payback {}",
            outcome.name,
            format_currency(outcome.result.npv),
            payback
        )?;
    }
    Ok(())
}

/// Serialize a result (including its schedule) as pretty JSON
pub fn to_json(result: &NpvResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[derive(Debug, Serialize)]
struct SummaryRecord<'a> {
    name: &'a str,
    discount_rate: f64,
    npv: f64,
    payback_period: Option<u32>,
}

/// Write one CSV row per scenario: name, discount_rate, npv, payback_period
///
/// An empty payback_period cell means no break-even within the lifespan.
pub fn write_summary_csv<W: Write>(out: W, outcomes: &[ScenarioOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for outcome in outcomes {
        wtr.serialize(SummaryRecord {
            name: &outcome.name,
            discount_rate: outcome.result.discount_rate,
            npv: outcome.result.npv,
            payback_period: outcome.result.payback_period,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investment::SolarInvestment;
    use crate::projection::NpvCalculator;

    fn financed(system_cost: f64) -> SolarInvestment {
        SolarInvestment::new(12_000.0, 0.15, system_cost).with_interest_rate(0.05)
    }

    fn evaluate(inv: SolarInvestment) -> NpvResult {
        NpvCalculator::new().evaluate(&inv).expect("valid inputs")
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1_714.285_714), "$1,714.29");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-50_798.904_534), "$-50,798.90");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(123.0), "$123.00");
    }

    #[test]
    fn test_summary_without_payback() {
        let result = evaluate(financed(75_000.0));
        assert_eq!(
            summary_lines(&result),
            vec![
                "NPV of Solar Investment: $-50,798.90".to_string(),
                "The investment does not break even within the system's lifespan.".to_string(),
            ]
        );
    }

    #[test]
    fn test_summary_with_payback() {
        let result = evaluate(financed(20_000.0));
        let lines = summary_lines(&result);
        assert_eq!(lines[0], "NPV of Solar Investment: $4,201.10");
        assert_eq!(lines[1], "Estimated Payback Period: 18 years");
    }

    #[test]
    fn test_schedule_table_has_row_per_year() {
        let result = evaluate(SolarInvestment::new(12_000.0, 0.15, 20_000.0).with_lifespan(5));
        let mut buf = Vec::new();
        write_schedule(&mut buf, &result.schedule).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");

        assert_eq!(text.lines().count(), 6);
        assert!(text.lines().next().is_some_and(|h| h.starts_with("Year")));
    }

    #[test]
    fn test_summary_csv() {
        let outcomes = vec![
            ScenarioOutcome {
                name: "cheap".to_string(),
                result: evaluate(SolarInvestment::new(12_000.0, 0.15, 20_000.0)),
            },
            ScenarioOutcome {
                name: "demo".to_string(),
                result: evaluate(financed(75_000.0)),
            },
        ];

        let mut buf = Vec::new();
        write_summary_csv(&mut buf, &outcomes).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "name,discount_rate,npv,payback_period");
        assert!(lines[1].starts_with("cheap,0.03,"));
        assert!(lines[1].ends_with(",15"));
        assert!(lines[2].starts_with("demo,0.05,"));
        assert!(lines[2].ends_with(','));
    }

    #[test]
    fn test_scenario_lines() {
        let outcomes = vec![
            ScenarioOutcome {
                name: "cheap".to_string(),
                result: evaluate(financed(20_000.0)),
            },
            ScenarioOutcome {
                name: "demo".to_string(),
                result: evaluate(financed(75_000.0)),
            },
        ];

        let mut buf = Vec::new();
        write_scenario_lines(&mut buf, &outcomes).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "cheap                NPV        $4,201.10  payback 18 years",
                "demo                 NPV      $-50,798.90  payback none within lifespan",
            ]
        );
    }

    #[test]
    fn test_json_contains_schedule() {
        let result = evaluate(SolarInvestment::new(12_000.0, 0.15, 20_000.0).with_lifespan(3));
        let json = to_json(&result).expect("serializable");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["payback_period"], serde_json::Value::Null);
        assert_eq!(value["schedule"]["rows"].as_array().map(|a| a.len()), Some(3));
    }
}
