//! Price a file of loan scenarios in one run
//!
//! Reads Principal,AnnualRatePct,TenureYears rows and writes the EMI,
//! total interest and total payable for each, or the error when the
//! scenario is invalid.

use anyhow::{Context, Result};
use clap::Parser;
use home_loan_engine::calculator::{Calculator, Quote, QuoteRequest};
use home_loan_engine::LoanInput;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "batch_quotes", about = "Compute EMIs for every row of a scenario CSV")]
struct Cli {
    /// Scenario file with Principal,AnnualRatePct,TenureYears columns
    #[arg(default_value = "loan_scenarios.csv")]
    input: PathBuf,

    /// Output file
    #[arg(long, default_value = "loan_quotes.csv")]
    output: PathBuf,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "TenureYears")]
    tenure_years: f64,
}

#[derive(Debug, Default, Serialize)]
struct QuoteRow {
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRatePct")]
    annual_rate_pct: f64,
    #[serde(rename = "TenureYears")]
    tenure_years: f64,
    #[serde(rename = "MonthlyEMI")]
    monthly_emi: Option<f64>,
    #[serde(rename = "TotalInterest")]
    total_interest: Option<f64>,
    #[serde(rename = "TotalPayable")]
    total_payable: Option<f64>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let mut reader = csv::Reader::from_path(&cli.input)
        .with_context(|| format!("opening {}", cli.input.display()))?;
    let scenarios: Vec<ScenarioRow> = reader
        .deserialize()
        .collect::<Result<_, csv::Error>>()
        .with_context(|| format!("reading {}", cli.input.display()))?;
    log::info!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let requests: Vec<QuoteRequest> = scenarios
        .iter()
        .map(|s| QuoteRequest::Emi(LoanInput::new(s.principal, s.annual_rate_pct, s.tenure_years)))
        .collect();

    let calculator = Calculator::new();
    let outcomes = calculator.run_batch(&requests);

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    for (scenario, outcome) in scenarios.iter().zip(&outcomes) {
        let mut row = QuoteRow {
            principal: scenario.principal,
            annual_rate_pct: scenario.annual_rate_pct,
            tenure_years: scenario.tenure_years,
            ..Default::default()
        };
        match outcome {
            Ok(Quote::Emi(result)) => {
                row.monthly_emi = Some(result.monthly_payment);
                row.total_interest = Some(result.total_interest);
                row.total_payable = Some(result.total_payable);
            }
            Ok(other) => row.error = Some(format!("unexpected quote {:?}", other)),
            Err(err) => row.error = Some(err.to_string()),
        }
        writer.serialize(&row)?;
    }
    writer.flush()?;

    log::info!(
        "Wrote {} quotes to {} in {:?}",
        outcomes.len(),
        cli.output.display(),
        start.elapsed()
    );

    Ok(())
}
