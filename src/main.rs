//! Home Loan CLI
//!
//! Command-line interface for the EMI, eligibility and refinance calculators

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use home_loan_engine::report::{
    eligibility_message, format_money, format_number, rejection_message, LoanBreakdown,
    SavingsComparison,
};
use home_loan_engine::{
    Assumptions, Calculator, CreditScoreBand, EligibilityInput, EngineError, LoanInput,
    SavingsInput,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "home-loan", version, about = "Home loan EMI, eligibility and savings calculators")]
struct Cli {
    /// Directory containing eligibility_policy.csv and rate_hints.csv
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Monthly installment and totals for a loan
    Emi(LoanArgs),
    /// Month-by-month repayment schedule
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,
        /// Only print the first N months
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Maximum additional loan for an applicant
    Eligibility {
        #[arg(long)]
        income: f64,
        #[arg(long)]
        age: u32,
        /// 750+, 700-749, 650-699 or any other band
        #[arg(long, default_value = "")]
        credit_score: String,
        #[arg(long, default_value_t = 0.0)]
        existing_emi: f64,
    },
    /// Savings from refinancing at a new rate
    Savings {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        current_rate: f64,
        #[arg(long)]
        new_rate: f64,
        #[arg(long)]
        tenure: f64,
    },
}

#[derive(Debug, Args)]
struct LoanArgs {
    /// Loan amount
    #[arg(long)]
    principal: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: f64,
    /// Tenure in years
    #[arg(long)]
    tenure: f64,
}

impl From<&LoanArgs> for LoanInput {
    fn from(args: &LoanArgs) -> Self {
        LoanInput::new(args.principal, args.rate, args.tenure)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("loading assumptions from {}", dir.display()))?,
        None => Assumptions::default_pricing(),
    };
    let calculator = Calculator::with_assumptions(assumptions);

    match &cli.command {
        Command::Emi(args) => {
            let result = calculator.emi(&LoanInput::from(args))?;
            if cli.json {
                return print_json(&result);
            }

            let breakdown = LoanBreakdown::from(&result);
            println!("Monthly EMI:     {}", format_money(result.monthly_payment));
            println!("Principal:       {}", format_money(result.total_principal));
            println!("Total interest:  {}", format_money(result.total_interest));
            println!("Total payable:   {}", format_money(result.total_payable));
            println!("Interest share:  {}%", format_number(breakdown.interest_share() * 100.0));
        }
        Command::Schedule { loan, limit } => {
            let rows = calculator.schedule(&LoanInput::from(loan))?;
            let shown = limit.unwrap_or(rows.len()).min(rows.len());
            if cli.json {
                return print_json(&rows[..shown]);
            }

            println!("{:>5} {:>14} {:>12} {:>12} {:>12} {:>14}",
                "Month", "Opening", "Payment", "Interest", "Principal", "Closing");
            println!("{}", "-".repeat(74));
            for row in rows.iter().take(shown) {
                println!("{:>5} {:>14.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
                    row.month,
                    row.opening_balance,
                    row.payment,
                    row.interest,
                    row.principal,
                    row.closing_balance,
                );
            }
            if rows.len() > shown {
                println!("... ({} more months)", rows.len() - shown);
            }
        }
        Command::Eligibility { income, age, credit_score, existing_emi } => {
            let input = EligibilityInput::new(*income, *age, CreditScoreBand::parse(credit_score))
                .with_existing_emi(*existing_emi);

            match calculator.eligibility(&input) {
                Ok(result) => {
                    if cli.json {
                        return print_json(&result);
                    }
                    println!("{}", eligibility_message(&input, &result));
                }
                Err(EngineError::PolicyRejection(rejection)) => {
                    log::info!("Eligibility rejected: {}", rejection);
                    if cli.json {
                        return print_json(&rejection);
                    }
                    println!("{}", rejection_message(&calculator.assumptions().policy));
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Savings { principal, current_rate, new_rate, tenure } => {
            let input = SavingsInput {
                outstanding_principal: *principal,
                current_annual_rate_pct: *current_rate,
                new_annual_rate_pct: *new_rate,
                remaining_tenure_years: *tenure,
            };
            let result = calculator.savings(&input)?;
            if cli.json {
                return print_json(&result);
            }

            let totals = SavingsComparison::from(&result);
            println!("Total savings:    {}", format_money(result.total_savings));
            println!("Current EMI:      {}", format_money(result.current_monthly_payment));
            println!("New EMI:          {}", format_money(result.new_monthly_payment));
            println!("Monthly savings:  {}", format_money(result.monthly_savings));
            println!("Current total:    {}", format_money(totals.current_total));
            println!("New total:        {}", format_money(totals.new_total));
            if result.monthly_savings < 0.0 {
                log::warn!("New rate {:.2}% costs more than current {:.2}%", new_rate, current_rate);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use home_loan_engine::loan::amortization_schedule;

    #[test]
    fn test_print_json_accepts_schedule_slice() {
        let rows = amortization_schedule(&LoanInput::new(120_000.0, 9.0, 1.0)).unwrap();
        assert!(print_json(&rows[..3]).is_ok());
    }

    #[test]
    fn test_cli_parses_schedule_limit() {
        let cli = Cli::parse_from([
            "home-loan", "schedule", "--principal", "100000", "--rate", "9", "--tenure", "5",
            "--limit", "12", "--json",
        ]);
        assert!(cli.json);
        assert!(matches!(cli.command, Command::Schedule { limit: Some(12), .. }));
    }
}
