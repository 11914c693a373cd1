//! Calculator facade for single and batch quotes
//!
//! Holds one set of assumptions and routes requests to the loan,
//! eligibility and savings engines. Batches run in parallel since
//! every quote is independent.

use crate::assumptions::Assumptions;
use crate::eligibility::{check_eligibility, EligibilityInput, EligibilityResult};
use crate::error::{AssumptionsError, EngineError, Result};
use crate::loan::{amortization_schedule, calculate_loan, LoanInput, LoanResult, ScheduleRow};
use crate::savings::{compare_refinance, SavingsInput, SavingsResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single calculator request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteRequest {
    Emi(LoanInput),
    Eligibility(EligibilityInput),
    Savings(SavingsInput),
}

/// Result of a single calculator request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Quote {
    Emi(LoanResult),
    Eligibility(EligibilityResult),
    Savings(SavingsResult),
}

pub type QuoteOutcome = Result<Quote>;

/// Pre-loaded calculator for repeated quotes
///
/// # Example
/// ```ignore
/// let calculator = Calculator::from_csv()?;
/// let emi = calculator.emi(&LoanInput::new(1_000_000.0, 9.0, 20.0))?;
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    assumptions: Assumptions,
}

impl Calculator {
    /// Create calculator with default in-memory assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_pricing(),
        }
    }

    /// Create calculator by loading assumptions from CSV files
    pub fn from_csv() -> std::result::Result<Self, AssumptionsError> {
        Ok(Self {
            assumptions: Assumptions::from_csv()?,
        })
    }

    /// Create calculator from specific assumptions directory
    pub fn from_csv_path(path: &Path) -> std::result::Result<Self, AssumptionsError> {
        Ok(Self {
            assumptions: Assumptions::from_csv_path(path)?,
        })
    }

    /// Create calculator with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn emi(&self, input: &LoanInput) -> Result<LoanResult> {
        calculate_loan(input)
    }

    pub fn schedule(&self, input: &LoanInput) -> Result<Vec<ScheduleRow>> {
        amortization_schedule(input)
    }

    pub fn eligibility(&self, input: &EligibilityInput) -> Result<EligibilityResult> {
        check_eligibility(input, &self.assumptions.policy, &self.assumptions.rate_hints)
    }

    pub fn savings(&self, input: &SavingsInput) -> Result<SavingsResult> {
        compare_refinance(input)
    }

    /// Evaluate one request
    pub fn run(&self, request: &QuoteRequest) -> QuoteOutcome {
        match request {
            QuoteRequest::Emi(input) => self.emi(input).map(Quote::Emi),
            QuoteRequest::Eligibility(input) => self.eligibility(input).map(Quote::Eligibility),
            QuoteRequest::Savings(input) => self.savings(input).map(Quote::Savings),
        }
    }

    /// Evaluate many requests in parallel, preserving input order
    pub fn run_batch(&self, requests: &[QuoteRequest]) -> Vec<QuoteOutcome> {
        let outcomes: Vec<QuoteOutcome> = requests.par_iter().map(|r| self.run(r)).collect();

        let failed = outcomes.iter().filter(|o| o.is_err()).count();
        if failed > 0 {
            log::warn!(
                "{} of {} quotes failed ({} rejected by policy)",
                failed,
                outcomes.len(),
                count_rejections(&outcomes)
            );
        } else {
            log::info!("Evaluated {} quotes", outcomes.len());
        }

        outcomes
    }

    /// Get reference to assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Count outcomes that were rejected by policy rather than invalid
pub fn count_rejections(outcomes: &[QuoteOutcome]) -> usize {
    outcomes
        .iter()
        .filter(|o| matches!(o, Err(EngineError::PolicyRejection(_))))
        .count()
}
