//! Refinance savings: compare the current loan with a lower-rate replacement

use crate::error::Result;
use crate::loan::{calculate_loan, LoanInput};
use serde::{Deserialize, Serialize};

/// Outstanding loan and the rate on offer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsInput {
    pub outstanding_principal: f64,
    pub current_annual_rate_pct: f64,
    pub new_annual_rate_pct: f64,
    pub remaining_tenure_years: f64,
}

impl SavingsInput {
    pub fn current_loan(&self) -> LoanInput {
        LoanInput::new(
            self.outstanding_principal,
            self.current_annual_rate_pct,
            self.remaining_tenure_years,
        )
    }

    pub fn new_loan(&self) -> LoanInput {
        LoanInput::new(
            self.outstanding_principal,
            self.new_annual_rate_pct,
            self.remaining_tenure_years,
        )
    }
}

/// Side-by-side comparison of the two loans
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    pub current_monthly_payment: f64,
    pub new_monthly_payment: f64,
    /// Negative when the new rate is worse
    pub monthly_savings: f64,
    pub total_savings: f64,
    pub current_total_payable: f64,
    pub new_total_payable: f64,
    pub installments: f64,
}

/// Run the EMI formula at both rates over the same principal and term
pub fn compare_refinance(input: &SavingsInput) -> Result<SavingsResult> {
    let current = calculate_loan(&input.current_loan())?;
    let new = calculate_loan(&input.new_loan())?;

    let n = current.installments;
    let monthly_savings = current.monthly_payment - new.monthly_payment;

    log::debug!(
        "Refinance {:.2}% -> {:.2}%: monthly savings {:.4}",
        input.current_annual_rate_pct,
        input.new_annual_rate_pct,
        monthly_savings
    );

    Ok(SavingsResult {
        current_monthly_payment: current.monthly_payment,
        new_monthly_payment: new.monthly_payment,
        monthly_savings,
        total_savings: monthly_savings * n,
        current_total_payable: current.total_payable,
        new_total_payable: new.total_payable,
        installments: n,
    })
}
