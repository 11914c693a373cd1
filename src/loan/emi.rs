//! Equated Monthly Installment (EMI) formula

use crate::error::{EngineError, LoanField, Result};
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Loan terms as entered by the borrower
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed (currency units)
    pub principal: f64,
    /// Nominal annual interest rate in percent (9.0 = 9%)
    pub annual_rate_pct: f64,
    /// Loan duration in years (fractional years allowed)
    pub tenure_years: f64,
}

impl LoanInput {
    pub fn new(principal: f64, annual_rate_pct: f64, tenure_years: f64) -> Self {
        Self {
            principal,
            annual_rate_pct,
            tenure_years,
        }
    }

    /// Number of monthly installments
    pub fn installments(&self) -> f64 {
        self.tenure_years * MONTHS_PER_YEAR
    }

    /// Monthly periodic rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_pct)
    }

    /// Reject inputs for which the formula is undefined
    pub fn validate(&self) -> Result<()> {
        if !self.principal.is_finite() || self.principal <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: LoanField::Principal,
                reason: "must be a positive amount",
            });
        }
        if !self.annual_rate_pct.is_finite() || self.annual_rate_pct < 0.0 {
            return Err(EngineError::InvalidInput {
                field: LoanField::AnnualRate,
                reason: "must be zero or positive",
            });
        }
        let n = self.installments();
        if !n.is_finite() || n <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: LoanField::Tenure,
                reason: "must be greater than zero",
            });
        }
        Ok(())
    }
}

/// Payment figures for one loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_payable: f64,
    pub installments: f64,
}

/// Convert an annual percentage rate to a monthly decimal rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / MONTHS_PER_YEAR / 100.0
}

/// Level payment that amortizes `principal` over `installments` periods at
/// `rate` per period.
///
/// Callers must pass a positive principal and installment count. A zero rate
/// repays principal in equal parts.
///
/// Evaluated as `P / a` with annuity factor `a = (1 - (1+r)^-n) / r`, written
/// with `ln_1p`/`exp_m1` so that rates below f64 resolution tend to `P / n`
/// and very long terms tend to `P * r` instead of overflowing.
pub fn monthly_payment(principal: f64, rate: f64, installments: f64) -> f64 {
    if rate == 0.0 {
        return principal / installments;
    }

    let annuity = -(-installments * rate.ln_1p()).exp_m1() / rate;
    if annuity.is_finite() && annuity > 0.0 {
        principal / annuity
    } else {
        principal / installments
    }
}

/// Compute EMI, total interest and total payable for a loan
pub fn calculate_loan(input: &LoanInput) -> Result<LoanResult> {
    input.validate()?;

    let rate = input.monthly_rate();
    let n = input.installments();
    let emi = monthly_payment(input.principal, rate, n);
    let total_payable = emi * n;
    if !total_payable.is_finite() {
        return Err(EngineError::InvalidInput {
            field: LoanField::Tenure,
            reason: "too long to evaluate for this principal",
        });
    }
    // Zero-rate loans can land a rounding step below principal
    let total_interest = (total_payable - input.principal).max(0.0);

    log::debug!(
        "EMI for P={:.2} r={:.6} n={}: {:.4}",
        input.principal,
        rate,
        n,
        emi
    );

    Ok(LoanResult {
        monthly_payment: emi,
        total_principal: input.principal,
        total_interest,
        total_payable,
        installments: n,
    })
}
