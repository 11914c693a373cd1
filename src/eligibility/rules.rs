//! Eligibility underwriting rule

use super::credit::{CreditScoreBand, RateHintTable};
use crate::assumptions::EligibilityPolicy;
use crate::error::{EngineError, FieldViolation, Rejection, Result, ValidationErrors};
use serde::{Deserialize, Serialize};

/// Applicant details for an eligibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityInput {
    pub monthly_income: f64,
    pub age: u32,
    /// `None` when no band was selected
    pub credit_score_band: Option<CreditScoreBand>,
    #[serde(default)]
    pub existing_monthly_emi: f64,
}

impl EligibilityInput {
    pub fn new(monthly_income: f64, age: u32, credit_score_band: Option<CreditScoreBand>) -> Self {
        Self {
            monthly_income,
            age,
            credit_score_band,
            existing_monthly_emi: 0.0,
        }
    }

    pub fn with_existing_emi(mut self, existing_monthly_emi: f64) -> Self {
        self.existing_monthly_emi = existing_monthly_emi;
        self
    }
}

/// Outcome of a successful eligibility check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityResult {
    /// Largest EMI the policy allows for this income
    pub max_emi: f64,
    /// EMI headroom left after existing obligations
    pub available_emi: f64,
    /// Largest additional loan the headroom supports
    pub max_loan: f64,
    pub credit_score_band: CreditScoreBand,
    /// Starting annual rate in percent, when the band has one
    pub rate_hint_pct: Option<f64>,
}

/// Check every field and collect all violations in one pass
pub fn validate(
    input: &EligibilityInput,
    policy: &EligibilityPolicy,
) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if !(input.monthly_income.is_finite() && input.monthly_income > 0.0) {
        errors.push(FieldViolation::MonthlyIncome);
    }
    if input.age < policy.min_age || input.age > policy.max_age {
        errors.push(FieldViolation::Age {
            min: policy.min_age,
            max: policy.max_age,
        });
    }
    if input.credit_score_band.is_none() {
        errors.push(FieldViolation::CreditScoreBand);
    }
    if !(input.existing_monthly_emi.is_finite() && input.existing_monthly_emi >= 0.0) {
        errors.push(FieldViolation::ExistingEmi);
    }

    errors.into_result()
}

/// Apply the EMI-ceiling rule and size the maximum additional loan
pub fn check_eligibility(
    input: &EligibilityInput,
    policy: &EligibilityPolicy,
    rate_hints: &RateHintTable,
) -> Result<EligibilityResult> {
    validate(input, policy)?;

    let max_emi = input.monthly_income * policy.emi_ceiling_ratio;
    let available_emi = max_emi - input.existing_monthly_emi;

    if available_emi <= 0.0 {
        log::debug!(
            "Eligibility rejected: existing EMI {:.2} >= ceiling {:.2}",
            input.existing_monthly_emi,
            max_emi
        );
        return Err(EngineError::PolicyRejection(Rejection::EmiCeilingExceeded {
            max_emi,
            existing_emi: input.existing_monthly_emi,
        }));
    }

    let max_loan = available_emi * policy.loan_multiplier;
    if !max_loan.is_finite() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldViolation::MonthlyIncome);
        return Err(EngineError::Validation(errors));
    }

    // validate() guarantees a band is present
    let band = input
        .credit_score_band
        .clone()
        .ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.push(FieldViolation::CreditScoreBand);
            EngineError::Validation(errors)
        })?;
    let rate_hint_pct = rate_hints.lookup(&band);

    log::debug!(
        "Eligible: available EMI {:.2}, max loan {:.2}, rate hint {:?}",
        available_emi,
        max_loan,
        rate_hint_pct
    );

    Ok(EligibilityResult {
        max_emi,
        available_emi,
        max_loan,
        credit_score_band: band,
        rate_hint_pct,
    })
}
