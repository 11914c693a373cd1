//! Loan eligibility: input validation, EMI-ceiling rule and rate hints

mod credit;
mod rules;

pub use credit::{CreditScoreBand, RateHintTable};
pub use rules::{check_eligibility, validate, EligibilityInput, EligibilityResult};
