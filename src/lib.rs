//! Home Loan Engine - calculation core for home-loan calculators
//!
//! This library provides:
//! - EMI (equated monthly installment) and amortization schedules
//! - Eligibility underwriting with an EMI-to-income ceiling
//! - Refinance savings comparison
//! - Indian-rupee display formatting for results

pub mod error;
pub mod loan;
pub mod eligibility;
pub mod savings;
pub mod assumptions;
pub mod calculator;
pub mod report;

// Re-export commonly used types
pub use error::{EngineError, AssumptionsError, FieldViolation, Rejection, ValidationErrors};
pub use loan::{calculate_loan, LoanInput, LoanResult};
pub use eligibility::{check_eligibility, CreditScoreBand, EligibilityInput, EligibilityResult};
pub use savings::{compare_refinance, SavingsInput, SavingsResult};
pub use assumptions::{Assumptions, EligibilityPolicy};
pub use calculator::{Calculator, Quote, QuoteRequest};
