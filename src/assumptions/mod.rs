//! Underwriting assumptions: eligibility policy constants and rate hints

pub mod loader;

use crate::eligibility::RateHintTable;
use crate::error::AssumptionsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Business constants behind the eligibility rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityPolicy {
    /// Youngest accepted applicant age (inclusive)
    pub min_age: u32,
    /// Oldest accepted applicant age (inclusive)
    pub max_age: u32,
    /// Share of monthly income that may go to EMIs
    pub emi_ceiling_ratio: f64,
    /// Loan size per unit of monthly EMI headroom
    pub loan_multiplier: f64,
}

impl EligibilityPolicy {
    pub fn check(&self) -> Result<(), AssumptionsError> {
        if self.min_age > self.max_age {
            return Err(invalid("MinAge", self.min_age));
        }
        if !(self.emi_ceiling_ratio > 0.0 && self.emi_ceiling_ratio <= 1.0) {
            return Err(invalid("EmiCeilingRatio", self.emi_ceiling_ratio));
        }
        if !(self.loan_multiplier > 0.0 && self.loan_multiplier.is_finite()) {
            return Err(invalid("LoanMultiplier", self.loan_multiplier));
        }
        Ok(())
    }
}

impl Default for EligibilityPolicy {
    fn default() -> Self {
        Self {
            min_age: 21,
            max_age: 65,
            emi_ceiling_ratio: 0.5,
            loan_multiplier: 200.0,
        }
    }
}

fn invalid(key: &str, value: impl ToString) -> AssumptionsError {
    AssumptionsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Container for all calculation assumptions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assumptions {
    pub policy: EligibilityPolicy,
    pub rate_hints: RateHintTable,
}

impl Assumptions {
    /// Built-in values used on the public calculators
    pub fn default_pricing() -> Self {
        Self {
            policy: EligibilityPolicy::default(),
            rate_hints: RateHintTable::default(),
        }
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self, AssumptionsError> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self, AssumptionsError> {
        let policy = loader::load_eligibility_policy(path)?;
        let rate_hints = loader::load_rate_hints(path)?;

        log::info!("Loaded assumptions from {}", path.display());

        Ok(Self { policy, rate_hints })
    }
}
