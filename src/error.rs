//! Error types returned by the calculation engine and the assumptions loader

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field-level validation failure on eligibility input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldViolation {
    /// Monthly income missing, zero, negative or not finite
    MonthlyIncome,
    /// Age outside the policy's accepted range
    Age { min: u32, max: u32 },
    /// No credit score band selected
    CreditScoreBand,
    /// Existing EMI below zero or not finite
    ExistingEmi,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldViolation::MonthlyIncome => write!(f, "Please enter a valid monthly income"),
            FieldViolation::Age { min, max } => {
                write!(f, "Age must be between {} and {} years", min, max)
            }
            FieldViolation::CreditScoreBand => write!(f, "Please select your credit score"),
            FieldViolation::ExistingEmi => write!(f, "Current EMI cannot be negative"),
        }
    }
}

/// Every violation found in one validation pass, in field order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// True if any violation concerns the same field as `violation`
    pub fn contains_field(&self, violation: &FieldViolation) -> bool {
        self.violations
            .iter()
            .any(|v| std::mem::discriminant(v) == std::mem::discriminant(violation))
    }

    /// `Ok(())` when nothing was collected, otherwise the collected set
    pub fn into_result(self) -> std::result::Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ". ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

/// Business-rule rejection of an otherwise valid eligibility request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Rejection {
    /// Existing EMIs already consume the whole allowed share of income
    EmiCeilingExceeded {
        max_emi: f64,
        existing_emi: f64,
    },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmiCeilingExceeded { .. } => {
                write!(f, "existing obligations exceed policy ceiling")
            }
        }
    }
}

/// Input field named in an `InvalidInput` error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoanField {
    Principal,
    AnnualRate,
    Tenure,
}

impl fmt::Display for LoanField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanField::Principal => "principal",
            LoanField::AnnualRate => "annual rate",
            LoanField::Tenure => "tenure",
        };
        f.write_str(name)
    }
}

/// Errors produced by the calculation engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: LoanField,
        reason: &'static str,
    },

    #[error("rejected: {0}")]
    PolicyRejection(Rejection),
}

impl From<ValidationErrors> for EngineError {
    fn from(errors: ValidationErrors) -> Self {
        EngineError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while loading assumption tables from disk
#[derive(Error, Debug)]
pub enum AssumptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unknown assumption key: {0}")]
    UnknownKey(String),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
