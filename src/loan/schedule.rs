//! Month-by-month amortization schedule

use super::emi::{monthly_payment, LoanInput};
use crate::error::{EngineError, LoanField, Result};
use serde::{Deserialize, Serialize};

/// One installment of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Longest schedule that will be built (1000 years of monthly rows)
pub const MAX_SCHEDULE_MONTHS: u32 = 12_000;

/// Build the repayment schedule for a loan.
///
/// Produces `ceil(installments)` rows. The final payment settles whatever
/// balance remains so the schedule always closes at exactly zero.
pub fn amortization_schedule(input: &LoanInput) -> Result<Vec<ScheduleRow>> {
    input.validate()?;

    let rate = input.monthly_rate();
    let n = input.installments();
    let emi = monthly_payment(input.principal, rate, n);
    let months = n.ceil();
    if months > f64::from(MAX_SCHEDULE_MONTHS) {
        return Err(EngineError::InvalidInput {
            field: LoanField::Tenure,
            reason: "too long for a monthly schedule",
        });
    }
    // Bounded by MAX_SCHEDULE_MONTHS above
    let months = months as u32;

    let mut rows = Vec::new();
    let mut balance = input.principal;

    for month in 1..=months {
        let interest = balance * rate;
        let principal = if month == months {
            balance
        } else {
            (emi - interest).min(balance)
        };
        let closing_balance = if month == months { 0.0 } else { balance - principal };

        rows.push(ScheduleRow {
            month,
            opening_balance: balance,
            payment: interest + principal,
            interest,
            principal,
            closing_balance,
        });

        balance = closing_balance;
    }

    log::debug!("Built {}-month schedule for P={:.2}", months, input.principal);

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::calculate_loan;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_schedule_length_and_close() {
        let input = LoanInput::new(1_000_000.0, 9.0, 20.0);
        let rows = amortization_schedule(&input).unwrap();

        assert_eq!(rows.len(), 240);
        assert_eq!(rows.first().unwrap().month, 1);
        assert_eq!(rows.last().unwrap().closing_balance, 0.0);
    }

    #[test]
    fn test_schedule_matches_totals() {
        let input = LoanInput::new(2_500_000.0, 8.5, 15.0);
        let rows = amortization_schedule(&input).unwrap();
        let result = calculate_loan(&input).unwrap();

        let principal_paid: f64 = rows.iter().map(|r| r.principal).sum();
        let interest_paid: f64 = rows.iter().map(|r| r.interest).sum();

        assert_relative_eq!(principal_paid, input.principal, max_relative = 1e-9);
        assert_relative_eq!(interest_paid, result.total_interest, max_relative = 1e-6);

        // Every payment except possibly the final one equals the EMI
        for row in &rows[..rows.len() - 1] {
            assert_abs_diff_eq!(row.payment, result.monthly_payment, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(rows.last().unwrap().payment, result.monthly_payment, epsilon = 1e-3);
    }

    #[test]
    fn test_interest_share_declines() {
        let rows = amortization_schedule(&LoanInput::new(500_000.0, 10.0, 5.0)).unwrap();
        assert!(rows[0].interest > rows[rows.len() - 1].interest);
        assert!(rows[0].principal < rows[rows.len() - 1].principal);
    }

    #[test]
    fn test_zero_rate_schedule() {
        let rows = amortization_schedule(&LoanInput::new(12_000.0, 0.0, 1.0)).unwrap();
        assert_eq!(rows.len(), 12);
        for row in &rows {
            assert_eq!(row.interest, 0.0);
            assert_abs_diff_eq!(row.principal, 1000.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_fractional_tenure_rounds_up() {
        // 1.25 years = 15 installments
        let rows = amortization_schedule(&LoanInput::new(30_000.0, 12.0, 1.25)).unwrap();
        assert_eq!(rows.len(), 15);

        // 0.55 years = 6.6 installments, settled in 7 rows
        let rows = amortization_schedule(&LoanInput::new(30_000.0, 12.0, 0.55)).unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows.last().unwrap().closing_balance, 0.0);
    }

    #[test]
    fn test_oversized_tenure_rejected() {
        let err = amortization_schedule(&LoanInput::new(1000.0, 9.0, 1e9)).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput { field: LoanField::Tenure, .. }
        ));
    }

    #[test]
    fn test_schedule_at_month_cap() {
        let years = f64::from(MAX_SCHEDULE_MONTHS) / 12.0;
        let rows = amortization_schedule(&LoanInput::new(1000.0, 9.0, years)).unwrap();
        assert_eq!(rows.len(), MAX_SCHEDULE_MONTHS as usize);
        assert_eq!(rows.last().unwrap().closing_balance, 0.0);

        let over = LoanInput::new(1000.0, 9.0, years + 1.0);
        assert!(amortization_schedule(&over).is_err());
    }

    #[test]
    fn test_invalid_input_propagates() {
        assert!(amortization_schedule(&LoanInput::new(0.0, 9.0, 10.0)).is_err());
    }
}
