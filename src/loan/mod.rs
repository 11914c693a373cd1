//! Amortized loan calculations: EMI formula and month-by-month schedule

mod emi;
mod schedule;

pub use emi::{calculate_loan, monthly_payment, monthly_rate, LoanInput, LoanResult, MONTHS_PER_YEAR};
pub use schedule::{amortization_schedule, ScheduleRow, MAX_SCHEDULE_MONTHS};
